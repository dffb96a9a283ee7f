use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    json_422, AppState, CheckSkillsResponse, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Required field missing", body = MessageResponse),
        (status = 409, description = "Email or username already taken", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn register_handler(
    State(state): State<AppState>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return Ok(json_422(e, "{\"name\", \"email\", \"username\", \"password\", ...}").into_response()),
    };

    state
        .service
        .register(
            &request.name,
            &request.email,
            request.bio.as_deref(),
            &request.username,
            &request.password,
            request.contact_number.as_deref(),
            request.location.as_deref(),
        )
        .await?;

    Ok(Json(MessageResponse::new("Registered successfully!")).into_response())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid password", body = MessageResponse),
        (status = 404, description = "Unknown email", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return Ok(json_422(e, "{\"email\", \"password\"}").into_response()),
    };

    let outcome = state.service.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: outcome.user_id,
        has_skills: outcome.has_skills,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/check-skills/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Whether the user has declared any skills", body = CheckSkillsResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn check_skills_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<CheckSkillsResponse>, ApiError> {
    let has_skills = state.service.has_skills(user_id).await?;
    Ok(Json(CheckSkillsResponse { has_skills }))
}
