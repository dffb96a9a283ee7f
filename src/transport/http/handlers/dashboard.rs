use crate::domain::{Dashboard, User};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{AppState, MessageResponse};
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/dashboard/{user_id}",
    params(("user_id" = i32, Path, description = "Viewing user identifier")),
    responses(
        (status = 200, description = "Profile, own skill lists and the explore set", body = Dashboard),
        (status = 404, description = "Unknown user", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = state.service.dashboard(user_id).await?;
    Ok(Json(dashboard))
}

#[utoipa::path(
    get,
    path = "/get-user/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Public profile", body = User),
        (status = 404, description = "Unknown user", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = state.service.get_user(user_id).await?;
    Ok(Json(user))
}
