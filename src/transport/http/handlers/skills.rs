use crate::app::error::ServiceError;
use crate::domain::{SkillListingRow, SkillRole, UserSkillSummary};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    json_422, AddSkillRequest, AppState, MessageResponse, SkillInput, UpdateSkillRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/add-skill",
    request_body = AddSkillRequest,
    responses(
        (status = 200, description = "Skills added", body = MessageResponse),
        (status = 400, description = "No skill block provided", body = MessageResponse),
        (status = 404, description = "Unknown user", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn add_skill_handler(
    State(state): State<AppState>,
    request: Result<Json<AddSkillRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return Ok(
                json_422(e, "{\"user_id\", \"teachSkill\"?, \"learnSkill\"?}").into_response()
            )
        }
    };

    if request.teach_skill.is_none() && request.learn_skill.is_none() {
        return Err(ServiceError::Validation(
            "At least one of teachSkill or learnSkill is required".to_string(),
        )
        .into());
    }

    // Each declaration is atomic on its own (skill resolution + association
    // upsert in one transaction); a teach/learn pair is two declarations.
    if let Some(block) = &request.teach_skill {
        declare(&state, request.user_id, block, SkillRole::Teach).await?;
    }
    if let Some(block) = &request.learn_skill {
        declare(&state, request.user_id, block, SkillRole::Learn).await?;
    }

    Ok(Json(MessageResponse::new("Skills added successfully!")).into_response())
}

async fn declare(
    state: &AppState,
    user_id: i32,
    block: &SkillInput,
    role: SkillRole,
) -> Result<(), ServiceError> {
    state
        .service
        .declare_skill(
            user_id,
            &block.skill_name,
            block.description.as_deref(),
            role,
            block.experience_level,
        )
        .await
}

#[utoipa::path(
    get,
    path = "/skills",
    responses(
        (status = 200, description = "Every declared association across all users", body = [SkillListingRow]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_skills_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillListingRow>>, ApiError> {
    let rows = state.service.list_skills().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/user-skills/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user's editable association list", body = [UserSkillSummary]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn user_skills_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<UserSkillSummary>>, ApiError> {
    let rows = state.service.user_skills(user_id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    delete,
    path = "/delete-skill/{id}",
    params(("id" = i32, Path, description = "Association identifier")),
    responses(
        (status = 200, description = "Deleted (idempotent)", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete_association(id).await?;
    Ok(Json(MessageResponse::new("Skill deleted successfully!")))
}

#[utoipa::path(
    put,
    path = "/update-skill/{id}",
    params(("id" = i32, Path, description = "Association identifier")),
    request_body = UpdateSkillRequest,
    responses(
        (status = 200, description = "Association rewritten to the new skill/role", body = MessageResponse),
        (status = 404, description = "Unknown association id", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn update_skill_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Result<Json<UpdateSkillRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return Ok(json_422(e, "{\"skill_name\", \"type\"}").into_response()),
    };

    state
        .service
        .update_assignment(id, &request.skill_name, request.skill_type)
        .await?;

    Ok(Json(MessageResponse::new("Skill updated successfully!")).into_response())
}
