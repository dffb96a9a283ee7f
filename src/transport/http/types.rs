use crate::app::exchange_service::ExchangeService;
use crate::domain::{ExperienceLevel, SkillRole};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ExchangeService>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Generic `{ "message": ... }` body used by writes and by every error path.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i32,
    #[serde(rename = "hasSkills")]
    pub has_skills: bool,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CheckSkillsResponse {
    #[serde(rename = "hasSkills")]
    pub has_skills: bool,
}

/// One block of the add-skill form (teach or learn side).
#[derive(Deserialize, Debug, ToSchema)]
pub struct SkillInput {
    pub skill_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddSkillRequest {
    pub user_id: i32,
    #[serde(default, rename = "teachSkill")]
    pub teach_skill: Option<SkillInput>,
    #[serde(default, rename = "learnSkill")]
    pub learn_skill: Option<SkillInput>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateSkillRequest {
    pub skill_name: String,
    #[serde(rename = "type")]
    pub skill_type: SkillRole,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageResponse::new(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
