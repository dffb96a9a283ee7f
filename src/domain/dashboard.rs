use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the explore set: another user's declared skill plus a derived
/// role label. `skill_type` is `Teach` when the teach flag is set, `Learn`
/// when only the learn flag is set, and omitted when neither flag is set
/// (consumers must tolerate its absence).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExploreRow {
    pub user_id: i32,
    pub user_name: String,
    pub skill_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<String>,
}

/// Payload for `GET /dashboard/:user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    pub user: User,
    #[serde(rename = "teachSkills")]
    pub teach_skills: Vec<String>,
    #[serde(rename = "learnSkills")]
    pub learn_skills: Vec<String>,
    pub explore: Vec<ExploreRow>,
}

/// One row of `GET /user-skills/:user_id` — the profile page's editable list.
/// `skill_type` derives teach-first; rows with neither flag report `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSkillSummary {
    pub id: i32,
    pub skill_name: String,
    #[serde(rename = "type")]
    pub skill_type: String,
}

/// One row of the flat `GET /skills` join across all users.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct SkillListingRow {
    pub user_name: String,
    pub skill_name: String,
    pub description: Option<String>,
    pub can_teach: bool,
    pub can_learn: bool,
    pub experience_level: Option<String>,
}
