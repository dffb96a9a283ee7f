use crate::domain::{Dashboard, ExploreRow, SkillListingRow, User, UserSkillSummary};
use crate::transport::http::handlers::{auth, dashboard, health, skills};
use crate::transport::http::types::{
    AddSkillRequest, AppState, CheckSkillsResponse, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, SkillInput, UpdateSkillRequest,
};
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        auth::register_handler,
        auth::login_handler,
        auth::check_skills_handler,
        skills::add_skill_handler,
        skills::list_skills_handler,
        skills::user_skills_handler,
        skills::delete_skill_handler,
        skills::update_skill_handler,
        dashboard::dashboard_handler,
        dashboard::get_user_handler
    ),
    components(schemas(
        MessageResponse,
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        CheckSkillsResponse,
        AddSkillRequest,
        SkillInput,
        UpdateSkillRequest,
        Dashboard,
        ExploreRow,
        SkillListingRow,
        User,
        UserSkillSummary
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler))
        .route("/check-skills/:user_id", get(auth::check_skills_handler))
        .route("/add-skill", post(skills::add_skill_handler))
        .route("/skills", get(skills::list_skills_handler))
        .route("/user-skills/:user_id", get(skills::user_skills_handler))
        .route("/delete-skill/:id", delete(skills::delete_skill_handler))
        .route("/update-skill/:id", put(skills::update_skill_handler))
        .route("/dashboard/:user_id", get(dashboard::dashboard_handler))
        .route("/get-user/:user_id", get(dashboard::get_user_handler))
        .with_state(app_state)
}
