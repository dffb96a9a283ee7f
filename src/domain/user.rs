use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public user profile, as returned by `/get-user` and inside the dashboard.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Internal row shape including the password hash.
///
/// Used only by the authentication paths; never serialized into a response.
#[derive(Debug, sqlx::FromRow)]
pub struct UserRecord {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}
