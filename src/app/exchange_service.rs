//! The skill-exchange application service.
//!
//! This module is the intermediary between the HTTP handlers and the database.
//! It owns the connection pool and implements every operation of the system:
//! 1.  Registration and login (bcrypt hashing/verification).
//! 2.  The skill directory (get-or-create by name, additive declaration
//!     upserts, replacement edits, deletion).
//! 3.  The dashboard/explore queries the listing engine consumes.
//!
//! Multi-step write paths (resolve-or-create skill + touch the association
//! row) run inside a single SQL transaction so a failure between the steps
//! cannot leave the skill created without its association.

use crate::app::error::{is_foreign_key_violation, is_unique_violation, ServiceError};
use crate::domain::{
    Dashboard, ExperienceLevel, ExploreRow, SkillListingRow, SkillRole, User, UserRecord,
    UserSkillSummary,
};
use crate::infra::config;
use crate::storage::schema;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgConnection, PgPool, Row};
use tracing::info;

/// Outcome of a successful login: who, and whether they already declared
/// any skills (drives the client's post-login redirect).
#[derive(Debug, Clone, Copy)]
pub struct LoginOutcome {
    pub user_id: i32,
    pub has_skills: bool,
}

/// The main service that manages all database interaction.
pub struct ExchangeService {
    pool: PgPool,
}

impl ExchangeService {
    /// Connects to the database from the environment and ensures the schema
    /// exists.
    pub async fn new() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();

        let pool = PgPoolOptions::new()
            .max_connections(config::max_db_connections())
            .connect(&database_url)
            .await?;

        schema::ensure_schema(&pool).await?;
        info!("database schema ensured");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ---------------------------------------------------------------------
    // Authentication
    // ---------------------------------------------------------------------

    /// Registers a new user. The password is bcrypt-hashed before storage.
    ///
    /// Fails with `Validation` when a required field is empty and with
    /// `Conflict` when the email or username is already taken. Does not log
    /// the user in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        bio: Option<&str>,
        username: &str,
        password: &str,
        contact_number: Option<&str>,
        location: Option<&str>,
    ) -> Result<i32, ServiceError> {
        for (field, value) in [
            ("name", name),
            ("email", email),
            ("username", username),
            ("password", password),
        ] {
            if value.trim().is_empty() {
                return Err(ServiceError::Validation(format!(
                    "Required field missing: {}",
                    field
                )));
            }
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let row = sqlx::query(
            "INSERT INTO users (name, email, bio, username, password_hash, contact_number, location)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING user_id",
        )
        .bind(name)
        .bind(email)
        .bind(bio)
        .bind(username)
        .bind(&password_hash)
        .bind(contact_number)
        .bind(location)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::map_user_conflict)?;

        let user_id: i32 = row.try_get("user_id")?;
        info!(user_id, "registered new user");
        Ok(user_id)
    }

    /// Authenticates a login attempt against the stored bcrypt hash.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ServiceError> {
        let record: Option<UserRecord> = sqlx::query_as(
            "SELECT user_id, name, email, username, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let record =
            record.ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if !bcrypt::verify(password, &record.password_hash)? {
            return Err(ServiceError::Auth("Invalid password".to_string()));
        }

        let has_skills = self.has_skills(record.user_id).await?;
        Ok(LoginOutcome {
            user_id: record.user_id,
            has_skills,
        })
    }

    /// Whether the user has declared at least one skill association.
    pub async fn has_skills(&self, user_id: i32) -> Result<bool, ServiceError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_skills WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    // ---------------------------------------------------------------------
    // Skill directory
    // ---------------------------------------------------------------------

    /// Resolves a skill name to its id, creating the skill on first
    /// reference. Idempotent: the same name always yields the same id.
    pub async fn get_or_create_skill(
        &self,
        skill_name: &str,
        description: Option<&str>,
    ) -> Result<i32, ServiceError> {
        let mut conn = self.pool.acquire().await?;
        resolve_skill(&mut *conn, skill_name, description).await
    }

    /// Declares that `user_id` can teach or wants to learn `skill_name`,
    /// creating the skill on first reference.
    ///
    /// The whole resolve-or-create + upsert sequence runs in one transaction.
    /// The upsert is additive: only the flag for `role` is raised; the
    /// opposite flag on an existing row is left untouched. The experience
    /// level is overwritten unconditionally, so callers must resend it to
    /// preserve it.
    pub async fn declare_skill(
        &self,
        user_id: i32,
        skill_name: &str,
        description: Option<&str>,
        role: SkillRole,
        experience_level: Option<ExperienceLevel>,
    ) -> Result<(), ServiceError> {
        if skill_name.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Skill name must not be empty".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let skill_id = resolve_skill(&mut *tx, skill_name, description).await?;

        sqlx::query(
            "INSERT INTO user_skills (user_id, skill_id, can_teach, can_learn, experience_level)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id, skill_id) DO UPDATE SET
                 can_teach = user_skills.can_teach OR EXCLUDED.can_teach,
                 can_learn = user_skills.can_learn OR EXCLUDED.can_learn,
                 experience_level = EXCLUDED.experience_level",
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(role == SkillRole::Teach)
        .bind(role == SkillRole::Learn)
        .bind(experience_level.map(|l| l.as_str()))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ServiceError::NotFound("User not found".to_string())
            } else {
                ServiceError::Database(e)
            }
        })?;

        tx.commit().await?;
        info!(user_id, skill_name, ?role, "declared skill");
        Ok(())
    }

    /// Rewrites an association to a (possibly new) skill and exactly the
    /// requested role. Unlike `declare_skill`, this is a replacement edit:
    /// both role flags are overwritten so the row reflects the new role only.
    ///
    /// Fails with `Conflict` when the user already holds a separate row for
    /// the target skill.
    pub async fn update_assignment(
        &self,
        association_id: i32,
        skill_name: &str,
        role: SkillRole,
    ) -> Result<(), ServiceError> {
        if skill_name.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Skill name must not be empty".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let skill_id = resolve_skill(&mut *tx, skill_name, None).await?;

        let result = sqlx::query(
            "UPDATE user_skills SET skill_id = $1, can_teach = $2, can_learn = $3 WHERE id = $4",
        )
        .bind(skill_id)
        .bind(role == SkillRole::Teach)
        .bind(role == SkillRole::Learn)
        .bind(association_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // Retargeting onto a skill the user already has a row for.
            if is_unique_violation(&e) {
                ServiceError::Conflict("You already have an entry for that skill".to_string())
            } else {
                ServiceError::Database(e)
            }
        })?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(ServiceError::NotFound("Skill assignment not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a single association row. Idempotent: deleting an unknown id
    /// affects zero rows and still reports success.
    pub async fn delete_association(&self, association_id: i32) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM user_skills WHERE id = $1")
            .bind(association_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Dashboard / explore queries
    // ---------------------------------------------------------------------

    /// Computes the dashboard payload: the user's profile, their teach/learn
    /// skill-name lists, and every *other* user's declared skills (the
    /// explore set). No server-side pagination is applied; the whole
    /// cross-user set is returned per call.
    pub async fn dashboard(&self, user_id: i32) -> Result<Dashboard, ServiceError> {
        let user = self.get_user(user_id).await?;

        let own_rows = sqlx::query(
            "SELECT s.skill_name, us.can_teach, us.can_learn
             FROM user_skills us
             JOIN skills s ON us.skill_id = s.skill_id
             WHERE us.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut teach_skills = Vec::new();
        let mut learn_skills = Vec::new();
        for row in own_rows {
            let name: String = row.try_get("skill_name")?;
            if row.try_get::<bool, _>("can_teach")? {
                teach_skills.push(name.clone());
            }
            if row.try_get::<bool, _>("can_learn")? {
                learn_skills.push(name);
            }
        }

        let explore_rows = sqlx::query(
            "SELECT us.user_id, u.name AS user_name, s.skill_name, us.can_teach, us.can_learn
             FROM user_skills us
             JOIN users u ON us.user_id = u.user_id
             JOIN skills s ON us.skill_id = s.skill_id
             WHERE us.user_id != $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut explore = Vec::with_capacity(explore_rows.len());
        for row in explore_rows {
            explore.push(ExploreRow {
                user_id: row.try_get("user_id")?,
                user_name: row.try_get("user_name")?,
                skill_name: row.try_get("skill_name")?,
                skill_type: derive_role_label(
                    row.try_get("can_teach")?,
                    row.try_get("can_learn")?,
                ),
            });
        }

        Ok(Dashboard {
            user,
            teach_skills,
            learn_skills,
            explore,
        })
    }

    /// Public profile lookup.
    pub async fn get_user(&self, user_id: i32) -> Result<User, ServiceError> {
        let user: Option<User> =
            sqlx::query_as("SELECT name, email, username FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        user.ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    /// The user's editable association list for the profile page.
    pub async fn user_skills(&self, user_id: i32) -> Result<Vec<UserSkillSummary>, ServiceError> {
        let rows = sqlx::query(
            "SELECT us.id, s.skill_name, us.can_teach, us.can_learn
             FROM user_skills us
             JOIN skills s ON us.skill_id = s.skill_id
             WHERE us.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let can_teach: bool = row.try_get("can_teach")?;
            let can_learn: bool = row.try_get("can_learn")?;
            summaries.push(UserSkillSummary {
                id: row.try_get("id")?,
                skill_name: row.try_get("skill_name")?,
                skill_type: derive_role_label(can_teach, can_learn)
                    .unwrap_or_else(|| "Other".to_string()),
            });
        }
        Ok(summaries)
    }

    /// The flat association join across all users (explore page listing).
    pub async fn list_skills(&self) -> Result<Vec<SkillListingRow>, ServiceError> {
        let rows: Vec<SkillListingRow> = sqlx::query_as(
            "SELECT u.name AS user_name, s.skill_name, s.description,
                    us.can_teach, us.can_learn, us.experience_level
             FROM user_skills us
             JOIN users u ON us.user_id = u.user_id
             JOIN skills s ON us.skill_id = s.skill_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    fn map_user_conflict(err: sqlx::Error) -> ServiceError {
        if is_unique_violation(&err) {
            let constraint = match &err {
                sqlx::Error::Database(db) => db.constraint().unwrap_or_default().to_string(),
                _ => String::new(),
            };
            let message = if constraint.contains("email") {
                "Email is already registered"
            } else if constraint.contains("username") {
                "Username is already taken"
            } else {
                "Account already exists"
            };
            return ServiceError::Conflict(message.to_string());
        }
        ServiceError::Database(err)
    }
}

/// `Teach` wins when both flags are set; `None` when neither is.
fn derive_role_label(can_teach: bool, can_learn: bool) -> Option<String> {
    if can_teach {
        Some("Teach".to_string())
    } else if can_learn {
        Some("Learn".to_string())
    } else {
        None
    }
}

/// Looks a skill up by exact name, inserting it on first reference.
///
/// A racing duplicate insert loses to the unique constraint (`ON CONFLICT DO
/// NOTHING` returns no row) and is absorbed by re-running the lookup.
async fn resolve_skill(
    conn: &mut PgConnection,
    skill_name: &str,
    description: Option<&str>,
) -> Result<i32, ServiceError> {
    let existing: Option<i32> =
        sqlx::query_scalar("SELECT skill_id FROM skills WHERE skill_name = $1")
            .bind(skill_name)
            .fetch_optional(&mut *conn)
            .await?;
    if let Some(id) = existing {
        return Ok(id);
    }

    let inserted: Option<i32> = sqlx::query_scalar(
        "INSERT INTO skills (skill_name, description) VALUES ($1, $2)
         ON CONFLICT (skill_name) DO NOTHING
         RETURNING skill_id",
    )
    .bind(skill_name)
    .bind(description)
    .fetch_optional(&mut *conn)
    .await?;
    if let Some(id) = inserted {
        return Ok(id);
    }

    // Lost the insert race; the row exists now.
    let id: i32 = sqlx::query_scalar("SELECT skill_id FROM skills WHERE skill_name = $1")
        .bind(skill_name)
        .fetch_one(&mut *conn)
        .await?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_label_prefers_teach() {
        assert_eq!(derive_role_label(true, true).as_deref(), Some("Teach"));
        assert_eq!(derive_role_label(true, false).as_deref(), Some("Teach"));
        assert_eq!(derive_role_label(false, true).as_deref(), Some("Learn"));
        assert_eq!(derive_role_label(false, false), None);
    }
}
