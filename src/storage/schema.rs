//! Relational schema bootstrap.
//!
//! Tables are created idempotently at startup. Uniqueness of email, username
//! and skill name plus the one-row-per-(user, skill) invariant are enforced
//! here by the database, not by application-level locks; cascade deletes keep
//! associations consistent when a user or skill disappears.

use sqlx::PgPool;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            user_id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            bio TEXT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            contact_number TEXT,
            location TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS skills (
            skill_id SERIAL PRIMARY KEY,
            skill_name TEXT NOT NULL UNIQUE,
            description TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_skills (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
            skill_id INTEGER NOT NULL REFERENCES skills(skill_id) ON DELETE CASCADE,
            can_teach BOOLEAN NOT NULL DEFAULT FALSE,
            can_learn BOOLEAN NOT NULL DEFAULT FALSE,
            experience_level TEXT,
            UNIQUE (user_id, skill_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
