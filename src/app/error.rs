//! Service-level error taxonomy.
//!
//! Every fallible operation on [`crate::ExchangeService`] returns one of these
//! variants. The HTTP layer maps them onto status codes; nothing below the
//! transport layer knows about HTTP.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    /// Unique-constraint violation surfaced as a user-actionable conflict
    /// (duplicate email, username or skill name).
    #[error("{0}")]
    Conflict(String),

    /// Password mismatch on login.
    #[error("{0}")]
    Auth(String),

    /// Unknown user or association id.
    #[error("{0}")]
    NotFound(String),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// True when the error is a Postgres unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, "23505")
}

/// True when the error is a Postgres foreign-key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, "23503")
}

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(code),
        _ => false,
    }
}
