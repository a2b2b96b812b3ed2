/// User account entity and representation
///
/// Users own todos and categories and authenticate with email/password
/// credentials. Passwords are stored as Argon2id hashes, never in
/// plaintext, and the representation never serializes them back out.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     email TEXT NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     name VARCHAR(255),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity as persisted by the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned id
    pub id: i64,

    /// Email address, unique across users
    pub email: String,

    /// Argon2id password hash (PHC string format)
    pub password_hash: String,

    /// Optional display name
    pub name: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for persisting a user
///
/// `id: None` asks the store to assign one; `id: Some(_)` upserts that row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    /// Row to upsert, or None to create
    pub id: Option<i64>,

    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,

    /// Optional display name
    pub name: Option<String>,
}

/// Representation of a user exchanged with the API layer
///
/// The `password` field is write-only: accepted on create/login requests,
/// never serialized in responses.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserDto {
    /// Store-assigned id (absent on create requests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,

    /// Plaintext password, accepted on input only
    #[serde(default, skip_serializing)]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
}

impl UserDto {
    /// Converts a persisted row into its representation
    ///
    /// The password hash stays behind; the password field comes back empty.
    pub fn from_entity(user: &User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email.clone(),
            name: user.name.clone(),
            password: None,
        }
    }
}
