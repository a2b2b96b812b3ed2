/// User service
///
/// Account CRUD plus credential login. Mirrors the todo service's handling
/// of absent ids: lookups return `None` and deletes return quietly, with a
/// diagnostic logged.

use crate::services::{ErrorCode, ServiceError, ServiceResult};
use std::sync::Arc;
use todostack_shared::auth::password;
use todostack_shared::models::user::{UserDraft, UserDto};
use todostack_shared::store::UserStore;
use todostack_shared::validators::validate_user;

/// Service for user accounts
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a service over the given store
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Validates and persists a user, returning the stored representation
    ///
    /// The plaintext password is hashed before it reaches the store and is
    /// absent from the returned representation.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidEntity` when validation rejects the input or the
    /// password is missing.
    pub async fn save(&self, dto: UserDto) -> ServiceResult<UserDto> {
        let mut violations = validate_user(&dto);

        let Some(plaintext) = dto.password.as_deref() else {
            violations.push("password: password is required".to_string());
            tracing::error!(email = %dto.email, ?violations, "user failed validation");
            return Err(Self::invalid(violations));
        };

        if !violations.is_empty() {
            tracing::error!(email = %dto.email, ?violations, "user failed validation");
            return Err(Self::invalid(violations));
        }

        let password_hash = password::hash_password(plaintext)?;

        let saved = self
            .users
            .save(UserDraft {
                id: dto.id,
                email: dto.email,
                password_hash,
                name: dto.name,
            })
            .await?;

        Ok(UserDto::from_entity(&saved))
    }

    /// Returns every user in store order
    pub async fn find_all(&self) -> ServiceResult<Vec<UserDto>> {
        let users = self.users.find_all().await?;
        Ok(users.iter().map(UserDto::from_entity).collect())
    }

    /// Retrieves one user by id
    ///
    /// An absent id logs a diagnostic and returns `Ok(None)`; a present id
    /// that matches no record fails with `EntityNotFound`.
    pub async fn find_by_id(&self, id: Option<i64>) -> ServiceResult<Option<UserDto>> {
        let Some(id) = id else {
            tracing::warn!("user lookup requested without an id");
            return Ok(None);
        };

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::EntityNotFound {
                code: ErrorCode::UserNotFound,
                message: format!("No user found with id = {}", id),
            })?;

        Ok(Some(UserDto::from_entity(&user)))
    }

    /// Deletes a user by id
    ///
    /// Same leniency as todo deletion: absent ids return quietly, unknown
    /// ids complete via the store's idempotent delete.
    pub async fn delete(&self, id: Option<i64>) -> ServiceResult<()> {
        let Some(id) = id else {
            tracing::warn!("user delete requested without an id");
            return Ok(());
        };

        self.users.delete_by_id(id).await?;
        Ok(())
    }

    /// Authenticates a user by email and password
    ///
    /// # Errors
    ///
    /// Fails with `EntityNotFound` for an unknown email and
    /// `InvalidCredentials` for a wrong password.
    pub async fn login(&self, email: &str, plaintext: &str) -> ServiceResult<UserDto> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::EntityNotFound {
                code: ErrorCode::UserNotFound,
                message: format!("No user found with email = {}", email),
            })?;

        if !password::verify_password(plaintext, &user.password_hash)? {
            tracing::warn!(email, "login rejected");
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(UserDto::from_entity(&user))
    }

    fn invalid(violations: Vec<String>) -> ServiceError {
        ServiceError::InvalidEntity {
            code: ErrorCode::UserNotValid,
            message: "User is not valid".to_string(),
            violations,
        }
    }
}
