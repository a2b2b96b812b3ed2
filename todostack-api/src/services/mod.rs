/// Service layer
///
/// Services sit between the HTTP routes and the storage collaborators:
/// they validate representations, translate to and from entity shapes, and
/// apply the lookups a single operation needs. Store instances are passed
/// in explicitly at construction; the services themselves hold no state of
/// their own.
///
/// # Failure semantics
///
/// `InvalidEntity` and `EntityNotFound` are the domain failures; they
/// propagate unchanged to the routes for translation into HTTP responses.
/// Nothing is retried here.

pub mod todo;
pub mod user;

pub use todo::TodoService;
pub use user::UserService;

use serde::{Deserialize, Serialize};
use todostack_shared::auth::password::PasswordError;
use todostack_shared::store::StoreError;

/// Stable machine-readable codes carried by domain failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A todo failed its validation rule set
    TodoNotValid,

    /// No todo exists for the requested id
    TodoNotFound,

    /// A user failed its validation rule set
    UserNotValid,

    /// No user exists for the requested id or email
    UserNotFound,
}

impl ErrorCode {
    /// Converts the code to its wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::TodoNotValid => "todo_not_valid",
            ErrorCode::TodoNotFound => "todo_not_found",
            ErrorCode::UserNotValid => "user_not_valid",
            ErrorCode::UserNotFound => "user_not_found",
        }
    }
}

/// Failure raised by a service operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The entity failed validation; carries every violation at once
    #[error("{message}")]
    InvalidEntity {
        code: ErrorCode,
        message: String,
        violations: Vec<String>,
    },

    /// The requested identifier has no corresponding record
    #[error("{message}")]
    EntityNotFound { code: ErrorCode, message: String },

    /// Credential login failed
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Storage backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing failure
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Service result type alias
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_form() {
        assert_eq!(ErrorCode::TodoNotValid.as_str(), "todo_not_valid");
        assert_eq!(ErrorCode::TodoNotFound.as_str(), "todo_not_found");
        assert_eq!(ErrorCode::UserNotValid.as_str(), "user_not_valid");
        assert_eq!(ErrorCode::UserNotFound.as_str(), "user_not_found");
    }

    #[test]
    fn test_invalid_entity_display_uses_message() {
        let err = ServiceError::InvalidEntity {
            code: ErrorCode::TodoNotValid,
            message: "Todo is not valid".to_string(),
            violations: vec!["title: title must be between 1 and 255 characters".to_string()],
        };
        assert_eq!(err.to_string(), "Todo is not valid");
    }
}
