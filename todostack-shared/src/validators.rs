/// Validation rule sets
///
/// Each function runs a representation through its rule set and produces a
/// list of human-readable violation strings; an empty list means valid. All
/// violations are reported at once rather than failing on the first.
///
/// # Example
///
/// ```
/// use todostack_shared::models::todo::TodoDto;
/// use todostack_shared::validators::validate_todo;
///
/// let dto = TodoDto {
///     id: None,
///     title: String::new(),
///     description: None,
///     completed: false,
///     user_id: None,
///     category: None,
/// };
///
/// let violations = validate_todo(&dto);
/// assert_eq!(violations.len(), 1);
/// ```

use crate::models::todo::TodoDto;
use crate::models::user::UserDto;
use validator::{Validate, ValidationErrors};

/// Validates a todo representation, returning every violation
pub fn validate_todo(dto: &TodoDto) -> Vec<String> {
    collect_violations(dto.validate())
}

/// Validates a user representation, returning every violation
pub fn validate_user(dto: &UserDto) -> Vec<String> {
    collect_violations(dto.validate())
}

/// Flattens field errors into "field: message" strings
fn collect_violations(result: Result<(), ValidationErrors>) -> Vec<String> {
    match result {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "validation failed".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_with_title(title: &str) -> TodoDto {
        TodoDto {
            id: None,
            title: title.to_string(),
            description: None,
            completed: false,
            user_id: None,
            category: None,
        }
    }

    #[test]
    fn test_valid_todo_has_no_violations() {
        assert!(validate_todo(&todo_with_title("Water the plants")).is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let violations = validate_todo(&todo_with_title(""));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with("title:"));
    }

    #[test]
    fn test_overlong_title_is_rejected() {
        let violations = validate_todo(&todo_with_title(&"x".repeat(256)));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_user_violations_are_reported_together() {
        let dto = UserDto {
            id: None,
            email: "not-an-email".to_string(),
            name: None,
            password: Some("short".to_string()),
        };

        let violations = validate_user(&dto);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.starts_with("email:")));
        assert!(violations.iter().any(|v| v.starts_with("password:")));
    }

    #[test]
    fn test_valid_user_passes() {
        let dto = UserDto {
            id: None,
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            password: Some("correct horse battery".to_string()),
        };

        assert!(validate_user(&dto).is_empty());
    }
}
