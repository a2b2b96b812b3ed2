/// Category representation
///
/// Categories are a read-only lookup target for this system: full category
/// CRUD happens elsewhere, and todos reference categories by id alone. The
/// representation is therefore allowed to be partial, carrying only the id
/// with every other field at its absent default.

use serde::{Deserialize, Serialize};

/// Representation of a category exchanged with the API layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    /// Category id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Category name, unset when only the association id is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryDto {
    /// Builds a partial representation carrying only the id
    ///
    /// Used when an association lookup yields an id but the category record
    /// itself was not fetched.
    pub fn partial(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_carries_only_id() {
        let dto = CategoryDto::partial(42);
        assert_eq!(dto.id, Some(42));
        assert!(dto.name.is_none());
    }

    #[test]
    fn test_partial_serializes_without_absent_fields() {
        let json = serde_json::to_string(&CategoryDto::partial(5)).unwrap();
        assert_eq!(json, r#"{"id":5}"#);
    }
}
