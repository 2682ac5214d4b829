use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A write pointed at another entity that does not exist.
    #[error("Referenced {entity} not found: {value}")]
    MissingReference { entity: &'static str, value: String },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Both "missing row" and "missing referenced row" surface as not-found
    /// to callers.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound { .. } | DomainError::MissingReference { .. }
        )
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("Album", "album-abc");
        assert_eq!(err.to_string(), "Not found: Album with id=album-abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_reference_counts_as_not_found() {
        let err = DomainError::MissingReference {
            entity: "album",
            value: "album-zzz".into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Referenced album not found: album-zzz");
    }

    #[test]
    fn storage_is_not_a_not_found() {
        assert!(!DomainError::Storage("disk I/O error".into()).is_not_found());
        assert!(!DomainError::Validation("\"name\" is required".into()).is_not_found());
    }
}
