//! Store errors.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a record store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record matched the given id.
    #[error("No matching item found")]
    NotFound,

    /// A record with this id already exists in the collection.
    #[error("Duplicate id: {0}")]
    DuplicateId(i64),

    /// Anything else: lock poisoning, malformed records.
    #[error("Storage error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_stable() {
        assert_eq!(StoreError::NotFound.to_string(), "No matching item found");
    }

    #[test]
    fn test_duplicate_id_names_the_id() {
        assert_eq!(StoreError::DuplicateId(6).to_string(), "Duplicate id: 6");
    }
}
