//! Domain Layer - Errors and Mutation Results
//!
//! Every mutating store operation answers with a `MutationResult`;
//! internally the repositories speak `DomainResult`.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// The addressed position is not valid for the current list length
    IndexOutOfBounds { index: usize, len: usize },
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} (len {})", index, len)
            }
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Wire answer of `add_element_at` / `update_element_at` / `remove_element_at`
///
/// Serialized as the bare strings `"Ok"` and `"IndexOutOfBounds"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationResult {
    Ok,
    IndexOutOfBounds,
}

impl MutationResult {
    /// Fold a repository result into the wire answer.
    ///
    /// Only an out-of-bounds index is an answer; other errors stay errors.
    pub fn from_domain(result: DomainResult<()>) -> DomainResult<Self> {
        match result {
            Ok(()) => Ok(MutationResult::Ok),
            Err(DomainError::IndexOutOfBounds { .. }) => Ok(MutationResult::IndexOutOfBounds),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_result_wire_format() {
        assert_eq!(serde_json::to_string(&MutationResult::Ok).unwrap(), r#""Ok""#);
        assert_eq!(
            serde_json::to_string(&MutationResult::IndexOutOfBounds).unwrap(),
            r#""IndexOutOfBounds""#
        );
    }

    #[test]
    fn test_from_domain() {
        assert_eq!(MutationResult::from_domain(Ok(())), Ok(MutationResult::Ok));
        assert_eq!(
            MutationResult::from_domain(Err(DomainError::IndexOutOfBounds { index: 3, len: 1 })),
            Ok(MutationResult::IndexOutOfBounds)
        );
        assert!(MutationResult::from_domain(Err(DomainError::Internal("disk".into()))).is_err());
    }
}
