//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the positional element list.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Element, Index};

/// Ordered, index-addressed element storage
///
/// All operations are async to support various backends. Mutations fail
/// with `DomainError::IndexOutOfBounds` when the index is not valid for the
/// list length at the time the call is applied.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// All elements in list order
    async fn list_all(&self) -> DomainResult<Vec<Element>>;

    /// Insert at `idx`, shifting later elements up. Valid for `idx <= len`.
    async fn add_at(&self, idx: Index, elem: &Element) -> DomainResult<()>;

    /// Replace the element at `idx`. Valid for `idx < len`.
    async fn update_at(&self, idx: Index, elem: &Element) -> DomainResult<()>;

    /// Remove the element at `idx`, shifting later elements down. Valid for `idx < len`.
    async fn remove_at(&self, idx: Index) -> DomainResult<()>;
}
