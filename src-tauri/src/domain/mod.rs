//! Domain Layer
//!
//! Contains the list element entity and the error vocabulary of the store.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod element;

pub use entity::{DomainError, DomainResult, MutationResult};
pub use element::{Element, Index, Status};
