//! Remote List Store
//!
//! The seam between controllers and the backend. Controllers only see
//! `ListStore`; the app plugs in `TauriListStore`.

use async_trait::async_trait;

use crate::commands;
use crate::models::{Item, MutationResult};

/// One index-addressed change to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddAt { index: usize, item: Item },
    UpdateAt { index: usize, item: Item },
    RemoveAt { index: usize },
}

impl Mutation {
    pub fn index(&self) -> usize {
        match self {
            Mutation::AddAt { index, .. }
            | Mutation::UpdateAt { index, .. }
            | Mutation::RemoveAt { index } => *index,
        }
    }

    /// Backend command name
    pub fn command(&self) -> &'static str {
        match self {
            Mutation::AddAt { .. } => "add_element_at",
            Mutation::UpdateAt { .. } => "update_element_at",
            Mutation::RemoveAt { .. } => "remove_element_at",
        }
    }
}

/// Failure to talk to the store at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The call was rejected or never reached the backend
    Transport(String),
    /// Arguments or answer could not be (de)serialized
    Codec(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Transport error: {}", msg),
            StoreError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Index-addressed list storage
#[async_trait(?Send)]
pub trait ListStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn apply(&self, mutation: &Mutation) -> Result<MutationResult, StoreError>;
}

/// Store reached through Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriListStore;

#[async_trait(?Send)]
impl ListStore for TauriListStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        commands::list_all().await
    }

    async fn apply(&self, mutation: &Mutation) -> Result<MutationResult, StoreError> {
        match mutation {
            Mutation::AddAt { index, item } => commands::add_element_at(*index, item).await,
            Mutation::UpdateAt { index, item } => commands::update_element_at(*index, item).await,
            Mutation::RemoveAt { index } => commands::remove_element_at(*index).await,
        }
    }
}
