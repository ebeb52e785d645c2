//! Element Entity
//!
//! A to-do entry. Elements carry no identity of their own: they are
//! addressed by their position in the list.

use serde::{Deserialize, Serialize};

/// Position of an element in the list (0-based)
pub type Index = usize;

/// Completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Todo,
    Done,
}

impl Status {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Status::Todo),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

/// A to-do list element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub title: String,
    pub status: Status,
}

impl Element {
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}
