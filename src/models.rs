//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Completion state (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Todo,
    Done,
}

impl Status {
    /// The opposite state: `Done` -> `Todo`, `Todo` -> `Done`
    pub fn toggled(self) -> Self {
        match self {
            Status::Todo => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

/// List item (matches backend `Element`)
///
/// Items have no id: they are addressed by their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub status: Status,
}

impl Item {
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }

    pub fn todo(title: impl Into<String>) -> Self {
        Self::new(title, Status::Todo)
    }
}

/// Answer of a mutating store call (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationResult {
    Ok,
    IndexOutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_status() {
        assert_eq!(Status::Todo.toggled(), Status::Done);
        assert_eq!(Status::Done.toggled(), Status::Todo);
        assert!(Status::Todo.toggled().is_done());
    }

    #[test]
    fn test_backend_shapes_decode() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"title":"Buy milk","status":"Todo"},{"title":"Clean","status":"Done"}]"#,
        )
        .unwrap();
        assert_eq!(items, vec![Item::todo("Buy milk"), Item::new("Clean", Status::Done)]);

        let res: MutationResult = serde_json::from_str(r#""IndexOutOfBounds""#).unwrap();
        assert_eq!(res, MutationResult::IndexOutOfBounds);
    }
}
