//! Creation Controller
//!
//! The "new item" input. Appends at the current list length; titles are
//! not validated here, the store decides.

use super::{Completion, Gate, Intent, MutationController, StoreFault};
use crate::models::Item;
use crate::remote::Mutation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreationController {
    gate: Gate,
    title: String,
}

impl CreationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn edit_title(&mut self, text: String) {
        self.title = text;
    }

    /// Append `{ title, Todo }` at `len`.
    pub fn begin_add(&mut self, len: usize) -> Option<Mutation> {
        if !self.gate.enter(Intent::Add) {
            return None;
        }
        Some(Mutation::AddAt {
            index: len,
            item: Item::todo(self.title.clone()),
        })
    }
}

impl MutationController for CreationController {
    fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    fn pending(&self) -> Option<Intent> {
        self.gate.pending()
    }

    fn finish(&mut self, outcome: Result<(), StoreFault>) -> Result<Completion, StoreFault> {
        let intent = self.gate.settle(outcome)?;
        self.title.clear();
        Ok(intent.completion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_todo() {
        let mut ctl = CreationController::new();
        ctl.edit_title("Clean".to_string());

        let mutation = ctl.begin_add(1).unwrap();
        assert_eq!(mutation, Mutation::AddAt { index: 1, item: Item::todo("Clean") });
        assert!(ctl.is_busy());
    }

    #[test]
    fn test_empty_title_is_sent() {
        let mut ctl = CreationController::new();
        let mutation = ctl.begin_add(0).unwrap();
        assert_eq!(mutation, Mutation::AddAt { index: 0, item: Item::todo("") });
    }

    #[test]
    fn test_second_add_while_busy_is_dropped() {
        let mut ctl = CreationController::new();
        ctl.edit_title("Clean".to_string());
        ctl.begin_add(0).unwrap();
        assert_eq!(ctl.begin_add(0), None);
    }

    #[test]
    fn test_success_clears_input() {
        let mut ctl = CreationController::new();
        ctl.edit_title("Clean".to_string());
        ctl.begin_add(0).unwrap();

        assert_eq!(ctl.finish(Ok(())), Ok(Completion::Refetch));
        assert_eq!(ctl.title(), "");
        assert!(!ctl.is_busy());
    }

    #[test]
    fn test_fault_keeps_input_and_lock() {
        let mut ctl = CreationController::new();
        ctl.edit_title("Clean".to_string());
        ctl.begin_add(7).unwrap();

        let fault = StoreFault::IndexOutOfBounds { command: "add_element_at", index: 7 };
        assert!(ctl.finish(Err(fault)).is_err());
        assert_eq!(ctl.title(), "Clean");
        assert!(ctl.is_busy());
    }
}
