//! Global Application State Store
//!
//! The list coordinator's state: the last fetched snapshot and the single
//! active (edit mode) index. Uses Leptos reactive_stores for fine-grained
//! reactivity.

use reactive_stores::Store;

use crate::controller::Completion;
use crate::models::Item;

/// Last fetched list plus selection
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Snapshot of the last successful `list_all`; never patched locally
    pub elements: Vec<Item>,
    /// Index of the item in edit mode, if any
    pub active: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale. The selection is positional and is kept as-is.
    pub fn replace_elements(&mut self, elements: Vec<Item>) {
        self.elements = elements;
    }

    /// Put `idx` in edit mode; whichever item was active leaves it.
    pub fn activate(&mut self, idx: usize) {
        self.active = Some(idx);
    }

    pub fn deactivate(&mut self) {
        self.active = None;
    }

    pub fn apply_completion(&mut self, completion: Completion) {
        if completion == Completion::RefetchAndDeactivate {
            self.deactivate();
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_active_item() {
        let mut state = AppState::new();
        state.activate(0);
        state.activate(2);

        assert_eq!(state.active, Some(2));

        state.deactivate();
        assert_eq!(state.active, None);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = AppState::new();
        state.replace_elements(vec![Item::todo("a"), Item::todo("b")]);
        state.replace_elements(vec![Item::todo("c")]);
        assert_eq!(state.elements, vec![Item::todo("c")]);
    }

    #[test]
    fn test_completion_only_deactivates_after_edit() {
        let mut state = AppState::new();
        state.activate(1);

        state.apply_completion(Completion::Refetch);
        assert_eq!(state.active, Some(1));

        state.apply_completion(Completion::RefetchAndDeactivate);
        assert_eq!(state.active, None);
    }
}
