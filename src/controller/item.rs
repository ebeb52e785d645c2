//! Item Controller
//!
//! One rendered row: toggle, inline edit, delete.

use super::{Completion, Gate, Intent, MutationController, StoreFault};
use crate::models::Item;
use crate::remote::Mutation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemController {
    gate: Gate,
    /// Title being typed in edit mode; not sent until confirmed
    draft: String,
    /// Last title seen in the snapshot
    store_title: String,
}

impl ItemController {
    pub fn new(title: &str) -> Self {
        Self {
            gate: Gate::Idle,
            draft: title.to_string(),
            store_title: title.to_string(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Local keystroke; no store call.
    pub fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Reconcile the draft with the snapshot after a refetch or a selection
    /// change.
    ///
    /// Outside edit mode the draft always mirrors the store, which discards
    /// anything left unconfirmed. In edit mode the draft survives until the
    /// store's title itself changes.
    pub fn follow_store(&mut self, title: &str, active: bool) {
        let changed = self.store_title != title;
        if changed {
            self.store_title = title.to_string();
        }
        if !active || changed {
            self.draft.clear();
            self.draft.push_str(title);
        }
    }

    /// Flip completion, keeping the title as the store has it.
    pub fn begin_toggle(&mut self, index: usize, item: &Item) -> Option<Mutation> {
        if !self.gate.enter(Intent::Toggle) {
            return None;
        }
        Some(Mutation::UpdateAt {
            index,
            item: Item::new(item.title.clone(), item.status.toggled()),
        })
    }

    /// Commit the draft title, keeping the status. Only while in edit mode.
    pub fn begin_edit(&mut self, index: usize, item: &Item, active: bool) -> Option<Mutation> {
        if !active || !self.gate.enter(Intent::Edit) {
            return None;
        }
        Some(Mutation::UpdateAt {
            index,
            item: Item::new(self.draft.clone(), item.status),
        })
    }

    pub fn begin_delete(&mut self, index: usize) -> Option<Mutation> {
        if !self.gate.enter(Intent::Delete) {
            return None;
        }
        Some(Mutation::RemoveAt { index })
    }
}

impl MutationController for ItemController {
    fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    fn pending(&self) -> Option<Intent> {
        self.gate.pending()
    }

    fn finish(&mut self, outcome: Result<(), StoreFault>) -> Result<Completion, StoreFault> {
        self.gate.settle(outcome).map(Intent::completion)
    }
}
