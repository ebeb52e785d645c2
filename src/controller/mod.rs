//! Controllers
//!
//! Per-control state machines for the item rows and the creation input.
//! A controller never talks to the store itself: `begin_*` hands out the
//! `Mutation` to send and flips the gate to busy, `finish` settles the gate
//! with the store's outcome. Only a successful outcome reopens the gate; a
//! fault leaves the control locked for the rest of the session.

mod item;
mod creation;


pub use item::ItemController;
pub use creation::CreationController;

use crate::models::MutationResult;
use crate::remote::{ListStore, Mutation, StoreError};

/// What a busy control is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Toggle,
    Edit,
    Delete,
    Add,
}

impl Intent {
    /// Coordinator follow-up once this intent succeeded
    pub fn completion(self) -> Completion {
        match self {
            Intent::Edit => Completion::RefetchAndDeactivate,
            _ => Completion::Refetch,
        }
    }
}

/// Per-control mutation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    #[default]
    Idle,
    Busy(Intent),
}

impl Gate {
    pub fn is_busy(&self) -> bool {
        matches!(self, Gate::Busy(_))
    }

    pub fn pending(&self) -> Option<Intent> {
        match self {
            Gate::Busy(intent) => Some(*intent),
            Gate::Idle => None,
        }
    }

    /// Close the gate for `intent`. Returns false (and changes nothing) if already busy.
    fn enter(&mut self, intent: Intent) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Gate::Busy(intent);
        true
    }

    /// Reopen the gate on success; on a fault it stays closed.
    fn settle(&mut self, outcome: Result<(), StoreFault>) -> Result<Intent, StoreFault> {
        outcome?;
        match std::mem::take(self) {
            Gate::Busy(intent) => Ok(intent),
            Gate::Idle => Err(StoreFault::NotPending),
        }
    }
}

/// Follow-up the list coordinator owes after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Refetch,
    /// A committed edit: leave edit mode, then refetch
    RefetchAndDeactivate,
}

/// A mutation that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFault {
    /// The store rejected the index (stale or never valid)
    IndexOutOfBounds { command: &'static str, index: usize },
    /// The store could not be reached or answered garbage
    Store(StoreError),
    /// `finish` called on a control with nothing outstanding
    NotPending,
}

impl std::fmt::Display for StoreFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreFault::IndexOutOfBounds { command, index } => {
                write!(f, "{}: index {} out of bounds", command, index)
            }
            StoreFault::Store(e) => write!(f, "{}", e),
            StoreFault::NotPending => write!(f, "No mutation outstanding"),
        }
    }
}

impl std::error::Error for StoreFault {}

impl From<StoreError> for StoreFault {
    fn from(e: StoreError) -> Self {
        StoreFault::Store(e)
    }
}

/// Send one mutation to the store. No retry.
pub async fn commit<S: ListStore + ?Sized>(store: &S, mutation: &Mutation) -> Result<(), StoreFault> {
    match store.apply(mutation).await? {
        MutationResult::Ok => Ok(()),
        MutationResult::IndexOutOfBounds => Err(StoreFault::IndexOutOfBounds {
            command: mutation.command(),
            index: mutation.index(),
        }),
    }
}

/// Settle an outcome whose control no longer exists.
///
/// The coordinator still owes the refetch on success and the fault report
/// on failure; only the control's own state is gone.
pub fn settle_detached(intent: Option<Intent>, outcome: Result<(), StoreFault>) -> Result<Completion, StoreFault> {
    outcome?;
    Ok(intent.map_or(Completion::Refetch, Intent::completion))
}

/// Common shape of the item and creation controllers
pub trait MutationController {
    fn is_busy(&self) -> bool;

    /// Intent of the outstanding mutation, if any
    fn pending(&self) -> Option<Intent>;

    /// Settle the outstanding mutation with the store's outcome.
    fn finish(&mut self, outcome: Result<(), StoreFault>) -> Result<Completion, StoreFault>;
}
