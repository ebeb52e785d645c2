//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the one place where
//! mutations are sent and settled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{self, Completion, Intent, MutationController, StoreFault};
use crate::remote::{Mutation, TauriListStore};
use crate::store::AppStore;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the list from backend
    set_reload_trigger: WriteSignal<u32>,
    /// Snapshot and selection
    pub store: AppStore,
}

impl AppContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, store: AppStore) -> Self {
        Self {
            set_reload_trigger,
            store,
        }
    }

    /// Trigger a full refetch of the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Send `mutation` and settle `controller` with the outcome.
    ///
    /// On success the coordinator applies the completion and refetches.
    /// On a fault nothing is refetched and the controller stays busy.
    pub fn dispatch<C>(&self, tag: &'static str, controller: RwSignal<C>, mutation: Mutation)
    where
        C: MutationController + Send + Sync + 'static,
    {
        let ctx = *self;
        let intent = controller.with_untracked(|c| c.pending());
        web_sys::console::log_1(&format!("{} {:?}", tag, mutation).into());

        spawn_local(async move {
            let outcome = controller::commit(&TauriListStore, &mutation).await;

            match settle(controller, intent, outcome) {
                Ok(completion) => {
                    web_sys::console::log_1(&format!("{} {} ok", tag, mutation.command()).into());
                    ctx.store.update(|s| s.apply_completion(completion));
                    ctx.reload();
                }
                Err(fault) => ctx.report_fault(tag, &fault),
            }
        });
    }

    /// Log a failed mutation. Nothing is retried or rolled back; the control
    /// that issued it stays disabled.
    pub fn report_fault(&self, tag: &str, fault: &StoreFault) {
        web_sys::console::error_1(&format!("{} unhandled store fault: {}", tag, fault).into());
    }
}

/// Settle `controller`, or only the outcome if the row was unmounted while
/// the call was in flight.
fn settle<C>(
    controller: RwSignal<C>,
    intent: Option<Intent>,
    outcome: Result<(), StoreFault>,
) -> Result<Completion, StoreFault>
where
    C: MutationController + Send + Sync + 'static,
{
    controller
        .try_update(|c| c.finish(outcome.clone()))
        .unwrap_or_else(|| controller::settle_detached(intent, outcome))
}
