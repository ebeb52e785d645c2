//! To-Do Frontend App
//!
//! Main application component: the list coordinator. Fetches the whole list
//! on mount and after every successful mutation, and owns the selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CreateElementInput, ElementRow};
use crate::context::AppContext;
use crate::remote::{ListStore, TauriListStore};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(set_reload_trigger, store));

    // Fetch all on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match TauriListStore.list_all().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Fetched {} elements, trigger={}", loaded.len(), trigger).into(),
                    );
                    store.update(|s| s.replace_elements(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] list_all failed: {}", e).into());
                }
            }
        });
    });

    let len = Signal::derive(move || store.elements().with(|elements| elements.len()));

    view! {
        // Clicking anywhere outside an item title leaves edit mode
        <div class="app" on:click=move |_| store.update(|s| s.deactivate())>
            <h2>"To-Do List"</h2>

            <CreateElementInput len=len />

            <div class="elements">
                <For
                    each=move || 0..len.get()
                    key=|idx| *idx
                    children=move |idx| view! { <ElementRow index=idx /> }
                />
            </div>
        </div>
    }
}
