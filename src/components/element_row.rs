//! Element Row Component
//!
//! One list item: checkbox, title (click to edit), delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::{ItemController, MutationController};
use crate::remote::Mutation;
use crate::store::AppStateStoreFields;

/// A single item row, addressed by its position in the list
#[component]
pub fn ElementRow(index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let item = Memo::new(move |_| {
        store
            .elements()
            .with(|elements| elements.get(index).cloned().unwrap_or_default())
    });
    let is_active = Memo::new(move |_| store.active().get() == Some(index));

    let controller = RwSignal::new(ItemController::new(&item.get_untracked().title));
    let busy = move || controller.with(|c| c.is_busy());

    // Draft follows the store title on refetch and when edit mode is left
    Effect::new(move |_| {
        let title = item.with(|i| i.title.clone());
        let active = is_active.get();
        controller.update(|c| c.follow_store(&title, active));
    });

    let send = move |mutation: Option<Mutation>| {
        if let Some(mutation) = mutation {
            ctx.dispatch("[ELEMENT]", controller, mutation);
        }
    };

    let on_check = move |ev: web_sys::MouseEvent| {
        // The checkbox shows the store's status, not the click
        ev.prevent_default();
        let current = item.get_untracked();
        send(controller.try_update(|c| c.begin_toggle(index, &current)).flatten());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let current = item.get_untracked();
        let active = is_active.get_untracked();
        send(controller.try_update(|c| c.begin_edit(index, &current, active)).flatten());
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        send(controller.try_update(|c| c.begin_delete(index)).flatten());
    };

    view! {
        <div class=move || if item.get().status.is_done() { "element done" } else { "element" }>
            <input
                class="checkbox"
                type="checkbox"
                disabled=busy
                prop:checked=move || item.get().status.is_done()
                on:click=on_check
            />
            {move || if is_active.get() {
                view! {
                    <input
                        class="text"
                        type="text"
                        disabled=busy
                        prop:value=move || controller.with(|c| c.draft().to_string())
                        on:click=|ev| ev.stop_propagation()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            controller.update(|c| c.edit_draft(text));
                        }
                        on:keydown=on_keydown
                    />
                }.into_any()
            } else {
                view! {
                    <span
                        class="text"
                        on:click=move |ev| {
                            // Must not reach the container, which would deactivate again
                            ev.stop_propagation();
                            store.update(|s| s.activate(index));
                        }
                    >
                        {move || item.get().title}
                    </span>
                }.into_any()
            }}
            <button class="delete-btn" disabled=busy on:click=on_delete>"-"</button>
        </div>
    }
}
