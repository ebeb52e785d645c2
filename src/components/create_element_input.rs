//! Create Element Input Component
//!
//! Text input plus "+" button appending a new item to the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::{CreationController, MutationController};

/// Input for new items; Enter or "+" appends at the end of the list
#[component]
pub fn CreateElementInput(#[prop(into)] len: Signal<usize>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let controller = RwSignal::new(CreationController::new());
    let busy = move || controller.with(|c| c.is_busy());

    let add = move || {
        let len = len.get_untracked();
        if let Some(mutation) = controller.try_update(|c| c.begin_add(len)).flatten() {
            ctx.dispatch("[CREATE]", controller, mutation);
        }
    };

    view! {
        <div class="create-element-input">
            <input
                type="text"
                placeholder="Add a task"
                disabled=busy
                prop:value=move || controller.with(|c| c.title().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    controller.update(|c| c.edit_title(text));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add();
                    }
                }
            />
            <button disabled=busy on:click=move |_| add()>"+"</button>
        </div>
    }
}
