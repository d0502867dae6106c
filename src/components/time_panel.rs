//! Time Panel Component
//!
//! Remaining seconds, and a form to change the round length while paused.

use leptos::html;
use leptos::prelude::*;

use crate::store::{store_set_duration, use_app_store, AppStateStoreFields};

/// Duration form shown in place of the countdown
#[component]
fn DurationForm(set_editing: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let input_ref = NodeRef::<html::Input>::new();
    let current = store.session().read_untracked().timer().remaining().to_string();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            store_set_duration(&store, &input.value());
        }
        set_editing.set(false);
    };

    view! {
        <form class="duration-form" on:submit=on_submit>
            <input
                node_ref=input_ref
                class="duration-input"
                type="number"
                min="1"
                value=current
            />
            <button type="submit" class="duration-submit">"Update"</button>
        </form>
    }
}

#[component]
pub fn TimePanel() -> impl IntoView {
    let store = use_app_store();
    let (editing, set_editing) = signal(false);

    let is_paused = move || !store.session().read().timer().is_playing();
    let remaining = move || store.session().read().timer().remaining();

    view! {
        <div class="time-col">
            <div class="panel-header">
                <span>"Time"</span>
                <Show when=move || is_paused() && !editing.get()>
                    <button on:click=move |_| set_editing.set(true)>"Change"</button>
                </Show>
            </div>
            <div class="time">
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <h2 class="time-value">{remaining}</h2> }
                >
                    <DurationForm set_editing=set_editing />
                </Show>
            </div>
        </div>
    }
}
