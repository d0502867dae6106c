//! Letter Panel Component
//!
//! The prompt letter, with a re-roll button while paused.

use leptos::prelude::*;

use crate::store::{store_reroll_letter, use_app_store, AppStateStoreFields};

#[component]
pub fn LetterPanel() -> impl IntoView {
    let store = use_app_store();

    let letter = move || store.session().read().letter().to_string();
    let is_paused = move || !store.session().read().timer().is_playing();

    view! {
        <div class="letter-col">
            <div class="panel-header">
                <span>"Letter"</span>
                <Show when=is_paused>
                    <button on:click=move |_| store_reroll_letter(&store)>"Re-roll"</button>
                </Show>
            </div>
            <h2 class="letter">{letter}</h2>
        </div>
    }
}
