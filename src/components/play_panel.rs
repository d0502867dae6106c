//! Play/Pause Panel Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const PLAY_PATH: &str = "M73 39c-14.8-9.1-33.4-9.4-48.5-.9S0 62.6 0 80L0 432c0 17.4 9.4 33.4 24.5 41.9s33.7 8.1 48.5-.9L361 297c14.3-8.7 23-24.2 23-41s-8.7-32.2-23-41L73 39z";
const PAUSE_PATH: &str = "M96 0h64c17.7 0 32 14.3 32 32v448c0 17.7-14.3 32-32 32H96c-17.7 0-32-14.3-32-32V32c0-17.7 14.3-32 32-32zm192 0h64c17.7 0 32 14.3 32 32v448c0 17.7-14.3 32-32 32H288c-17.7 0-32-14.3-32-32V32c0-17.7 14.3-32 32-32z";

#[component]
pub fn PlayPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_playing = move || store.session().read().timer().is_playing();

    view! {
        <div class="play-col" on:click=move |_| ctx.toggle_play()>
            <button class="panel-header">{move || if is_playing() { "Pause" } else { "Play" }}</button>
            <div class="play-icon">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 384 512">
                    <path fill="#fff" d=move || if is_playing() { PAUSE_PATH } else { PLAY_PATH } />
                </svg>
            </div>
        </div>
    }
}
