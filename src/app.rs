//! Categorama Frontend App
//!
//! Main application component: letter / time / play on the left, the
//! category list in the middle, restart on the right.

use categorama_core::{GameConfig, GamePhase};
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryPanel, LetterPanel, PlayPanel, RestartPanel, TimePanel};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = GameConfig::default();
    let store = Store::new(AppState::new(&config));
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the list named in the URL (or the default) on mount
    Effect::new(move |_| {
        ctx.load_from_location();
    });

    // Following a shared link in the same tab
    let _ = window_event_listener(ev::hashchange, move |_| {
        ctx.load_from_location();
    });

    let main_class = move || {
        let session = store.session().read();
        let phase = match session.phase() {
            GamePhase::Playing => "game-playing",
            GamePhase::Paused => "game-paused",
        };
        let restarting = if session.is_restarting() { " restarting" } else { "" };
        format!("game-frame {}{}", phase, restarting)
    };

    view! {
        <main class=main_class>
            <div class="game">
                <div class="reset-anim"></div>

                // Left: letter, time, play/pause
                <div class="left-col">
                    <LetterPanel />
                    <div class="game-info-col">
                        <TimePanel />
                        <PlayPanel />
                    </div>
                </div>

                // Center: categories
                <CategoryPanel />

                // Right: restart
                <RestartPanel />
            </div>
        </main>
    }
}
