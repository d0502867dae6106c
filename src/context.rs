//! Application Context
//!
//! Shared handles provided via Leptos Context API: the store, panel
//! toggles, and the running countdown interval.

use categorama_core::{GameConfig, GamePhase, TickOutcome};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_loaded, AppStore, AppStateStoreFields};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Full category list panel open - read
    pub show_all: ReadSignal<bool>,
    /// Full category list panel open - write
    set_show_all: WriteSignal<bool>,
    /// Add-category form open - read
    pub show_add: ReadSignal<bool>,
    /// Add-category form open - write
    set_show_add: WriteSignal<bool>,
    /// The one live countdown interval; dropping it stops the countdown
    ticker: StoredValue<Option<Interval>, LocalStorage>,
    config: StoredValue<GameConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: GameConfig) -> Self {
        let (show_all, set_show_all) = signal(false);
        let (show_add, set_show_add) = signal(false);
        Self {
            store,
            show_all,
            set_show_all,
            show_add,
            set_show_add,
            ticker: StoredValue::new_local(None),
            config: StoredValue::new(config),
        }
    }

    pub fn toggle_show_all(&self) {
        self.set_show_all.update(|v| *v = !*v);
    }

    pub fn toggle_show_add(&self) {
        self.set_show_add.update(|v| *v = !*v);
    }

    // ========================
    // Timer
    // ========================

    /// Play/pause control
    pub fn toggle_play(&self) {
        let phase = self.store.session().write().toggle();
        match phase {
            GamePhase::Playing => self.start_ticking(),
            GamePhase::Paused => self.stop_ticking(),
        }
    }

    fn start_ticking(&self) {
        let store = self.store;
        let ticker = self.ticker;
        let period = self.config.with_value(|c| c.tick_interval_ms);

        let interval = Interval::new(period, move || {
            let outcome = store.session().write().tick();
            if outcome == TickOutcome::Expired {
                // An interval can't be dropped from inside its own callback
                spawn_local(async move {
                    ticker.set_value(None);
                });
            }
        });
        // Replacing the old handle cancels any earlier countdown
        self.ticker.set_value(Some(interval));
    }

    fn stop_ticking(&self) {
        self.ticker.set_value(None);
    }

    /// Pause now; after the transition delay roll a new letter, reshuffle
    /// and restore the clock.
    pub fn reset(&self) {
        self.stop_ticking();
        self.store.session().write().begin_reset();

        let store = self.store;
        let ticker = self.ticker;
        let delay = self.config.with_value(|c| c.reset_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            ticker.set_value(None);
            store.session().write().finish_reset(&mut rand::thread_rng());
        });
    }

    // ========================
    // Persistence
    // ========================

    /// Load the list named by the URL fragment (or the default list)
    pub fn load_from_location(&self) {
        let store = self.store;
        let fragment = commands::current_fragment();
        let current = store
            .session()
            .read_untracked()
            .share_token()
            .map(|t| t.to_fragment());
        if current.as_deref() == Some(fragment.as_str()) {
            return;
        }

        spawn_local(async move {
            let loaded = commands::load_list(&fragment).await;
            store_apply_loaded(&store, loaded);
        });
    }

    /// Save the current list under a new share token and put it in the URL
    pub fn save_list(&self) {
        let store = self.store;
        let list = store.session().read_untracked().categories().clone();

        spawn_local(async move {
            match commands::save_list(&list).await {
                Ok(token) => {
                    commands::push_fragment(&token);
                    store.session().write().mark_saved(token);
                }
                Err(e) => {
                    log::error!("Error saving the list: {}", e);
                    store.session().write().mark_save_failed();
                }
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
