//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use categorama_core::{GameConfig, GameSession, LoadedList};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Letter, timer and category list for this tab
    pub session: GameSession,
    /// Initial list load still in flight
    pub loading: bool,
}

impl AppState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(config, &mut rand::thread_rng()),
            loading: true,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the category list with one fetched from the store
pub fn store_apply_loaded(store: &AppStore, loaded: LoadedList) {
    let token = loaded.token();
    store.session().write().replace_categories(loaded.categories, token);
    store.loading().set(false);
}

/// Add a category at the front. Returns false for a blank label.
pub fn store_add_category(store: &AppStore, label: &str) -> bool {
    store
        .session()
        .write()
        .add_category(label, &mut rand::thread_rng())
        .is_ok()
}

/// Remove a category by id
pub fn store_remove_category(store: &AppStore, id: &str) {
    store.session().write().remove_category(id);
}

/// Apply duration form input; invalid input is logged and ignored
pub fn store_set_duration(store: &AppStore, input: &str) {
    let _ = store.session().write().set_duration_input(input);
}

pub fn store_reroll_letter(store: &AppStore) {
    if let Err(e) = store.session().write().reroll_letter(&mut rand::thread_rng()) {
        log::warn!("{}", e);
    }
}
