//! Category Panel Component
//!
//! Middle column: the categories played this round, plus the editor
//! overlays (full list with remove buttons, add form) and the save bar.

use categorama_core::Category;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::{store_add_category, store_remove_category, use_app_store, AppStateStoreFields};

/// Header: panel toggles and the visible-count control
#[component]
fn CategoryHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let count = move || store.session().read().visible_count();

    view! {
        <div class="category-header">
            <div class="category-toggles">
                <button
                    class=move || if ctx.show_all.get() { "active" } else { "" }
                    on:click=move |_| ctx.toggle_show_all()
                >
                    "Categories"
                </button>
                <button class="muted" on:click=move |_| ctx.toggle_show_add()>
                    "Add A Category"
                </button>
            </div>
            <div class="count-control">
                <button
                    class="minus-icon"
                    on:click=move |_| { store.session().write().decrease_visible(); }
                >
                    "-"
                </button>
                <div>{count}</div>
                <button
                    class="plus-icon"
                    on:click=move |_| { store.session().write().increase_visible(); }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}

/// Add-category input
#[component]
fn CategoryAddForm() -> impl IntoView {
    let store = use_app_store();
    let (new_label, set_new_label) = signal(String::new());

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_category(&store, &new_label.get()) {
            set_new_label.set(String::new());
        }
    };

    view! {
        <div class="add-category">
            <form on:submit=add_category>
                <input
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    placeholder="Enter a new category..."
                    required
                    prop:value=move || new_label.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_new_label.set(input.value());
                        }
                    }
                />
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}

/// One row of the full list
#[component]
fn CategoryRow(category: Category) -> impl IntoView {
    let store = use_app_store();
    let id = category.id.clone();

    view! {
        <div class="category-item editable">
            <h3>{category.label}</h3>
            <button class="remove-btn" on:click=move |_| store_remove_category(&store, &id)>
                "Remove"
            </button>
        </div>
    }
}

/// Every category, with remove buttons
#[component]
fn CategoryEditorList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let panel_class = move || {
        if ctx.show_add.get() {
            "category-editor below-form"
        } else {
            "category-editor"
        }
    };

    view! {
        <div class=panel_class>
            <p class="editor-note">
                {move || format!(
                    "Each turn, {} categories are chosen randomly from the list below:",
                    store.session().read().visible_count()
                )}
            </p>
            <For
                each=move || {
                    store.session().read().categories().iter().cloned().enumerate().collect::<Vec<_>>()
                }
                key=|(index, category)| (*index, category.id.clone())
                children=move |(_, category)| view! { <CategoryRow category=category /> }
            />
        </div>
    }
}

/// Shown while the list has unsaved edits
#[component]
fn SaveBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="save-list" on:click=move |_| ctx.save_list()>
            <h3>"Save List"</h3>
        </div>
    }
}

#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let visible = move || {
        store
            .session()
            .read()
            .visible_categories()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let has_unsaved = move || store.session().read().has_unsaved_changes();

    view! {
        <div class="right-col">
            <div class="questions">
                <CategoryHeader />
                <div class="question-list">
                    <Show when=move || ctx.show_add.get()>
                        <CategoryAddForm />
                    </Show>
                    <Show when=move || ctx.show_all.get() || ctx.show_add.get()>
                        <CategoryEditorList />
                    </Show>

                    <Show when=move || store.loading().get()>
                        <p class="loading">"Loading categories..."</p>
                    </Show>

                    <For
                        each=visible
                        key=|(index, category)| (*index, category.id.clone())
                        children=move |(index, category)| {
                            view! {
                                <div class="category-item">
                                    <span>{format!("{}.", index + 1)}</span>
                                    <div
                                        class="category-text"
                                        style=format!("transition-delay: {}ms;", index * 30)
                                    >
                                        <h3>{category.label}</h3>
                                    </div>
                                </div>
                            }
                        }
                    />

                    <Show when=has_unsaved>
                        <SaveBar />
                    </Show>
                </div>
            </div>
        </div>
    }
}
