//! Persistence Commands
//!
//! Frontend bindings to the category repository backed by Firestore.

use std::rc::Rc;

use categorama_core::{CategoryList, CategoryRepository, FirestoreStore, LoadedList, ShareToken, StoreConfig};

thread_local! {
    static REPOSITORY: Rc<CategoryRepository<FirestoreStore>> = {
        let config = StoreConfig::embedded();
        Rc::new(CategoryRepository::new(FirestoreStore::new(&config), config))
    };
}

fn repository() -> Rc<CategoryRepository<FirestoreStore>> {
    REPOSITORY.with(Rc::clone)
}

/// Load the list for a URL fragment, falling back to the default list.
pub async fn load_list(fragment: &str) -> LoadedList {
    repository().load_for_fragment(fragment).await
}

/// Save a snapshot of the list under a new share token
pub async fn save_list(list: &CategoryList) -> Result<ShareToken, String> {
    repository().save(list, &mut rand::thread_rng()).await.map_err(|e| e.to_string())
}
