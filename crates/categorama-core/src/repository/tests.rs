//! Repository Integration Tests
//!
//! Tests for CategoryRepository against the in-memory document store.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::StoreConfig;
    use crate::domain::{Category, CategoryList, DomainError, ShareToken};
    use crate::repository::{CategoryDocument, CategoryRepository, ListSource, MemoryStore};

    fn default_list() -> CategoryList {
        vec![
            Category::new("d1", "Sports"),
            Category::new("d2", "Movie titles"),
            Category::new("d3", "Things that are cold"),
        ]
        .into()
    }

    fn setup_repo() -> CategoryRepository<MemoryStore> {
        let config = StoreConfig::default();
        let store = MemoryStore::new().with_document(
            &config.default_collection,
            &config.default_document,
            CategoryDocument::new(default_list()),
        );
        CategoryRepository::new(store, config)
    }

    #[tokio::test]
    async fn test_load_default() {
        let repo = setup_repo();
        let list = repo.load_default().await.expect("Failed to load default");
        assert_eq!(list, default_list());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let repo = setup_repo();
        let list: CategoryList = vec![
            Category::new("x1", "Desserts"),
            Category::new("x2", "Car brands"),
        ]
        .into();

        let token = repo.save(&list, &mut StdRng::seed_from_u64(3)).await.expect("Save failed");
        assert_eq!(token, ShareToken::generate(&mut StdRng::seed_from_u64(3)));
        assert!(repo.store().contains("UpdatedCategories", token.as_str()));

        let loaded = repo.load_shared(&token).await.expect("Load failed");
        assert!(loaded.same_entries(&list));
    }

    #[tokio::test]
    async fn test_each_save_gets_new_token() {
        let repo = setup_repo();
        let mut rng = StdRng::seed_from_u64(11);
        let first = repo.save(&default_list(), &mut rng).await.unwrap();
        let second = repo.save(&default_list(), &mut rng).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(repo.store().write_count(), 2);
    }

    #[tokio::test]
    async fn test_load_shared_unknown_token() {
        let repo = setup_repo();
        let token: ShareToken = "Zz9Yy8X".parse().unwrap();
        let result = repo.load_shared(&token).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fragment_with_saved_token() {
        let repo = setup_repo();
        let list: CategoryList = vec![Category::new("s1", "Islands")].into();
        let token = repo.save(&list, &mut StdRng::seed_from_u64(7)).await.unwrap();

        let loaded = repo.load_for_fragment(&token.to_fragment()).await;

        assert_eq!(loaded.categories, list);
        assert_eq!(loaded.source, ListSource::Shared(token.clone()));
        assert_eq!(loaded.token(), Some(token));
    }

    #[tokio::test]
    async fn test_fragment_unknown_token_falls_back_to_default() {
        let repo = setup_repo();
        let loaded = repo.load_for_fragment("#Zz9Yy8X").await;
        assert_eq!(loaded.categories, default_list());
        assert_eq!(loaded.source, ListSource::Default);
        assert!(loaded.token().is_none());
    }

    #[tokio::test]
    async fn test_fragment_garbage_falls_back_to_default() {
        let repo = setup_repo();
        let loaded = repo.load_for_fragment("#not a token").await;
        assert_eq!(loaded.source, ListSource::Default);
    }

    #[tokio::test]
    async fn test_empty_fragment_loads_default() {
        let repo = setup_repo();
        assert_eq!(repo.load_for_fragment("").await.source, ListSource::Default);
        assert_eq!(repo.load_for_fragment("#").await.source, ListSource::Default);
    }

    #[tokio::test]
    async fn test_missing_default_starts_empty() {
        let repo = CategoryRepository::new(MemoryStore::new(), StoreConfig::default());

        assert!(matches!(repo.load_default().await, Err(DomainError::NotFound(_))));

        let loaded = repo.load_for_fragment("").await;
        assert!(loaded.categories.is_empty());
        assert_eq!(loaded.source, ListSource::Empty);
    }

    #[tokio::test]
    async fn test_read_failure_starts_empty() {
        let repo = setup_repo();
        repo.store().fail_reads(true);

        let loaded = repo.load_for_fragment("#Ab12Cd3").await;

        assert!(loaded.categories.is_empty());
        assert_eq!(loaded.source, ListSource::Empty);
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let repo = setup_repo();
        repo.store().fail_writes(true);

        let result = repo.save(&default_list(), &mut StdRng::seed_from_u64(1)).await;

        assert!(matches!(result, Err(DomainError::Store(_))));
        assert_eq!(repo.store().write_count(), 0);
    }
}
