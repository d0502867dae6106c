//! Category Repository
//!
//! Load and save rules for category lists:
//! - the built-in list lives in one fixed document
//! - saved lists live in their own collection, keyed by share token
//! - startup loading never fails; it falls back shared -> default -> empty

use rand::Rng;

use super::document::CategoryDocument;
use super::traits::DocumentStore;
use crate::config::StoreConfig;
use crate::domain::{CategoryList, DomainError, DomainResult, ShareToken};

/// Where a loaded list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Shared(ShareToken),
    Default,
    /// Nothing could be loaded
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedList {
    pub categories: CategoryList,
    pub source: ListSource,
}

impl LoadedList {
    pub fn token(&self) -> Option<ShareToken> {
        match &self.source {
            ListSource::Shared(token) => Some(token.clone()),
            _ => None,
        }
    }
}

pub struct CategoryRepository<S> {
    store: S,
    config: StoreConfig,
}

impl<S: DocumentStore> CategoryRepository<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The built-in list. `NotFound` if the document is missing.
    pub async fn load_default(&self) -> DomainResult<CategoryList> {
        let collection = &self.config.default_collection;
        let key = &self.config.default_document;
        self.store
            .get(collection, key)
            .await?
            .map(|doc| doc.categories)
            .ok_or_else(|| DomainError::NotFound(format!("{}/{}", collection, key)))
    }

    /// A saved list. `NotFound` if nothing was saved under `token`.
    pub async fn load_shared(&self, token: &ShareToken) -> DomainResult<CategoryList> {
        let collection = &self.config.shared_collection;
        self.store
            .get(collection, token.as_str())
            .await?
            .map(|doc| doc.categories)
            .ok_or_else(|| DomainError::NotFound(format!("{}/{}", collection, token)))
    }

    /// Startup load for a URL fragment (`""`, `"#"`, or `"#<token>"`).
    pub async fn load_for_fragment(&self, fragment: &str) -> LoadedList {
        match ShareToken::from_fragment(fragment) {
            Some(Ok(token)) => match self.load_shared(&token).await {
                Ok(categories) => {
                    log::info!("Loaded shared list {} ({} categories)", token, categories.len());
                    return LoadedList {
                        categories,
                        source: ListSource::Shared(token),
                    };
                }
                Err(e) => log::warn!("Shared list {} unavailable, using default: {}", token, e),
            },
            Some(Err(e)) => log::warn!("Ignoring URL fragment: {}", e),
            None => {}
        }

        match self.load_default().await {
            Ok(categories) => {
                log::info!("Loaded default list ({} categories)", categories.len());
                LoadedList {
                    categories,
                    source: ListSource::Default,
                }
            }
            Err(e) => {
                log::error!("Default list unavailable, starting empty: {}", e);
                LoadedList {
                    categories: CategoryList::new(),
                    source: ListSource::Empty,
                }
            }
        }
    }

    /// Store a snapshot of `list` under a fresh share token drawn from `rng`.
    pub async fn save<R: Rng + ?Sized>(&self, list: &CategoryList, rng: &mut R) -> DomainResult<ShareToken> {
        let token = ShareToken::generate(rng);
        let document = CategoryDocument::new(list.clone());
        self.store
            .set(&self.config.shared_collection, token.as_str(), &document)
            .await?;
        log::info!("New list saved with ID: {}", token);
        Ok(token)
    }
}
