//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the document store.
//! Implementations: Firestore over HTTP, in-memory for tests.

use async_trait::async_trait;

use super::document::CategoryDocument;
use crate::domain::DomainResult;

/// Key-document store holding category lists.
///
/// Browser HTTP futures are not `Send`, so on wasm the trait drops the
/// `Send` bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DocumentStore {
    /// Read a document. `Ok(None)` when no document exists under `key`.
    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<CategoryDocument>>;

    /// Create or replace the document under `key`
    async fn set(&self, collection: &str, key: &str, document: &CategoryDocument) -> DomainResult<()>;
}
