//! In-memory document store - only compiled for tests or with the `mock` feature

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::document::CategoryDocument;
use super::traits::DocumentStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(String, String), CategoryDocument>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document
    pub fn with_document(self, collection: &str, key: &str, document: CategoryDocument) -> Self {
        if let Ok(mut docs) = self.documents.lock() {
            docs.insert((collection.to_string(), key.to_string()), document);
        }
        self
    }

    /// Make every following `get` fail with a store error
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every following `set` fail with a store error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contains(&self, collection: &str, key: &str) -> bool {
        self.documents
            .lock()
            .map(|docs| docs.contains_key(&(collection.to_string(), key.to_string())))
            .unwrap_or(false)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<CategoryDocument>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Store("simulated read failure".to_string()));
        }
        let docs = self
            .documents
            .lock()
            .map_err(|_| DomainError::Store("memory store poisoned".to_string()))?;
        Ok(docs.get(&(collection.to_string(), key.to_string())).cloned())
    }

    async fn set(&self, collection: &str, key: &str, document: &CategoryDocument) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Store("simulated write failure".to_string()));
        }
        let mut docs = self
            .documents
            .lock()
            .map_err(|_| DomainError::Store("memory store poisoned".to_string()))?;
        docs.insert((collection.to_string(), key.to_string()), document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
