//! Categorama Core
//!
//! Layered architecture:
//! - domain: Categories, share tokens, timer and game session rules
//! - repository: Document store abstraction and the Firestore client
//! - config: Store and game settings

pub mod config;
pub mod domain;
pub mod repository;

pub use config::{GameConfig, StoreConfig};
pub use domain::{
    Category, CategoryList, DomainError, DomainResult, GamePhase, GameSession, ShareToken,
    TickOutcome, Timer,
};
pub use repository::{
    CategoryDocument, CategoryRepository, DocumentStore, FirestoreStore, ListSource, LoadedList,
};

#[cfg(any(test, feature = "mock"))]
pub use repository::MemoryStore;
