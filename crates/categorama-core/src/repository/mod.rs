//! Repository Layer
//!
//! Document store abstraction, the Firestore implementation, and the
//! category repository that applies the load/save rules on top.

mod traits;
mod document;
mod firestore;
mod category_repo;

#[cfg(any(test, feature = "mock"))]
mod memory;

#[cfg(test)]
mod tests;

pub use traits::DocumentStore;
pub use document::CategoryDocument;
pub use firestore::FirestoreStore;
pub use category_repo::{CategoryRepository, ListSource, LoadedList};

#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryStore;
