//! Command Wrappers
//!
//! Side-effecting calls made by the UI, organized by what they touch:
//! - persistence: the document store (load / save category lists)
//! - location: the page URL fragment used for sharing

mod persistence;
mod location;

pub use persistence::*;
pub use location::*;
