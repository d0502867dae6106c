//! Domain Layer
//!
//! Game entities and rules. Nothing here performs I/O; randomness is
//! always passed in so callers decide where it comes from.

mod error;
mod random;
mod category;
mod share_token;
mod game;
mod session;

pub use error::{DomainError, DomainResult};
pub use random::{random_category_id, random_letter, CATEGORY_ID_LEN};
pub use category::{Category, CategoryList};
pub use share_token::{ShareToken, SHARE_TOKEN_LEN};
pub use game::{GamePhase, TickOutcome, Timer, MAX_DURATION_SECS};
pub use session::{GameSession, MAX_VISIBLE, MIN_VISIBLE};
