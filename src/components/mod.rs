//! UI Components
//!
//! One component per board panel.

mod letter_panel;
mod time_panel;
mod play_panel;
mod category_panel;
mod restart_panel;

pub use letter_panel::LetterPanel;
pub use time_panel::TimePanel;
pub use play_panel::PlayPanel;
pub use category_panel::CategoryPanel;
pub use restart_panel::RestartPanel;
