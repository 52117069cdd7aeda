//! Chat history panel.
//!
//! Displays the messages it is given and an uncontrolled text field. There
//! is no submit path.

mod entry;
mod history;

pub use entry::ChatEntry;
pub use history::ChatHistory;
