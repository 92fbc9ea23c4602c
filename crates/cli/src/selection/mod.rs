//! Interactive terminal selection.
//!
//! This module provides the raw-terminal list selector: it renders a titled
//! list of labeled items, reads one key at a time, and returns the chosen
//! item or a cancellation.
//!
//! # User Interface
//!
//! - Arrow keys or vim-style (j/k) navigation, no wrap-around
//! - Enter to select the highlighted item
//! - 'q', Escape or Ctrl+C to cancel
//!
//! Terminal restoration is the load-bearing guarantee here: raw mode, the
//! hidden cursor and the alternate screen are released on every exit path,
//! via an RAII guard.

pub mod types;
pub mod ui;

// Re-exports for convenience
pub use types::{Selection, SelectableItem, SelectorSession};
pub use ui::{apply_key_event, select, KeyOutcome};
