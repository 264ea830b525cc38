//! Shared terminal utilities for phylotag
//!
//! Provides progress spinners and status output used by the pipeline
//! and the command line.

pub mod output;
pub mod progress;

// Re-export commonly used items
pub use output::{format_number, info, success, warning};
pub use progress::{create_hidden_spinner, create_spinner, SPINNER_TICK_LINES};
