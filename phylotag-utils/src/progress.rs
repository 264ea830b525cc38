//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// How many input lines a streaming reader consumes between spinner updates
pub const SPINNER_TICK_LINES: u64 = 100_000;

/// Create a spinner with consistent styling
///
/// Draws to stderr; indicatif hides it automatically when stderr is not a
/// terminal, so piping output never picks up control sequences.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({human_pos} lines, {elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// A spinner that never draws, for quiet runs
pub fn create_hidden_spinner() -> ProgressBar {
    ProgressBar::hidden()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_counts() {
        let pb = create_hidden_spinner();
        pb.inc(SPINNER_TICK_LINES);
        pb.inc(5);
        assert_eq!(pb.position(), SPINNER_TICK_LINES + 5);
        pb.finish_and_clear();
    }

    #[test]
    fn test_spinner_message() {
        let pb = create_spinner("Reading nodes.dmp");
        assert_eq!(pb.message(), "Reading nodes.dmp");
        pb.finish_and_clear();
    }
}
