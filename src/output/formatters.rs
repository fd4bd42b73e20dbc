//! Formatting utilities for terminal output

use crate::commands::SearchHit;

/// Summary line printed before search results
#[must_use]
pub fn match_summary(count: usize) -> String {
    format!("A total of {count} matches found.")
}

/// Format one hit as `text`, or `text<TAB>jokers` for joker matches
#[must_use]
pub fn format_hit(hit: &SearchHit) -> String {
    match &hit.jokers {
        Some(jokers) => format!("{}\t{jokers}", hit.text),
        None => hit.text.clone(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
