//! Formatting utilities for terminal output

use crate::core::fold;
use colored::Colorize;

/// Position of the single letter that differs between two ladder rungs
///
/// Returns `None` unless the words differ at exactly one position.
#[must_use]
pub fn changed_position(previous: &str, next: &str) -> Option<usize> {
    let previous = fold(previous);
    let next = fold(next);
    if previous.chars().count() != next.chars().count() {
        return None;
    }

    let mut differences = previous
        .chars()
        .zip(next.chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match (differences.next(), differences.next()) {
        (Some(position), None) => Some(position),
        _ => None,
    }
}

/// Uppercase a rung, highlighting the letter that changed from the previous one
#[must_use]
pub fn highlight_step(previous: Option<&str>, next: &str) -> String {
    step_letters(previous, next)
        .into_iter()
        .map(|(letter, changed)| {
            if changed {
                letter.bright_green().bold().to_string()
            } else {
                letter
            }
        })
        .collect()
}

/// Uppercased letters of a rung, each flagged if it is the changed one
///
/// A letter may uppercase to several characters (`ß` to `SS`); they stay
/// together as one entry.
fn step_letters(previous: Option<&str>, next: &str) -> Vec<(String, bool)> {
    let changed = previous.and_then(|previous| changed_position(previous, next));

    next.trim()
        .chars()
        .enumerate()
        .map(|(i, c)| (c.to_uppercase().collect(), Some(i) == changed))
        .collect()
}

/// Join a ladder into one line
#[must_use]
pub fn ladder_line(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
