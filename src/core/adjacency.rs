//! One-character adjacency between words
//!
//! Two words are adjacent in the ladder graph when they have the same length
//! and differ at exactly one position, ignoring case and surrounding
//! whitespace.

use super::word::fold;

/// Check whether two words are exactly one character apart
///
/// Both sides are trimmed and case-folded first. Words of different lengths
/// are never adjacent, and a word is not adjacent to itself.
///
/// # Examples
/// ```
/// use word_ladder::core::is_one_character_off;
///
/// assert!(is_one_character_off("piles", "piled"));
/// assert!(is_one_character_off("PiLes ", " pIlEd"));
/// assert!(!is_one_character_off("test", "tester"));
/// assert!(!is_one_character_off("pixel", "PIXEL"));
/// ```
#[must_use]
pub fn is_one_character_off(current: &str, compared_to: &str) -> bool {
    keys_one_off(&fold(current), &fold(compared_to))
}

/// Adjacency on already-folded keys
pub(crate) fn keys_one_off(current: &str, compared_to: &str) -> bool {
    let mut current_chars = current.chars();
    let mut compared_chars = compared_to.chars();
    let mut characters_apart = 0usize;

    loop {
        match (current_chars.next(), compared_chars.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    characters_apart += 1;
                    if characters_apart > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return characters_apart == 1,
            _ => {
                tracing::trace!(
                    current,
                    compared_to,
                    "length mismatch, words are not adjacent"
                );
                return false;
            }
        }
    }
}
