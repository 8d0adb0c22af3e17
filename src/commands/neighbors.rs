//! Word neighbourhood commands
//!
//! Lists the one-letter neighbours of a word, and checks words against the
//! dictionary and each other.

use crate::core::{Word, is_one_character_off};
use crate::dictionary::Dictionary;
use crate::search::{LadderError, LadderSolver};

/// Result of listing a word's neighbours
pub struct NeighborsResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
}

/// Find every dictionary word one letter away from `word`
///
/// The word itself need not be in the dictionary.
///
/// # Errors
///
/// Returns `InvalidInput` if the word is blank.
pub fn find_neighbors(word: &str, dictionary: &Dictionary) -> Result<NeighborsResult, LadderError> {
    let word = Word::new(word).map_err(|_| LadderError::InvalidInput {
        word: word.to_string(),
    })?;

    let neighbors = LadderSolver::new(dictionary)
        .candidates_one_off(word.text())
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    Ok(NeighborsResult {
        in_dictionary: dictionary.is_valid(word.text()),
        word: word.text().to_string(),
        neighbors,
    })
}

/// Result of checking one or two words
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    pub other: Option<OtherWord>,
}

/// The second word of a check, compared against the first
pub struct OtherWord {
    pub word: String,
    pub valid: bool,
    pub adjacent: bool,
}

/// Check a word against the dictionary, and optionally against another word
#[must_use]
pub fn check_words(word: &str, other: Option<&str>, dictionary: &Dictionary) -> CheckResult {
    CheckResult {
        word: word.trim().to_string(),
        valid: dictionary.is_valid(word),
        other: other.map(|other| OtherWord {
            word: other.trim().to_string(),
            valid: dictionary.is_valid(other),
            adjacent: is_one_character_off(word, other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_of_about() {
        let result = find_neighbors("about", Dictionary::embedded()).unwrap();

        assert_eq!(result.word, "about");
        assert!(result.in_dictionary);
        assert_eq!(result.neighbors, ["ABORT"]);
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let dictionary = Dictionary::parse("COLD CORD CARD");
        let result = find_neighbors("bold", &dictionary).unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.neighbors, ["COLD"]);
    }

    #[test]
    fn neighbors_of_blank_word() {
        let result = find_neighbors("  ", Dictionary::embedded());
        assert!(result.is_err());
    }

    #[test]
    fn check_single_word() {
        let result = check_words(" pixel ", None, Dictionary::embedded());

        assert_eq!(result.word, "pixel");
        assert!(result.valid);
        assert!(result.other.is_none());
    }

    #[test]
    fn check_pair() {
        let result = check_words("piles", Some("piled"), Dictionary::embedded());
        let other = result.other.unwrap();

        assert!(result.valid);
        assert!(other.valid);
        assert!(other.adjacent);

        let result = check_words("test", Some("tester"), Dictionary::embedded());
        let other = result.other.unwrap();
        assert!(!result.valid);
        assert!(!other.adjacent);
    }
}
