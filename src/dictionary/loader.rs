//! Dictionary loading utilities
//!
//! Reads word lists from files, or falls back to the embedded list.

use super::Dictionary;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Name accepted in place of a path to select the compiled-in list
pub const EMBEDDED_SOURCE: &str = "embedded";

/// Load a dictionary from a plain-text file
///
/// Every whitespace-separated token is one entry.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::parse(&content);

    tracing::info!(
        path = %path.display(),
        words = dictionary.len(),
        "loaded dictionary"
    );
    Ok(dictionary)
}

/// Load a dictionary, degrading to an unavailable one on failure
///
/// A missing or unreadable file never aborts the caller. The result is an
/// empty dictionary whose status carries the reason, so searches against it
/// report `DictionaryUnavailable` rather than a missing ladder.
#[must_use]
pub fn load_or_unavailable<P: AsRef<Path>>(path: P) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "dictionary unavailable");
            Dictionary::unavailable(format!("{}: {e}", path.display()))
        }
    }
}

/// Resolve a dictionary source name
///
/// `"embedded"` borrows the shared compiled-in list; anything else is
/// treated as a path and loaded fail-soft.
#[must_use]
pub fn load_source(source: &str) -> Cow<'static, Dictionary> {
    if source == EMBEDDED_SOURCE {
        Cow::Borrowed(Dictionary::embedded())
    } else {
        Cow::Owned(load_or_unavailable(source))
    }
}
