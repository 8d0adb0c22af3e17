use thiserror::Error;

/// Reasons a ladder search produces no ladder
///
/// None of these abort the caller. [`LadderSolver::transform`] logs them and
/// returns an empty ladder.
///
/// [`LadderSolver::transform`]: super::LadderSolver::transform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("'{word}' is not a word in the dictionary")]
    InvalidInput { word: String },
    #[error("'{start}' and '{end}' have different lengths")]
    LengthMismatch { start: String, end: String },
    #[error("no ladder connects '{start}' to '{end}'")]
    NoPathFound { start: String, end: String },
    #[error("dictionary unavailable: {reason}")]
    DictionaryUnavailable { reason: String },
    #[error("no ladder within {depth} steps")]
    DepthLimitReached { depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_words() {
        let err = LadderError::InvalidInput {
            word: "xyzzy".to_string(),
        };
        assert_eq!(err.to_string(), "'xyzzy' is not a word in the dictionary");

        let err = LadderError::NoPathFound {
            start: "CAT".to_string(),
            end: "DOG".to_string(),
        };
        assert_eq!(err.to_string(), "no ladder connects 'CAT' to 'DOG'");
    }
}
