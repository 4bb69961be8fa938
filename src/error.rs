use thiserror::Error;

/// Error types for power index computation
#[derive(Debug, Error)]
pub enum PowerIndexError {
    /// A game needs at least one issue
    #[error("A game must have at least one issue.")]
    NoIssues,

    /// A game needs at least one player
    #[error("A game must have at least one player.")]
    NoPlayers,

    /// Quota count does not line up with the issue count
    #[error("Expected {expected} quotas, one per issue, but got {actual}.")]
    QuotaCountMismatch { expected: usize, actual: usize },

    /// A weight vector has the wrong number of entries
    #[error("Weight vector for issue {issue} has {actual} entries; expected {expected}.")]
    WeightCountMismatch {
        issue: usize,
        expected: usize,
        actual: usize,
    },

    /// Negative or non-finite quota
    #[error("Quota for issue {issue} must be a non-negative finite number, got {value}.")]
    InvalidQuota { issue: usize, value: f64 },

    /// Negative or non-finite weight
    #[error(
        "Weight of player {player} on issue {issue} must be a non-negative finite number, got {value}."
    )]
    InvalidWeight {
        issue: usize,
        player: usize,
        value: f64,
    },

    /// Too many players to enumerate every coalition
    #[error("There are too many players ({count}); we limit to {limit} to keep enumeration tractable.")]
    TooManyPlayers { count: usize, limit: usize },

    /// Index outside the current game shape
    #[error("{what} index {index} is out of range; there are only {len}.")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Unrecognized method token
    #[error("Unknown method '{0}'; expected 'shapley' or 'banzhaf'.")]
    InvalidMethod(String),

    /// Generic input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[cfg(feature = "serde")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PowerIndexError {
    /// Whether the error stems from the shape or content of the game itself
    pub fn is_invalid_input(&self) -> bool {
        match self {
            PowerIndexError::Io(_) => false,
            #[cfg(feature = "serde")]
            PowerIndexError::Csv(_) => false,
            #[cfg(feature = "cli")]
            PowerIndexError::Json(_) => false,
            _ => true,
        }
    }
}

/// Result type alias for power index operations
pub type Result<T> = std::result::Result<T, PowerIndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PowerIndexError::NoIssues;
        assert_eq!(err.to_string(), "A game must have at least one issue.");

        let err = PowerIndexError::QuotaCountMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Expected 2 quotas, one per issue, but got 1."
        );

        let err = PowerIndexError::WeightCountMismatch {
            issue: 1,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Weight vector for issue 1 has 2 entries; expected 3."
        );

        let err = PowerIndexError::TooManyPlayers {
            count: 25,
            limit: 20,
        };
        assert_eq!(
            err.to_string(),
            "There are too many players (25); we limit to 20 to keep enumeration tractable."
        );

        let err = PowerIndexError::InvalidMethod("owen".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown method 'owen'; expected 'shapley' or 'banzhaf'."
        );

        let err = PowerIndexError::IndexOutOfRange {
            what: "Issue",
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Issue index 4 is out of range; there are only 2."
        );
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(PowerIndexError::NoPlayers.is_invalid_input());
        let io = std::io::Error::other("disk");
        assert!(!PowerIndexError::Io(io).is_invalid_input());
    }
}
