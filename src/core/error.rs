//! Session construction errors.
//!
//! Gameplay never fails: guarded actions surface as notices instead.
//! These errors only come out of building a puzzle or a session.

use thiserror::Error;

/// Errors raised while setting up a puzzle session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The phrase has no characters at all.
    #[error("phrase must not be empty")]
    EmptyPhrase,

    /// The phrase consists only of spaces.
    #[error("phrase must contain at least one guessable character")]
    NoGuessableCharacters,

    /// The phrase contains the guess-mode placeholder.
    #[error("phrase must not contain the placeholder character '_'")]
    PlaceholderInPhrase,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for session setup.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SessionError::EmptyPhrase.to_string(), "phrase must not be empty");
        assert_eq!(
            SessionError::PlaceholderInPhrase.to_string(),
            "phrase must not contain the placeholder character '_'"
        );
        assert_eq!(
            SessionError::InvalidConfig("hint price is zero".into()).to_string(),
            "invalid configuration: hint price is zero"
        );
    }
}
