use std::error::Error;
use std::fmt;

/// Indicates that a game could not be configured.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MastermindError {
    /// Indicates that the guess budget does not allow at least one guess.
    InvalidGuessBudget,
    /// Indicates that the code does not contain at least one position.
    InvalidCodeLength,
    /// Indicates that the value range falls outside 0 to 9, or that the
    /// minimum exceeds the maximum.
    InvalidValueRange,
    /// Indicates that a duplicate-free code was requested with fewer distinct
    /// values than code positions.
    RangeTooSmallForCode,
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MastermindError::InvalidGuessBudget => write!(f, "at least one guess is required"),
            MastermindError::InvalidCodeLength => {
                write!(f, "the secret code must contain at least one number")
            }
            MastermindError::InvalidValueRange => write!(
                f,
                "code values must be between 0 and 9, with the minimum no greater than the maximum"
            ),
            MastermindError::RangeTooSmallForCode => write!(
                f,
                "the code value range must hold at least as many values as there are code positions"
            ),
        }
    }
}

impl Error for MastermindError {}

/// The result of a single guess submission.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GuessResult {
    /// Indicates that the guess could not be scored, and provides the message
    /// to show the player.
    Rejected(String),
    /// Indicates that the guess was scored against the secret code.
    Scored {
        /// One `+` per exact match followed by one `-` per value-only match.
        score: String,
        /// True iff every position matched the secret exactly.
        is_perfect: bool,
    },
}

/// Whether a session is still accepting guesses, or how it ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    /// The session is accepting guesses.
    Active,
    /// A guess matched every position of the secret code.
    Won,
    /// The guess budget was consumed without a perfect guess.
    Exhausted,
}
