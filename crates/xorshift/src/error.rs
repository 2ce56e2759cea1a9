//! Types for error handling
//!
//! Generating numbers and jumping can never fail. The only fallible operation is restoring a
//! generator from raw state words (`from_state`), which rejects states a generator could never
//! have reached.

use std::error::Error;
use std::fmt;

/// Reasons a raw state was refused by `from_state`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Every state word is zero. This is a fixed point of the xorshift update and would produce
    /// zeros forever.
    AllZero,
    /// The cursor of a rotating-buffer generator does not index into its state array.
    CursorOutOfRange {
        /// The rejected cursor.
        cursor: usize,
        /// Number of words in the state array.
        len: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StateError::AllZero => write!(f, "state is all zero"),
            StateError::CursorOutOfRange { cursor, len } => {
                write!(f, "cursor {cursor} out of range for a state of {len} words")
            }
        }
    }
}

impl Error for StateError {}

/// Result type for state restoration.
pub type StateResult<T> = Result<T, StateError>;
