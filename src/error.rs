use std::fmt;

/// Unified error type for the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node handle that no longer names a live node. The slot was
    /// reclaimed by an earlier erase, or the handle came from another tree.
    StaleHandle,
    /// A structural red-black invariant does not hold (reported by the
    /// checker in `tree::check`, never by normal operations).
    InvariantViolation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StaleHandle => write!(f, "stale node handle"),
            Error::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
