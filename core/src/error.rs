//! Error type shared by views and the benchmark harness.
//!
//! There are exactly two ways a case can fail: the buffer or one of its views
//! could not be built (`Setup`), or a routine touched an index outside the
//! bounds of the view it was reading (`Access`). Both are fatal to the case
//! they occur in and neither is retried.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer or view construction failed (e.g. an invalid length or window).
    #[error("setup failed: {reason}")]
    Setup { reason: String },

    /// An index was outside `0..len` of the view it was used on.
    #[error("index {index} out of range for view of length {len}")]
    Access { index: usize, len: usize },
}

impl Error {
    pub(crate) fn setup(reason: impl Into<String>) -> Self {
        Error::Setup {
            reason: reason.into(),
        }
    }

    /// Returns `true` for setup failures.
    pub fn is_setup(&self) -> bool {
        matches!(self, Error::Setup { .. })
    }

    /// Returns `true` for out-of-range accesses.
    pub fn is_access(&self) -> bool {
        matches!(self, Error::Access { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_setup() {
        let err = Error::setup("buffer length must be non-zero");
        assert_eq!(err.to_string(), "setup failed: buffer length must be non-zero");
        assert!(err.is_setup());
        assert!(!err.is_access());
    }

    #[test]
    fn display_access() {
        let err = Error::Access { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for view of length 3");
        assert!(err.is_access());
    }
}
