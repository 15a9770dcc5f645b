//! Error types for stockcut.

use thiserror::Error;

/// Result type alias for stockcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or editing a cut layout.
///
/// Oversized pieces and rejected editor gestures are not errors: the former
/// are reported as [`PlacementWarning`](crate::PlacementWarning)s, the latter
/// as `EditorRejection` values by the layout editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Stock dimensions are missing, non-positive or not finite.
    #[error("Invalid stock: {0}")]
    InvalidStock(String),

    /// A piece spec failed validation.
    #[error("Invalid piece #{index}: {reason}")]
    InvalidPiece {
        /// Zero-based index of the offending spec in the caller's list.
        index: usize,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// A supplied sheet layout has overlapping or out-of-bounds placements.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Configuration error (spacing, kerf, tolerance).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The computation was cancelled before its result was committed.
    #[error("Computation cancelled")]
    Cancelled,

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if this error was raised by input validation, i.e. before
    /// any packing took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidStock(_)
                | Error::InvalidPiece { .. }
                | Error::InvalidLayout(_)
                | Error::ConfigError(_)
        )
    }

    pub(crate) fn piece(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidPiece {
            index,
            reason: reason.into(),
        }
    }
}
