//! Error types for the mind library.

use thiserror::Error;

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, MindError>;

/// Errors surfaced by the network core.
///
/// There are exactly two kinds: construction-time topology problems (fatal,
/// the network cannot be built) and call-time dimension mismatches
/// (recoverable, the network state is left untouched and the caller may
/// retry with correctly sized vectors).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MindError {
    /// The topology cannot produce a network.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A supplied vector's length does not match the relevant layer width.
    #[error("dimension mismatch for {what}: got {got}, expected {expected}")]
    DimensionMismatch {
        /// What was being matched (e.g. "inputs", "targets").
        what: &'static str,
        /// Observed length.
        got: usize,
        /// Expected length.
        expected: usize,
    },
}
