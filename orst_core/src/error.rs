use thiserror::Error;

/// Alias for `Result<T, orst_core::OrstError>`.
pub type Result<T> = std::result::Result<T, OrstError>;

/// Represents everything that can go wrong while producing a trace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrstError {
    /// Raised when the algorithm selector does not name one of the supported algorithms. Nothing
    /// is sorted when this happens.
    #[error("unknown algorithm `{0}` (expected bubble, insertion, selection, quick or merge)")]
    UnknownAlgorithm(String),

    /// Raised by the first comparison between two values that have no ordering, such as `NaN`
    /// against any float. The partially built trace is dropped.
    #[error("cannot compare {left} with {right}: the values are not ordered")]
    IncomparableElements { left: String, right: String },
}
