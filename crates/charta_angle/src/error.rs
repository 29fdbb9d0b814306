//! Error types for angle parsing and formatting.

/// Errors from the fallible (`try_*`) angle entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AngleError {
    /// DMS text with no numeric part, or with a token that is neither a
    /// number nor a compass letter.
    #[error("malformed DMS text: {0:?}")]
    Malformed(String),
    /// Angle value is NaN or infinite.
    #[error("angle is not finite: {0}")]
    NonFinite(f64),
    /// Unrecognised angle kind code.
    #[error("unknown angle kind: {0:?}")]
    UnknownKind(String),
}
