use thiserror::Error;

/// Errors produced by the canvas core.
///
/// None of these are fatal: the tool controller logs them and treats the
/// offending operation as a no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanvasError {
    #[error("Layer index {index} out of range (0..{count})")]
    OutOfRange { index: usize, count: usize },

    #[error("History index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Stroke has {points} point(s), at least 2 are required")]
    DegenerateInput { points: usize },

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("Preference storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
