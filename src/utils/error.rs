use crate::domain::model::LifecycleEvent;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Cannot parse lifecycle event from {line:?}: {reason}")]
    ParseEvent { line: String, reason: String },

    #[error("Event #{index} ({event}) destroys an instance that is not live")]
    UnbalancedDestruct { index: usize, event: LifecycleEvent },

    #[error("Event #{index} should destroy {expected}, found {found}")]
    MismatchedDestruct {
        index: usize,
        expected: LifecycleEvent,
        found: LifecycleEvent,
    },

    #[error("Event #{index} is out of order: {reason}")]
    OutOfOrder { index: usize, reason: String },

    #[error("{count} instance(s) still live at end of transcript")]
    StillLive { count: usize },

    #[error("Transcript diverges at event #{index}: expected {expected}, found {found}")]
    TranscriptMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
