//! Error types for frame ingestion, pose sources and session control
//!
//! Per-frame problems (`FrameError`) are recoverable: the frame is dropped and
//! the session keeps its state. Upstream failures (`SourceError`) end the
//! control loop.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A single incoming frame could not be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("invalid landmark data length: {got} (expected 0 or {expected})")]
    InvalidLength { got: usize, expected: usize },
}

/// The camera / pose pipeline feeding the engine is gone
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("pose source unavailable: {0}")]
    Unavailable(String),

    #[error("pose source disconnected")]
    Disconnected,
}

/// Errors surfaced by the session / configuration API
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),

    #[error("no active workout session")]
    NoActiveSession,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidConfig(err.to_string())
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
