//! Error types for landmark validation, configuration, and the game round

use thiserror::Error;

/// A hand that cannot be classified. The session treats it as absent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} landmarks, got {actual}")]
    WrongLandmarkCount { expected: usize, actual: usize },
    #[error("landmark {index} is not a finite coordinate")]
    NonFinite { index: usize },
    #[error("landmark {index} at ({x}, {y}) is outside the normalized frame")]
    OutOfRange { index: usize, x: f32, y: f32 },
}

/// Rejected configuration. The previous value is always kept.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("threshold for {finger} must be within 0..=180 degrees, got {value}")]
    ThresholdOutOfRange { finger: &'static str, value: f32 },
    #[error("minFramesConsistent must be at least 1, got {0}")]
    WindowTooSmall(usize),
    #[error("sensitivity must be within 1..=5, got {0}")]
    SensitivityOutOfRange(u32),
    #[error("unknown finger: {0}")]
    UnknownFinger(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game round actions refused in the current phase
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("camera is not ready")]
    CameraNotReady,
    #[error("no game in progress")]
    NotActive,
    #[error("no fingers detected yet")]
    NoFingers,
    #[error("not waiting for an answer")]
    NotListening,
}
