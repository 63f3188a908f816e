use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 本ライブラリで発生し得るエラー。
///
/// 幾何計算の失敗はすべて [`Error::InvalidInput`] に集約され、
/// 具体的な理由は [`InvalidInput`] が保持する。
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidInput),

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

/// 不正な入力の理由。
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum InvalidInput {
    #[error("Latitude '{latitude}' is out of range (valid: -90.0..=90.0)")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude '{longitude}' is out of range (valid: -180.0..=180.0)")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Coordinate ({latitude}, {longitude}) is not finite")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },

    #[error("Polygon needs at least {required} points, got {count}")]
    TooFewPoints { count: usize, required: usize },

    #[error("Radius '{radius}' must not be negative")]
    NegativeRadius { radius: f64 },

    #[error("Radius '{radius}' is not finite")]
    NonFiniteRadius { radius: f64 },

    #[error("Earth radius '{radius}' must be a positive finite number")]
    InvalidEarthRadius { radius: f64 },

    #[error("Bearing precision '{precision}' is too large (valid: 0..={max})")]
    BearingPrecisionTooLarge { precision: u32, max: u32 },

    #[error("Bearing pair ({bearing}, {back_bearing}) is not finite")]
    NonFiniteBearing { bearing: f64, back_bearing: f64 },

    #[error("Bearing '{bearing}' is out of range (valid: 0.0..360.0)")]
    BearingOutOfRange { bearing: f64 },

    #[error("Back bearing '{back_bearing}' does not match bearing '{bearing}'")]
    BackBearingMismatch { bearing: f64, back_bearing: f64 },

    #[error("Area '{value}' must be a non-negative finite number")]
    InvalidArea { value: f64 },
}

impl Error {
    /// 入力値の不正によるエラーかどうか。
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

impl From<InvalidInput> for Error {
    fn from(reason: InvalidInput) -> Self {
        Error::InvalidInput(reason)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
        }
    }
}
