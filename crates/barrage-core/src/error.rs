//! Error types for Barrage

use thiserror::Error;

/// The main error type for Barrage operations
#[derive(Debug, Error)]
pub enum BarrageError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for Barrage operations
pub type Result<T> = std::result::Result<T, BarrageError>;

impl From<toml::de::Error> for BarrageError {
    fn from(err: toml::de::Error) -> Self {
        BarrageError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BarrageError {
    fn from(err: toml::ser::Error) -> Self {
        BarrageError::TomlSerError(err.to_string())
    }
}

impl BarrageError {
    /// Build a `ValueOutOfRange` error for a named field
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        BarrageError::ValueOutOfRange {
            field: field.into(),
            min,
            max,
            value,
        }
    }
}
