//! Error handling for the explosion effect
//!
//! The simulation itself is total: stepping, drawing and the phase
//! transition never fail. Errors only come from the edges, i.e. loading
//! assets and configuration, validating configuration and registering
//! with a tick driver.

use std::fmt;
use std::path::Path;

/// Main error type for the effect crate
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("Texture load failed for {path}: {error}")]
    TextureLoad { path: String, error: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse failed for {path}: {error}")]
    ConfigParse { path: String, error: String },

    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },

    #[error("Tick driver rejected registration: {reason}")]
    DriverRegistration { reason: String },

    #[error("GPU upload '{operation}' failed: {error}")]
    GpuUpload { operation: String, error: String },
}

/// Type alias for Results in the effect crate
pub type EffectResult<T> = Result<T, EffectError>;

impl EffectError {
    /// Shorthand for a rejected configuration value
    pub fn invalid_config(field: &str, value: impl fmt::Display, reason: &str) -> Self {
        EffectError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for EffectError {
    fn from(error: std::io::Error) -> Self {
        EffectError::Io {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for EffectError {
    fn from(error: toml::de::Error) -> Self {
        EffectError::ConfigParse {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<image::ImageError> for EffectError {
    fn from(error: image::ImageError) -> Self {
        EffectError::TextureLoad {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

/// Extension trait for attaching the offending path to an error
pub trait ErrorContext<T> {
    fn with_path(self, path: &Path) -> EffectResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<EffectError>,
{
    fn with_path(self, path: &Path) -> EffectResult<T> {
        let shown = path.display().to_string();
        self.map_err(|e| match e.into() {
            EffectError::TextureLoad { error, .. } => EffectError::TextureLoad { path: shown, error },
            EffectError::ConfigParse { error, .. } => EffectError::ConfigParse { path: shown, error },
            EffectError::Io { error, .. } => EffectError::Io { path: shown, error },
            other => other,
        })
    }
}
