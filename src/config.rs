//! Emitter configuration
//!
//! Everything an explosion emitter needs at construction time, with the
//! defaults of the bundled effect. Configs can be built in code or loaded
//! from TOML; missing keys fall back to the defaults.

use crate::color::{default_end_color, default_smoke_color, default_start_color, Color};
use crate::constants::defaults;
use crate::error::{EffectError, EffectResult, ErrorContext};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the color blend coefficient maps to the displayed tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Coefficient is clamped to [0, 1]; the tint settles on the target
    Clamped,
    /// Coefficient is used as-is; the tint overshoots the target
    Extrapolate,
}

/// Construction-time configuration of an explosion emitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Period between two simulation ticks
    pub tick_interval_ms: f32,

    /// Uniform scale applied to the whole effect when drawing
    pub scale: f32,

    /// Acceleration added to every particle velocity each tick
    pub gravity: [f32; 3],

    /// Translation applied to the whole effect when drawing
    pub location: [f32; 3],

    /// Length of the radial burst
    pub explosion_duration_ms: f32,

    /// Length of the smoke fade-out following the burst
    pub fade_out_duration_ms: f32,

    pub start_color: Color,
    pub end_color: Color,
    pub smoke_color: Color,

    /// Sprite used for every particle quad
    pub texture_path: String,

    pub blend_mode: BlendMode,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            scale: defaults::SCALE,
            gravity: [0.0, 0.0, 0.0],
            location: [0.0, 0.0, 0.0],
            explosion_duration_ms: defaults::EXPLOSION_DURATION_MS,
            fade_out_duration_ms: defaults::FADE_OUT_DURATION_MS,
            start_color: default_start_color(),
            end_color: default_end_color(),
            smoke_color: default_smoke_color(),
            texture_path: defaults::TEXTURE_PATH.to_string(),
            blend_mode: BlendMode::Clamped,
        }
    }
}

impl EmitterConfig {
    /// Total run length of the effect
    pub fn total_duration_ms(&self) -> f32 {
        self.explosion_duration_ms + self.fade_out_duration_ms
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> EffectResult<()> {
        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms <= 0.0 {
            return Err(EffectError::invalid_config(
                "tick_interval_ms",
                self.tick_interval_ms,
                "must be a positive number of milliseconds",
            ));
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(EffectError::invalid_config(
                "scale",
                self.scale,
                "must be positive",
            ));
        }

        for (field, value) in [
            ("explosion_duration_ms", self.explosion_duration_ms),
            ("fade_out_duration_ms", self.fade_out_duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EffectError::invalid_config(
                    field,
                    value,
                    "must be a finite, non-negative duration",
                ));
            }
        }

        for (field, vector) in [("gravity", self.gravity), ("location", self.location)] {
            if vector.iter().any(|c| !c.is_finite()) {
                return Err(EffectError::invalid_config(
                    field,
                    format!("{:?}", vector),
                    "components must be finite",
                ));
            }
        }

        log::debug!(
            "[EmitterConfig] Validated: tick={}ms explosion={}ms fade_out={}ms ({} ticks total)",
            self.tick_interval_ms,
            self.explosion_duration_ms,
            self.fade_out_duration_ms,
            (self.total_duration_ms() / self.tick_interval_ms).ceil()
        );
        Ok(())
    }
}

/// Parse and validate a TOML emitter configuration
pub fn load_config_from_str(source: &str) -> EffectResult<EmitterConfig> {
    let config: EmitterConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a TOML emitter configuration file
pub fn load_config_from_file(path: impl AsRef<Path>) -> EffectResult<EmitterConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).with_path(path)?;
    let config: EmitterConfig = toml::from_str(&source).with_path(path)?;
    config.validate()?;
    log::info!("[EmitterConfig] Loaded configuration from {}", path.display());
    Ok(config)
}
