//! RGBA color used for particle tints
//!
//! Channels are linear floats in [0, 1]. The layout matches the `tint`
//! attribute of `QuadInstance`, so colors can be copied straight into GPU
//! buffers.

use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Explosion start tint: opaque orange
pub fn default_start_color() -> Color {
    Color::from_rgba8(255, 165, 0, 255)
}

/// Explosion end tint: half-transparent red
pub fn default_end_color() -> Color {
    Color::from_rgba8(255, 0, 0, 128)
}

/// Smoke tint: fully transparent black
pub fn default_smoke_color() -> Color {
    Color::from_rgba8(0, 0, 0, 0)
}

/// Linear interpolation between two colors.
///
/// `t` is not clamped here; callers decide whether to extrapolate.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
