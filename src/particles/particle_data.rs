//! Particle Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in particle_operations.rs

use crate::color::Color;
use cgmath::{Point3, Vector2, Vector3};

/// Behaviour a particle is currently animated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticlePhase {
    /// Radial burst from the spawn square
    Explosion,
    /// Slow rising puff fading to the smoke color
    Smoke,
}

/// One animated quad of the effect
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleData {
    /// Position local to the emitter transform
    pub position: Point3<f32>,

    /// Distance travelled per fixed step
    pub velocity: Vector3<f32>,

    /// Added to `velocity` every fixed step
    pub gravity: Vector3<f32>,

    /// Quad extent, grows every tick
    pub size: Vector2<f32>,

    /// Tint the quad is drawn with
    pub current_color: Color,

    /// Tint at the start of the current phase
    pub blend_origin: Color,

    /// Tint the particle blends towards
    pub target_color: Color,

    /// Interpolation parameter between `blend_origin` and `target_color`
    pub color_blend: f32,

    /// Added to `color_blend` every tick
    pub color_blend_rate: f32,

    /// Effect time (ms) the particle last integrated to
    pub age: f32,

    /// Length of one fixed step (ms)
    pub animation_time_ms: f32,

    pub phase: ParticlePhase,
}
