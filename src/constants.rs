//! Constants shared by the explosion effect
//!
//! Kinematic and visual constants of the explosion archetype. Anything a
//! host may want to tune lives in `EmitterConfig` instead.

/// Particle kinematics
pub mod kinematics {
    /// Radial burst speed applied to the [-1, 1] velocity draws
    pub const BURST_SPEED: f32 = 0.55;

    /// Half-extent of the square the particles spawn in
    pub const SPAWN_EXTENT: f32 = 1.0;

    /// Depth step between consecutive particles in the pool
    pub const DEPTH_STEP: f32 = 0.1;

    /// Per-tick growth of the particle quad
    pub const SIZE_INCREASE: [f32; 2] = [1.0, 1.0];

    /// Per-tick position shift that keeps a growing quad centred
    pub const SIZE_INCREASE_SHIFT: [f32; 3] = [-0.5, -0.5, 0.0];

    /// Quad extent after reset
    pub const BASE_SIZE: [f32; 2] = [0.5, 0.5];
}

/// Smoke phase parameters
pub mod smoke {
    /// Blend rate forced on every particle when the smoke phase begins
    pub const BLEND_RATE: f32 = 0.03;

    /// Horizontal velocity damping at the transition
    pub const VELOCITY_X_FACTOR: f32 = 0.3;

    /// Constant rise speed of the smoke puff
    pub const RISE_SPEED: f32 = 0.1;
}

/// Color blending
pub mod blending {
    /// Lower bound of the per-particle explosion blend rate
    pub const MIN_BLEND_RATE: f32 = 0.01;

    /// Upper bound of the per-particle explosion blend rate
    pub const MAX_BLEND_RATE: f32 = 0.05;
}

/// Configuration defaults
pub mod defaults {
    pub const TICK_INTERVAL_MS: f32 = 10.0;
    pub const SCALE: f32 = 0.5;
    pub const EXPLOSION_DURATION_MS: f32 = 70.0;
    pub const FADE_OUT_DURATION_MS: f32 = 500.0;

    /// Bundled explosion sprite
    pub const TEXTURE_PATH: &str = "data/img/exp1.png";
}
