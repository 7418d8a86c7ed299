//! Explosion Emitter Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in emitter_operations.rs

use super::particle_data::ParticleData;
use crate::config::EmitterConfig;
use crate::driver::{SharedDriver, TimerHandle};
use crate::renderer::TextureHandle;
use cgmath::Vector3;
use rand::rngs::StdRng;

/// Where the effect timeline currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    /// Constructed, never started
    Idle,
    Explosion,
    Smoke,
    /// Ran past explosion + fade-out and paused itself
    Finished,
}

/// Lifetime counters of one emitter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterStats {
    pub runs_started: u64,
    pub ticks_stepped: u64,
    pub phase_transitions: u64,
}

/// Radial explosion followed by a smoke fade-out
pub struct ExplosionEmitterData {
    /// Fixed pool, allocated once and reused by every run
    pub particles: Vec<ParticleData>,

    pub config: EmitterConfig,

    /// `config.gravity` as a vector
    pub gravity: Vector3<f32>,

    /// `config.location` as a vector
    pub location: Vector3<f32>,

    /// Sprite shared by every particle
    pub texture: TextureHandle,

    /// Tick source injected by the host
    pub driver: SharedDriver,

    /// Registration held while running
    pub timer: Option<TimerHandle>,

    /// Ticks since the last start
    pub elapsed_ticks: u32,

    pub paused: bool,

    pub phase: EffectPhase,

    pub rng: StdRng,

    pub stats: EmitterStats,
}

impl std::fmt::Debug for ExplosionEmitterData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplosionEmitterData")
            .field("particles", &self.particles.len())
            .field("config", &self.config)
            .field("texture", &self.texture.name)
            .field("driver", &"<TickDriver>")
            .field("timer", &self.timer)
            .field("elapsed_ticks", &self.elapsed_ticks)
            .field("paused", &self.paused)
            .field("phase", &self.phase)
            .field("stats", &self.stats)
            .finish()
    }
}
