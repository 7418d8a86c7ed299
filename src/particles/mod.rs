//! Particles Module - explosion archetype in DOP style
//!
//! - particle_data.rs / emitter_data.rs: pure data
//! - particle_operations.rs / emitter_operations.rs: functions over that data

pub mod emitter_data;
pub mod emitter_operations;
pub mod particle_data;
pub mod particle_operations;

// Re-export data structures
pub use emitter_data::{EffectPhase, EmitterStats, ExplosionEmitterData};
pub use particle_data::{ParticleData, ParticlePhase};

// Re-export operations
pub use emitter_operations::{
    create_emitter, create_emitter_from_config, create_emitter_with_seed, crossed_threshold,
    draw_emitter, effect_clock_ms, effect_phase, emitter_stats, is_paused, particle_count,
    pause_emitter, pump_emitter, start_emitter, step_emitter, stop_emitter,
};
pub use particle_operations::{
    apply_phase_transition, blend_factor, create_particle, draw_particle, grow_particle,
    integrate_particle, reset_particle,
};
