// Explosion FX - Data-Oriented Programming (DOP) Architecture
//
// A radial explosion that turns into a rising smoke puff, simulated on a
// fixed tick and drawn as a batch of camera-facing quads.
// - *_data modules hold plain data
// - *_operations modules hold the functions that transform it
//
// Typical host loop:
// - create one FixedStepClock and share it with every emitter
// - create_emitter / create_emitter_from_config, then start_emitter
// - every frame: clock.advance(frame_time), pump_emitter, draw_emitter

// Constants module
pub mod constants;

// Core modules
pub mod color;
pub mod config;
pub mod error;

// Essential systems
pub mod camera;
pub mod driver;
pub mod particles;
pub mod renderer;

pub use camera::{billboard_basis, BillboardBasis, CameraData};
pub use color::{lerp_color, Color};
pub use config::{load_config_from_file, load_config_from_str, BlendMode, EmitterConfig};
pub use driver::{FixedStepClock, SharedDriver, TickDriver, TimerHandle};
pub use error::{EffectError, EffectResult, ErrorContext};
pub use particles::{
    create_emitter, create_emitter_from_config, create_emitter_with_seed, draw_emitter,
    pause_emitter, pump_emitter, start_emitter, step_emitter, stop_emitter, EffectPhase,
    ExplosionEmitterData, ParticleData, ParticlePhase,
};
pub use renderer::{QuadBatchData, QuadRenderer, RecordingRenderer, TextureCache, TextureHandle};

// Re-export wgpu for hosts uploading quad batches
#[cfg(feature = "gpu")]
pub use wgpu;
