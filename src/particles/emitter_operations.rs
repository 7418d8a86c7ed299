//! Explosion Emitter Operations - Pure DOP Functions
//!
//! Lifecycle (start / pause / stop), the fixed-step timeline and draw
//! sequencing of an explosion emitter. The logical clock is
//! `elapsed_ticks * tick_interval_ms`; the burst lasts until it reaches
//! `explosion_duration_ms`, the smoke until it reaches
//! `explosion_duration_ms + fade_out_duration_ms`.

use super::emitter_data::{EffectPhase, EmitterStats, ExplosionEmitterData};
use super::particle_operations::{
    apply_phase_transition, create_particle, draw_particle, grow_particle, integrate_particle,
    reset_particle,
};
use crate::config::EmitterConfig;
use crate::constants::kinematics;
use crate::driver::{period_from_ms, SharedDriver};
use crate::error::EffectResult;
use crate::renderer::{get_or_load_texture, QuadRenderer, TextureCache, TextureHandle};
use cgmath::{Vector2, Vector3};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Build an emitter with `max_particles` pooled particles.
///
/// Particle `i` sits at depth `i * DEPTH_STEP` so quads never share a plane.
/// The emitter is paused until `start_emitter` is called.
pub fn create_emitter(
    max_particles: usize,
    config: EmitterConfig,
    texture: TextureHandle,
    driver: SharedDriver,
) -> EffectResult<ExplosionEmitterData> {
    create_emitter_with_rng(max_particles, config, texture, driver, StdRng::from_entropy())
}

/// Same as `create_emitter` with a reproducible random sequence
pub fn create_emitter_with_seed(
    max_particles: usize,
    config: EmitterConfig,
    texture: TextureHandle,
    driver: SharedDriver,
    seed: u64,
) -> EffectResult<ExplosionEmitterData> {
    create_emitter_with_rng(max_particles, config, texture, driver, StdRng::seed_from_u64(seed))
}

/// Load the configured sprite through `cache` and build the emitter.
/// A missing or undecodable sprite fails here, before any run starts.
pub fn create_emitter_from_config(
    max_particles: usize,
    config: EmitterConfig,
    cache: &TextureCache,
    driver: SharedDriver,
) -> EffectResult<ExplosionEmitterData> {
    config.validate()?;
    let texture = get_or_load_texture(cache, &config.texture_path)?;
    create_emitter(max_particles, config, texture, driver)
}

fn create_emitter_with_rng(
    max_particles: usize,
    config: EmitterConfig,
    texture: TextureHandle,
    driver: SharedDriver,
    rng: StdRng,
) -> EffectResult<ExplosionEmitterData> {
    config.validate()?;

    let particles = (0..max_particles)
        .map(|i| create_particle(i as f32 * kinematics::DEPTH_STEP, config.tick_interval_ms))
        .collect();

    log::debug!(
        "[ExplosionEmitter] Created with {} particles, texture {}",
        max_particles,
        texture.name
    );

    Ok(ExplosionEmitterData {
        particles,
        gravity: Vector3::from(config.gravity),
        location: Vector3::from(config.location),
        config,
        texture,
        driver,
        timer: None,
        elapsed_ticks: 0,
        paused: true,
        phase: EffectPhase::Idle,
        rng,
        stats: EmitterStats::default(),
    })
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Re-randomize every particle, rewind the timeline and arm the driver
pub fn start_emitter(emitter: &mut ExplosionEmitterData) -> EffectResult<()> {
    let period = period_from_ms(emitter.config.tick_interval_ms);
    let timer = emitter.driver.register(period)?;
    if let Some(previous) = emitter.timer.replace(timer) {
        emitter.driver.unregister(previous);
    }

    let ExplosionEmitterData {
        particles,
        config,
        gravity,
        rng,
        ..
    } = emitter;
    for particle in particles.iter_mut() {
        reset_particle(particle, *gravity, config.start_color, config.end_color, rng);
    }

    emitter.elapsed_ticks = 0;
    emitter.paused = false;
    emitter.phase = EffectPhase::Explosion;
    emitter.stats.runs_started += 1;

    log::info!(
        "[ExplosionEmitter] Started run {} with {} particles",
        emitter.stats.runs_started,
        emitter.particles.len()
    );
    Ok(())
}

/// Stop ticking and drawing. Calling it again changes nothing.
pub fn pause_emitter(emitter: &mut ExplosionEmitterData) {
    if let Some(timer) = emitter.timer.take() {
        emitter.driver.unregister(timer);
    }

    if !emitter.paused {
        emitter.paused = true;
        log::debug!(
            "[ExplosionEmitter] Paused at tick {} ({}ms)",
            emitter.elapsed_ticks,
            effect_clock_ms(emitter)
        );
    }
}

/// Teardown hook. The explosion holds no resources beyond its driver
/// registration, which `pause_emitter` and drop already release, so the
/// simulation state is left untouched.
pub fn stop_emitter(emitter: &mut ExplosionEmitterData) {
    log::debug!(
        "[ExplosionEmitter] Stop requested at tick {} (paused: {})",
        emitter.elapsed_ticks,
        emitter.paused
    );
}

// ============================================================================
// TIMELINE
// ============================================================================

/// Logical effect time since the last start
pub fn effect_clock_ms(emitter: &ExplosionEmitterData) -> f32 {
    clock_at(emitter, emitter.elapsed_ticks)
}

fn clock_at(emitter: &ExplosionEmitterData, ticks: u32) -> f32 {
    ticks as f32 * emitter.config.tick_interval_ms
}

/// True when `threshold` lies in `(previous, current]`
pub fn crossed_threshold(previous_ms: f32, current_ms: f32, threshold_ms: f32) -> bool {
    previous_ms < threshold_ms && threshold_ms <= current_ms
}

/// Advance the effect by one tick. No-op while paused.
///
/// The tick that reaches the end of the fade-out still updates every
/// particle and then pauses the emitter.
pub fn step_emitter(emitter: &mut ExplosionEmitterData) {
    if emitter.paused {
        return;
    }

    // The first tick of a run counts as crossing from before time zero,
    // so a zero-length burst turns to smoke immediately.
    let previous_ms = if emitter.elapsed_ticks == 0 {
        f32::NEG_INFINITY
    } else {
        effect_clock_ms(emitter)
    };
    emitter.elapsed_ticks += 1;
    let clock_ms = effect_clock_ms(emitter);

    let finished = clock_ms >= emitter.config.total_duration_ms();
    let transition = emitter.phase == EffectPhase::Explosion
        && crossed_threshold(previous_ms, clock_ms, emitter.config.explosion_duration_ms);

    let increase = Vector2::from(kinematics::SIZE_INCREASE);
    let shift = Vector3::from(kinematics::SIZE_INCREASE_SHIFT);
    let smoke_color = emitter.config.smoke_color;
    let blend_mode = emitter.config.blend_mode;

    for particle in emitter.particles.iter_mut() {
        if transition && apply_phase_transition(particle, smoke_color) {
            emitter.stats.phase_transitions += 1;
        }
        grow_particle(particle, increase, shift);
        integrate_particle(particle, clock_ms, blend_mode);
    }
    emitter.stats.ticks_stepped += 1;

    if transition {
        emitter.phase = EffectPhase::Smoke;
        log::debug!("[ExplosionEmitter] Smoke phase from {}ms", clock_ms);
    }

    if finished {
        emitter.phase = EffectPhase::Finished;
        log::info!(
            "[ExplosionEmitter] Finished after {} ticks ({}ms)",
            emitter.elapsed_ticks,
            clock_ms
        );
        pause_emitter(emitter);
    }
}

/// Run every tick the driver reports as due. Returns the ticks stepped.
pub fn pump_emitter(emitter: &mut ExplosionEmitterData) -> u32 {
    let Some(timer) = emitter.timer else {
        return 0;
    };

    let due = emitter.driver.take_due_ticks(timer);
    let mut stepped = 0;
    for _ in 0..due {
        if emitter.paused {
            break;
        }
        step_emitter(emitter);
        stepped += 1;
    }
    stepped
}

// ============================================================================
// RENDERING
// ============================================================================

/// Submit every particle, in pool order, under the emitter transform.
/// No depth sorting; nothing is drawn while paused.
pub fn draw_emitter<R: QuadRenderer + ?Sized>(emitter: &ExplosionEmitterData, renderer: &mut R) {
    if emitter.paused {
        return;
    }

    renderer.set_alpha_blending(true);
    renderer.push_transform(emitter.location, emitter.config.scale);
    for particle in &emitter.particles {
        draw_particle(particle, renderer, &emitter.texture);
    }
    renderer.pop_transform();
    renderer.set_alpha_blending(false);
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn effect_phase(emitter: &ExplosionEmitterData) -> EffectPhase {
    emitter.phase
}

pub fn is_paused(emitter: &ExplosionEmitterData) -> bool {
    emitter.paused
}

pub fn particle_count(emitter: &ExplosionEmitterData) -> usize {
    emitter.particles.len()
}

pub fn emitter_stats(emitter: &ExplosionEmitterData) -> EmitterStats {
    emitter.stats
}

impl Drop for ExplosionEmitterData {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.driver.unregister(timer);
        }
    }
}
