//! Particle Operations - Pure DOP Functions
//!
//! Reset, fixed-step integration, the explosion -> smoke transition and
//! draw submission for a single particle. The owning emitter decides when
//! each of these runs; a particle never looks at the effect clock itself.

use super::particle_data::{ParticleData, ParticlePhase};
use crate::color::{default_end_color, default_start_color, lerp_color, Color};
use crate::config::BlendMode;
use crate::constants::{blending, kinematics, smoke};
use crate::renderer::{QuadRenderer, TextureHandle};
use cgmath::{Point3, Vector2, Vector3};
use rand::Rng;

/// Create a particle at `depth` along z. Random state is assigned by `reset_particle`.
pub fn create_particle(depth: f32, animation_time_ms: f32) -> ParticleData {
    ParticleData {
        position: Point3::new(0.0, 0.0, depth),
        velocity: Vector3::new(0.0, 0.0, 0.0),
        gravity: Vector3::new(0.0, 0.0, 0.0),
        size: Vector2::from(kinematics::BASE_SIZE),
        current_color: default_start_color(),
        blend_origin: default_start_color(),
        target_color: default_end_color(),
        color_blend: 0.0,
        color_blend_rate: 0.0,
        age: 0.0,
        animation_time_ms,
        phase: ParticlePhase::Explosion,
    }
}

/// Re-randomize a particle for a new run.
///
/// Depth (`position.z`) assigned at construction is kept.
pub fn reset_particle<R: Rng + ?Sized>(
    particle: &mut ParticleData,
    gravity: Vector3<f32>,
    start_color: Color,
    end_color: Color,
    rng: &mut R,
) {
    let extent = kinematics::SPAWN_EXTENT;

    particle.velocity = Vector3::new(
        kinematics::BURST_SPEED * rng.gen_range(-1.0f32..=1.0),
        kinematics::BURST_SPEED * rng.gen_range(-1.0f32..=1.0),
        0.0,
    );
    particle.position.x = rng.gen_range(-extent..=extent);
    particle.position.y = rng.gen_range(-extent..=extent);
    particle.gravity = gravity;
    particle.size = Vector2::from(kinematics::BASE_SIZE);
    particle.current_color = start_color;
    particle.blend_origin = start_color;
    particle.target_color = end_color;
    particle.color_blend = 0.0;
    particle.color_blend_rate = rng.gen_range(blending::MIN_BLEND_RATE..=blending::MAX_BLEND_RATE);
    particle.age = 0.0;
    particle.phase = ParticlePhase::Explosion;
}

/// Interpolation parameter actually used for the tint
pub fn blend_factor(color_blend: f32, mode: BlendMode) -> f32 {
    match mode {
        BlendMode::Clamped => color_blend.clamp(0.0, 1.0),
        BlendMode::Extrapolate => color_blend,
    }
}

/// Advance the particle to effect time `elapsed_ms`.
///
/// One fixed step covers `animation_time_ms`; time never runs backwards.
pub fn integrate_particle(particle: &mut ParticleData, elapsed_ms: f32, mode: BlendMode) {
    let steps = if particle.animation_time_ms > 0.0 {
        ((elapsed_ms - particle.age) / particle.animation_time_ms).max(0.0)
    } else {
        0.0
    };

    particle.velocity += particle.gravity * steps;
    particle.position += particle.velocity * steps;

    particle.color_blend += particle.color_blend_rate;
    particle.current_color = lerp_color(
        particle.blend_origin,
        particle.target_color,
        blend_factor(particle.color_blend, mode),
    );

    particle.age = particle.age.max(elapsed_ms);
}

/// Grow the quad and shift it so it stays centred on its spot
pub fn grow_particle(particle: &mut ParticleData, increase: Vector2<f32>, shift: Vector3<f32>) {
    particle.size += increase;
    particle.position += shift;
}

/// Switch the particle from the burst to the smoke puff.
///
/// Returns `false` if the particle was already smoking.
pub fn apply_phase_transition(particle: &mut ParticleData, smoke_color: Color) -> bool {
    if particle.phase == ParticlePhase::Smoke {
        return false;
    }

    particle.blend_origin = particle.current_color;
    particle.target_color = smoke_color;
    particle.color_blend_rate = smoke::BLEND_RATE;
    particle.velocity.x *= smoke::VELOCITY_X_FACTOR;
    particle.velocity.y = smoke::RISE_SPEED;
    particle.phase = ParticlePhase::Smoke;
    true
}

/// Submit the particle as one camera-facing quad
pub fn draw_particle<R: QuadRenderer + ?Sized>(
    particle: &ParticleData,
    renderer: &mut R,
    texture: &TextureHandle,
) {
    renderer.push_transform(
        Vector3::new(particle.position.x, particle.position.y, particle.position.z),
        1.0,
    );
    renderer.draw_quad(texture, particle.size, particle.current_color);
    renderer.pop_transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::default_smoke_color;
    use crate::renderer::{texture_from_image, DrawCommand, RecordingRenderer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh_particle(rng: &mut StdRng) -> ParticleData {
        let mut particle = create_particle(0.3, 10.0);
        reset_particle(
            &mut particle,
            Vector3::new(0.0, 0.0, 0.0),
            default_start_color(),
            default_end_color(),
            rng,
        );
        particle
    }

    #[test]
    fn test_reset_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let particle = fresh_particle(&mut rng);
            assert!((-1.0..=1.0).contains(&particle.position.x));
            assert!((-1.0..=1.0).contains(&particle.position.y));
            assert!((-0.55..=0.55).contains(&particle.velocity.x));
            assert!((-0.55..=0.55).contains(&particle.velocity.y));
            assert!((0.01..=0.05).contains(&particle.color_blend_rate));
            assert_eq!(particle.velocity.z, 0.0);
            assert_eq!(particle.position.z, 0.3);
            assert_eq!(particle.size, Vector2::new(0.5, 0.5));
            assert_eq!(particle.color_blend, 0.0);
            assert_eq!(particle.current_color, default_start_color());
            assert_eq!(particle.target_color, default_end_color());
        }
    }

    #[test]
    fn test_reset_restores_explosion_phase() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut particle = fresh_particle(&mut rng);
        integrate_particle(&mut particle, 10.0, BlendMode::Clamped);
        apply_phase_transition(&mut particle, default_smoke_color());

        reset_particle(
            &mut particle,
            Vector3::new(0.0, -0.1, 0.0),
            default_start_color(),
            default_end_color(),
            &mut rng,
        );
        assert_eq!(particle.phase, ParticlePhase::Explosion);
        assert_eq!(particle.age, 0.0);
        assert_eq!(particle.gravity, Vector3::new(0.0, -0.1, 0.0));
        assert_eq!(particle.blend_origin, default_start_color());
    }

    #[test]
    fn test_integrate_one_step_per_tick() {
        let mut particle = create_particle(0.0, 10.0);
        particle.velocity = Vector3::new(0.2, -0.1, 0.0);
        particle.gravity = Vector3::new(0.0, -0.05, 0.0);
        particle.color_blend_rate = 0.25;

        integrate_particle(&mut particle, 10.0, BlendMode::Clamped);
        assert!((particle.velocity.y + 0.15).abs() < 1e-6);
        assert!((particle.position.x - 0.2).abs() < 1e-6);
        assert!((particle.position.y + 0.15).abs() < 1e-6);
        assert_eq!(particle.color_blend, 0.25);
        assert_eq!(particle.age, 10.0);

        integrate_particle(&mut particle, 20.0, BlendMode::Clamped);
        assert!((particle.position.x - 0.4).abs() < 1e-6);
        assert!((particle.velocity.y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_integrate_never_runs_backwards() {
        let mut particle = create_particle(0.0, 10.0);
        particle.velocity = Vector3::new(1.0, 1.0, 0.0);
        particle.age = 50.0;

        integrate_particle(&mut particle, 40.0, BlendMode::Clamped);
        assert_eq!(particle.position, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(particle.age, 50.0);
    }

    #[test]
    fn test_blend_modes() {
        let mut clamped = create_particle(0.0, 10.0);
        clamped.blend_origin = Color::new(0.0, 0.0, 0.0, 1.0);
        clamped.target_color = Color::new(1.0, 1.0, 1.0, 0.0);
        clamped.color_blend_rate = 0.6;
        let mut extrapolated = clamped.clone();

        for tick in 1..=2 {
            integrate_particle(&mut clamped, tick as f32 * 10.0, BlendMode::Clamped);
            integrate_particle(&mut extrapolated, tick as f32 * 10.0, BlendMode::Extrapolate);
        }

        assert_eq!(clamped.current_color, Color::new(1.0, 1.0, 1.0, 0.0));
        assert!(extrapolated.current_color.r > 1.0);
        assert!(extrapolated.current_color.a < 0.0);
    }

    #[test]
    fn test_phase_transition_applies_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut particle = fresh_particle(&mut rng);
        integrate_particle(&mut particle, 10.0, BlendMode::Clamped);
        let color_before = particle.current_color;
        let vx = particle.velocity.x;

        assert!(apply_phase_transition(&mut particle, default_smoke_color()));
        assert_eq!(particle.phase, ParticlePhase::Smoke);
        assert_eq!(particle.target_color, default_smoke_color());
        assert_eq!(particle.color_blend_rate, 0.03);
        assert_eq!(particle.blend_origin, color_before);
        assert!((particle.velocity.x - vx * 0.3).abs() < 1e-6);
        assert_eq!(particle.velocity.y, 0.1);

        assert!(!apply_phase_transition(&mut particle, Color::default()));
        assert!((particle.velocity.x - vx * 0.3).abs() < 1e-6);
        assert_eq!(particle.target_color, default_smoke_color());
    }

    #[test]
    fn test_grow_is_monotonic() {
        let mut particle = create_particle(0.0, 10.0);
        let increase = Vector2::from(kinematics::BASE_SIZE);
        let shift = Vector3::new(-0.25, -0.25, 0.0);

        let before = particle.size;
        grow_particle(&mut particle, increase, shift);
        assert!(particle.size.x > before.x && particle.size.y > before.y);
        assert_eq!(particle.position, Point3::new(-0.25, -0.25, 0.0));
    }

    #[test]
    fn test_draw_submits_one_quad() {
        let texture = texture_from_image("exp", &image::DynamicImage::new_rgba8(1, 1));
        let mut particle = create_particle(0.2, 10.0);
        particle.position = Point3::new(1.0, 2.0, 0.2);
        let mut renderer = RecordingRenderer::new();

        draw_particle(&particle, &mut renderer, &texture);

        assert_eq!(
            renderer.commands,
            vec![
                DrawCommand::PushTransform {
                    translation: [1.0, 2.0, 0.2],
                    scale: 1.0
                },
                DrawCommand::DrawQuad {
                    texture: "exp".to_string(),
                    size: [0.5, 0.5],
                    tint: default_start_color(),
                },
                DrawCommand::PopTransform,
            ]
        );
    }
}
