//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.

use super::camera_data::{BillboardBasis, CameraData};
use cgmath::{InnerSpace, Point3, Vector3};

/// Pitch stays just short of straight up/down so the basis never degenerates
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Initialize camera looking along yaw/pitch from `position`
pub fn init_camera(position: Point3<f32>, yaw: f32, pitch: f32) -> CameraData {
    CameraData {
        position,
        yaw_radians: yaw,
        pitch_radians: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
    }
}

/// Calculate forward vector from yaw and pitch
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Calculate right vector from yaw (always horizontal)
pub fn calculate_right_vector(yaw: f32) -> Vector3<f32> {
    Vector3::new(-yaw.sin(), 0.0, yaw.cos()).normalize()
}

/// Screen-aligned axes for camera-facing quads
pub fn billboard_basis(camera: &CameraData) -> BillboardBasis {
    let pitch = camera.pitch_radians.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    let forward = calculate_forward_vector(camera.yaw_radians, pitch);
    let right = calculate_right_vector(camera.yaw_radians);
    let up = right.cross(forward).normalize();

    BillboardBasis { right, up }
}
