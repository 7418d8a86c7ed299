//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use cgmath::{Point3, Vector3};

/// Viewer the particle quads are turned towards
#[derive(Debug, Clone, Copy)]
pub struct CameraData {
    /// Camera position in world space
    pub position: Point3<f32>,

    /// Yaw rotation (radians, around Y axis)
    pub yaw_radians: f32,

    /// Pitch rotation (radians, around X axis)
    pub pitch_radians: f32,
}

/// Orthonormal screen-plane axes used to expand a quad centre into corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardBasis {
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            yaw_radians: 0.0,
            pitch_radians: 0.0,
        }
    }
}
