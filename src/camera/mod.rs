/// Camera Module - Data-Oriented Programming (DOP) style
///
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data

pub mod camera_data;
pub mod camera_operations;

pub use camera_data::{BillboardBasis, CameraData};

pub use camera_operations::{
    billboard_basis, calculate_forward_vector, calculate_right_vector, init_camera,
};
