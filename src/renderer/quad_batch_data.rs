//! Quad Batch Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in quad_batch_operations.rs

use super::texture_data::TextureHandle;
use cgmath::Matrix4;

/// One flattened quad, ready for instancing or billboard expansion
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadInstance {
    /// World-space lower-left anchor of the quad
    pub anchor: [f32; 3],
    /// World-space extent along the camera right/up axes
    pub size: [f32; 2],
    pub tint: [f32; 4],
}

/// Camera-facing corner vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub tint: [f32; 4],
}

/// Consecutive instances sharing one texture and blend state
#[derive(Debug, Clone)]
pub struct QuadSpan {
    pub texture: TextureHandle,
    pub blended: bool,
    pub first: usize,
    pub count: usize,
}

/// Entry of the transform stack
#[derive(Debug, Clone, Copy)]
pub struct TransformFrame {
    pub matrix: Matrix4<f32>,
    /// Accumulated uniform scale, kept separately so sizes need no decomposition
    pub scale: f32,
}

/// CPU-side batch of camera-facing quads for one frame
#[derive(Debug)]
pub struct QuadBatchData {
    pub transform_stack: Vec<TransformFrame>,
    pub blending: bool,
    pub instances: Vec<QuadInstance>,
    pub spans: Vec<QuadSpan>,
}

/// Vertex and index buffers of an uploaded batch
#[cfg(feature = "gpu")]
#[derive(Debug)]
pub struct GpuQuadBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}
