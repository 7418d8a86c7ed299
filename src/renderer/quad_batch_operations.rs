//! Quad Batch Operations - Pure DOP Functions
//!
//! Flattens the renderer transform stack into world-space quad instances,
//! groups them into texture/blend spans and expands them into
//! camera-facing vertices.

use super::quad_batch_data::{QuadBatchData, QuadInstance, QuadSpan, QuadVertex, TransformFrame};
use super::quad_renderer::QuadRenderer;
use super::texture_data::TextureHandle;
use crate::camera::BillboardBasis;
use crate::color::Color;
use cgmath::{EuclideanSpace, Matrix4, Point3, SquareMatrix, Transform, Vector2, Vector3};
use std::sync::Arc;

fn identity_frame() -> TransformFrame {
    TransformFrame {
        matrix: Matrix4::identity(),
        scale: 1.0,
    }
}

/// Create an empty batch with room for `capacity` quads
pub fn create_quad_batch(capacity: usize) -> QuadBatchData {
    QuadBatchData {
        transform_stack: vec![identity_frame()],
        blending: false,
        instances: Vec::with_capacity(capacity),
        spans: Vec::new(),
    }
}

/// Reset the batch for the next frame, keeping its allocations
pub fn clear_quad_batch(batch: &mut QuadBatchData) {
    batch.instances.clear();
    batch.spans.clear();
    batch.transform_stack.truncate(1);
    batch.blending = false;
}

/// Transform currently applied to new quads
pub fn current_frame(batch: &QuadBatchData) -> TransformFrame {
    batch.transform_stack.last().copied().unwrap_or_else(identity_frame)
}

pub fn push_transform_frame(batch: &mut QuadBatchData, translation: Vector3<f32>, scale: f32) {
    let top = current_frame(batch);
    batch.transform_stack.push(TransformFrame {
        matrix: top.matrix * Matrix4::from_translation(translation) * Matrix4::from_scale(scale),
        scale: top.scale * scale,
    });
}

pub fn pop_transform_frame(batch: &mut QuadBatchData) {
    if batch.transform_stack.len() > 1 {
        batch.transform_stack.pop();
    } else {
        log::warn!("[QuadBatch] pop_transform without matching push ignored");
    }
}

/// Append one quad at the local origin of the current transform
pub fn append_quad(batch: &mut QuadBatchData, texture: &TextureHandle, size: Vector2<f32>, tint: Color) {
    let frame = current_frame(batch);
    let anchor = frame.matrix.transform_point(Point3::origin());

    let index = batch.instances.len();
    batch.instances.push(QuadInstance {
        anchor: anchor.into(),
        size: [size.x * frame.scale, size.y * frame.scale],
        tint: tint.to_array(),
    });

    match batch.spans.last_mut() {
        Some(span) if Arc::ptr_eq(&span.texture, texture) && span.blended == batch.blending => {
            span.count += 1;
        }
        _ => batch.spans.push(QuadSpan {
            texture: Arc::clone(texture),
            blended: batch.blending,
            first: index,
            count: 1,
        }),
    }
}

/// Expand every instance into four vertices facing the camera.
///
/// Corner order is lower-left, lower-right, upper-right, upper-left.
pub fn build_billboard_vertices(batch: &QuadBatchData, basis: &BillboardBasis) -> Vec<QuadVertex> {
    let mut vertices = Vec::with_capacity(batch.instances.len() * 4);

    for quad in &batch.instances {
        let anchor = Vector3::from(quad.anchor);
        let right = basis.right * quad.size[0];
        let up = basis.up * quad.size[1];

        let corners = [
            (anchor, [0.0, 1.0]),
            (anchor + right, [1.0, 1.0]),
            (anchor + right + up, [1.0, 0.0]),
            (anchor + up, [0.0, 0.0]),
        ];

        for (position, uv) in corners {
            vertices.push(QuadVertex {
                position: position.into(),
                uv,
                tint: quad.tint,
            });
        }
    }

    vertices
}

/// Two counter-clockwise triangles per quad
pub fn quad_indices(quad_count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quad_count * 6);
    for quad in 0..quad_count as u32 {
        let base = quad * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

/// Upload the camera-facing vertices and indices of a batch.
///
/// Returns `None` for an empty batch.
#[cfg(feature = "gpu")]
pub fn upload_quad_batch(
    device: &wgpu::Device,
    batch: &QuadBatchData,
    basis: &BillboardBasis,
) -> crate::error::EffectResult<Option<super::quad_batch_data::GpuQuadBuffers>> {
    use crate::error::EffectError;
    use wgpu::util::DeviceExt;

    if batch.instances.is_empty() {
        return Ok(None);
    }

    let max_quads = (u32::MAX / 6) as usize;
    if batch.instances.len() > max_quads {
        return Err(EffectError::GpuUpload {
            operation: "quad index buffer".to_string(),
            error: format!(
                "{} quads exceed the u32 index range (max {})",
                batch.instances.len(),
                max_quads
            ),
        });
    }

    let vertices = build_billboard_vertices(batch, basis);
    let indices = quad_indices(batch.instances.len());

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Particle Quad Vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Particle Quad Indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    log::debug!(
        "[QuadBatch] Uploaded {} quads in {} spans",
        batch.instances.len(),
        batch.spans.len()
    );

    Ok(Some(super::quad_batch_data::GpuQuadBuffers {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
    }))
}

impl QuadRenderer for QuadBatchData {
    fn push_transform(&mut self, translation: Vector3<f32>, scale: f32) {
        push_transform_frame(self, translation, scale);
    }

    fn pop_transform(&mut self) {
        pop_transform_frame(self);
    }

    fn set_alpha_blending(&mut self, enabled: bool) {
        self.blending = enabled;
    }

    fn draw_quad(&mut self, texture: &TextureHandle, size: Vector2<f32>, tint: Color) {
        append_quad(self, texture, size, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{billboard_basis, CameraData};
    use crate::renderer::texture_operations::texture_from_image;
    use image::DynamicImage;

    fn sprite(name: &str) -> TextureHandle {
        texture_from_image(name, &DynamicImage::new_rgba8(2, 2))
    }

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_nested_transforms_flatten() {
        let texture = sprite("exp");
        let mut batch = create_quad_batch(4);

        batch.push_transform(Vector3::new(1.0, 2.0, 3.0), 0.5);
        batch.push_transform(Vector3::new(2.0, 0.0, 0.0), 1.0);
        batch.draw_quad(&texture, Vector2::new(1.0, 2.0), Color::new(1.0, 0.0, 0.0, 1.0));
        batch.pop_transform();
        batch.pop_transform();

        let quad = batch.instances[0];
        assert!(approx(quad.anchor, [2.0, 2.0, 3.0]));
        assert_eq!(quad.size, [0.5, 1.0]);
        assert_eq!(quad.tint, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.transform_stack.len(), 1);
    }

    #[test]
    fn test_unbalanced_pop_keeps_identity() {
        let mut batch = create_quad_batch(0);
        batch.pop_transform();
        assert_eq!(batch.transform_stack.len(), 1);
        assert_eq!(current_frame(&batch).matrix, Matrix4::identity());
    }

    #[test]
    fn test_spans_split_on_texture_and_blending() {
        let smoke = sprite("smoke");
        let fire = sprite("fire");
        let mut batch = create_quad_batch(8);
        let size = Vector2::new(1.0, 1.0);
        let tint = Color::default();

        batch.set_alpha_blending(true);
        batch.draw_quad(&fire, size, tint);
        batch.draw_quad(&fire, size, tint);
        batch.draw_quad(&smoke, size, tint);
        batch.set_alpha_blending(false);
        batch.draw_quad(&smoke, size, tint);

        let layout: Vec<(usize, usize, bool)> = batch
            .spans
            .iter()
            .map(|s| (s.first, s.count, s.blended))
            .collect();
        assert_eq!(layout, vec![(0, 2, true), (2, 1, true), (3, 1, false)]);
    }

    #[test]
    fn test_billboard_vertices_follow_basis() {
        let texture = sprite("exp");
        let mut batch = create_quad_batch(1);
        batch.push_transform(Vector3::new(0.0, 0.0, 5.0), 1.0);
        batch.draw_quad(&texture, Vector2::new(2.0, 3.0), Color::default());

        let basis = billboard_basis(&CameraData::default());
        let vertices = build_billboard_vertices(&batch, &basis);

        assert_eq!(vertices.len(), 4);
        assert!(approx(vertices[0].position, [0.0, 0.0, 5.0]));
        assert!(approx(vertices[1].position, [0.0, 0.0, 7.0]));
        assert!(approx(vertices[2].position, [0.0, 3.0, 7.0]));
        assert!(approx(vertices[3].position, [0.0, 3.0, 5.0]));
        assert_eq!(vertices[0].uv, [0.0, 1.0]);
    }

    #[test]
    fn test_quad_indices() {
        assert!(quad_indices(0).is_empty());
        assert_eq!(quad_indices(2), vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let texture = sprite("exp");
        let mut batch = create_quad_batch(16);
        batch.push_transform(Vector3::new(1.0, 0.0, 0.0), 2.0);
        batch.set_alpha_blending(true);
        batch.draw_quad(&texture, Vector2::new(1.0, 1.0), Color::default());

        clear_quad_batch(&mut batch);
        assert!(batch.instances.is_empty());
        assert!(batch.spans.is_empty());
        assert!(!batch.blending);
        assert_eq!(batch.transform_stack.len(), 1);
        assert!(batch.instances.capacity() >= 16);
    }
}
