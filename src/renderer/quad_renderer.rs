//! Quad Renderer - the draw interface particles render through
//!
//! The backend only needs a translate + uniform-scale transform stack, an
//! alpha-blending switch and one textured quad primitive. The quad is drawn
//! at the local origin and extends along +x/+y by `size`.

use super::texture_data::TextureHandle;
use crate::color::Color;
use cgmath::{Vector2, Vector3};

/// Backend that turns draw calls into pixels (or into something that will)
pub trait QuadRenderer {
    /// Push `translation` then uniform `scale` on top of the current transform
    fn push_transform(&mut self, translation: Vector3<f32>, scale: f32);

    /// Restore the transform active before the matching push
    fn pop_transform(&mut self);

    /// Enable or disable alpha blending for subsequent quads
    fn set_alpha_blending(&mut self, enabled: bool);

    /// Draw one textured, tinted quad at the local origin
    fn draw_quad(&mut self, texture: &TextureHandle, size: Vector2<f32>, tint: Color);
}

/// One call received by a `RecordingRenderer`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PushTransform { translation: [f32; 3], scale: f32 },
    PopTransform,
    AlphaBlending(bool),
    DrawQuad {
        texture: String,
        size: [f32; 2],
        tint: Color,
    },
}

/// Renderer that only records what it was asked to do.
/// Handy for headless hosts, debugging overlays and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quad_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawQuad { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl QuadRenderer for RecordingRenderer {
    fn push_transform(&mut self, translation: Vector3<f32>, scale: f32) {
        self.commands.push(DrawCommand::PushTransform {
            translation: translation.into(),
            scale,
        });
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
    }

    fn set_alpha_blending(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::AlphaBlending(enabled));
    }

    fn draw_quad(&mut self, texture: &TextureHandle, size: Vector2<f32>, tint: Color) {
        self.commands.push(DrawCommand::DrawQuad {
            texture: texture.name.clone(),
            size: size.into(),
            tint,
        });
    }
}
