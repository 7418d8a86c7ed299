//! Renderer Module - draw interface and CPU-side quad batching
//!
//! - quad_renderer.rs: the `QuadRenderer` backend trait and a recording backend
//! - quad_batch_*.rs: camera-facing quad batch built from draw calls
//! - texture_*.rs: shared sprite assets and their cache

pub mod quad_batch_data;
pub mod quad_batch_operations;
pub mod quad_renderer;
pub mod texture_data;
pub mod texture_operations;

pub use quad_batch_data::{QuadBatchData, QuadInstance, QuadSpan, QuadVertex, TransformFrame};
#[cfg(feature = "gpu")]
pub use quad_batch_data::GpuQuadBuffers;
pub use quad_renderer::{DrawCommand, QuadRenderer, RecordingRenderer};
pub use texture_data::{TextureAsset, TextureCache, TextureHandle};

pub use quad_batch_operations::{
    append_quad, build_billboard_vertices, clear_quad_batch, create_quad_batch, current_frame,
    pop_transform_frame, push_transform_frame, quad_indices,
};
#[cfg(feature = "gpu")]
pub use quad_batch_operations::upload_quad_batch;
pub use texture_operations::{
    cached_texture_count, create_texture_cache, default_texture, evict_unused_textures,
    get_or_load_texture, global_texture_cache, load_texture, texture_from_image,
};
