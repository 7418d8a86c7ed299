//! Texture Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in texture_operations.rs

use image::RgbaImage;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Decoded sprite shared read-only by every quad that uses it
#[derive(Debug)]
pub struct TextureAsset {
    /// Path or name the asset was created from; also the cache key
    pub name: String,
    pub image: RgbaImage,
}

/// Shared handle to a loaded texture. Never duplicated per emitter.
pub type TextureHandle = Arc<TextureAsset>;

/// Loads each texture once and hands out shared handles afterwards
#[derive(Debug, Default)]
pub struct TextureCache {
    pub entries: RwLock<HashMap<String, TextureHandle>>,
}
