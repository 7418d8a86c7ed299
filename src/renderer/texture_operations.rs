//! Texture Operations - loading and caching of particle sprites

use super::texture_data::{TextureAsset, TextureCache, TextureHandle};
use crate::constants::defaults;
use crate::error::{EffectResult, ErrorContext};
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;

lazy_static::lazy_static! {
    static ref GLOBAL_TEXTURE_CACHE: TextureCache = TextureCache::default();
}

/// Create an empty texture cache
pub fn create_texture_cache() -> TextureCache {
    TextureCache::default()
}

/// Process-wide cache for hosts that do not manage their own
pub fn global_texture_cache() -> &'static TextureCache {
    &GLOBAL_TEXTURE_CACHE
}

/// Decode an image file into a texture handle
pub fn load_texture(path: impl AsRef<Path>) -> EffectResult<TextureHandle> {
    let path = path.as_ref();
    let image = image::open(path).with_path(path)?;
    let handle = texture_from_image(path.display().to_string(), &image);

    log::info!(
        "[Texture] Loaded {} ({}x{})",
        handle.name,
        handle.image.width(),
        handle.image.height()
    );
    Ok(handle)
}

/// Wrap an already decoded image
pub fn texture_from_image(name: impl Into<String>, image: &DynamicImage) -> TextureHandle {
    Arc::new(TextureAsset {
        name: name.into(),
        image: image.to_rgba8(),
    })
}

/// Return the cached texture for `path`, loading it on first use
pub fn get_or_load_texture(cache: &TextureCache, path: impl AsRef<Path>) -> EffectResult<TextureHandle> {
    let path = path.as_ref();
    let key = path.display().to_string();

    if let Some(handle) = cache.entries.read().get(&key) {
        log::debug!("[Texture] Cache hit for {}", key);
        return Ok(Arc::clone(handle));
    }

    // Decode outside the lock; if another caller won the race keep theirs
    let loaded = load_texture(path)?;
    let mut entries = cache.entries.write();
    let handle = entries.entry(key).or_insert(loaded);
    Ok(Arc::clone(handle))
}

/// The bundled explosion sprite, loaded through `cache`
pub fn default_texture(cache: &TextureCache) -> EffectResult<TextureHandle> {
    get_or_load_texture(cache, defaults::TEXTURE_PATH)
}

/// Number of distinct textures held by the cache
pub fn cached_texture_count(cache: &TextureCache) -> usize {
    cache.entries.read().len()
}

/// Drop cache entries nobody else holds any more
pub fn evict_unused_textures(cache: &TextureCache) -> usize {
    let mut entries = cache.entries.write();
    let before = entries.len();
    entries.retain(|_, handle| Arc::strong_count(handle) > 1);
    let evicted = before - entries.len();
    if evicted > 0 {
        log::debug!("[Texture] Evicted {} unused textures", evicted);
    }
    evicted
}
