use std::collections::HashMap;
use std::sync::Arc;

use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::cursor::CursorImage;

/// GPU textures for image cursors, with LRU pruning.
///
/// Entries are keyed by the address of the shared image and hold a clone of
/// the `Arc`, so an address cannot be reused while its entry is alive.
pub struct CursorTextures {
    textures: HashMap<usize, (Arc<CursorImage>, TextureHandle)>,
    /// Tracks when each texture was last used
    last_used: HashMap<usize, u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl Default for CursorTextures {
    fn default() -> Self {
        Self::new(64)
    }
}

impl CursorTextures {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    pub fn get_or_load(&mut self, ctx: &Context, image: &Arc<CursorImage>) -> TextureId {
        let key = Arc::as_ptr(image) as usize;

        if let Some((_, handle)) = self.textures.get(&key) {
            self.last_used.insert(key, self.current_frame);
            return handle.id();
        }

        let [w, h] = image.size();
        let name = format!("cursor_{}x{}_{:x}", w, h, key);
        log::debug!("Uploading cursor texture {}", name);
        // Nearest filtering keeps the 1px outlines crisp
        let handle = ctx.load_texture(name, image.to_color_image(), TextureOptions::NEAREST);
        let id = handle.id();

        self.textures.insert(key, (image.clone(), handle));
        self.last_used.insert(key, self.current_frame);
        self.prune_cache_if_needed();

        id
    }

    fn prune_cache_if_needed(&mut self) {
        if self.textures.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<(usize, u64)> = self.last_used.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (key, _) in entries.iter().take(to_remove) {
            self.textures.remove(key);
            self.last_used.remove(key);
        }
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.last_used.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn contains(&self, image: &Arc<CursorImage>) -> bool {
        self.textures.contains_key(&(Arc::as_ptr(image) as usize))
    }
}
