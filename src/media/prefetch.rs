// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache backing the look-ahead preload.
//!
//! Entries are keyed by their source string and evicted least recently used
//! first, under two limits: a pixel byte budget and an entry count.

use crate::config::{
    DEFAULT_PREFETCH_CACHE_BYTES, DEFAULT_PREFETCH_MAX_IMAGES, MAX_PREFETCH_MAX_IMAGES,
    MIN_PREFETCH_MAX_IMAGES,
};
use crate::media::LoadedImage;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Limits of a [`PrefetchCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub bytes: usize,
    pub images: NonZeroUsize,
}

impl Budget {
    /// The image count is clamped to the supported range.
    #[must_use]
    pub fn new(bytes: usize, images: usize) -> Self {
        let images = images.clamp(MIN_PREFETCH_MAX_IMAGES, MAX_PREFETCH_MAX_IMAGES);
        Self {
            bytes,
            images: NonZeroUsize::new(images).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Largest single image worth keeping.
    fn max_entry(self) -> usize {
        self.bytes / 2
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_PREFETCH_CACHE_BYTES, DEFAULT_PREFETCH_MAX_IMAGES)
    }
}

pub struct PrefetchCache {
    entries: LruCache<String, LoadedImage>,
    budget: Budget,
    used_bytes: usize,
}

impl Default for PrefetchCache {
    fn default() -> Self {
        Self::new(Budget::default())
    }
}

impl PrefetchCache {
    #[must_use]
    pub fn new(budget: Budget) -> Self {
        Self {
            entries: LruCache::new(budget.images),
            budget,
            used_bytes: 0,
        }
    }

    /// Stores `image` under `src`, replacing any previous entry.
    ///
    /// Returns `false` when the image alone would take more than half the
    /// byte budget; such images are never cached.
    pub fn insert(&mut self, src: String, image: LoadedImage) -> bool {
        let size = image.size_bytes();
        if size > self.budget.max_entry() {
            log::debug!("{src} is too large to prefetch ({size} bytes)");
            return false;
        }

        if let Some(previous) = self.entries.pop(&src) {
            self.release(&previous);
        }
        while self.used_bytes + size > self.budget.bytes {
            match self.entries.pop_lru() {
                Some((_, evicted)) => self.release(&evicted),
                None => break,
            }
        }
        if let Some((_, evicted)) = self.entries.push(src, image) {
            self.release(&evicted);
        }
        self.used_bytes += size;
        true
    }

    /// Returns a copy of the cached image and marks it recently used.
    pub fn get(&mut self, src: &str) -> Option<LoadedImage> {
        self.entries.get(src).cloned()
    }

    /// Lookup that leaves the recency order alone.
    #[must_use]
    pub fn contains(&self, src: &str) -> bool {
        self.entries.contains(src)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    fn release(&mut self, image: &LoadedImage) {
        self.used_bytes = self.used_bytes.saturating_sub(image.size_bytes());
    }
}

impl std::fmt::Debug for PrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefetchCache")
            .field("len", &self.entries.len())
            .field("used_bytes", &self.used_bytes)
            .field("budget", &self.budget)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: u32) -> LoadedImage {
        LoadedImage::from_rgba(side, side, vec![0; (side * side * 4) as usize])
    }

    #[test]
    fn stores_and_returns_images() {
        let mut cache = PrefetchCache::default();
        assert!(cache.insert("a.png".into(), square(100)));

        assert_eq!(cache.get("a.png").map(|image| image.width), Some(100));
        assert!(cache.get("b.png").is_none());
        assert_eq!(cache.used_bytes(), 100 * 100 * 4);
    }

    #[test]
    fn byte_budget_evicts_oldest_first() {
        // 10_000 bytes per image
        let mut cache = PrefetchCache::new(Budget::new(100_000, 64));
        for i in 0..15 {
            cache.insert(format!("photo-{i}.png"), square(50));
        }

        assert_eq!(cache.len(), 10);
        assert!(cache.used_bytes() <= 100_000);
        assert!(!cache.contains("photo-0.png"));
        assert!(cache.contains("photo-14.png"));
    }

    #[test]
    fn recent_use_protects_from_eviction() {
        let mut cache = PrefetchCache::new(Budget::new(usize::MAX / 2, 2));
        cache.insert("a.png".into(), square(10));
        cache.insert("b.png".into(), square(10));
        let _ = cache.get("a.png");
        cache.insert("c.png".into(), square(10));

        assert!(cache.contains("a.png"));
        assert!(!cache.contains("b.png"));
        assert_eq!(cache.used_bytes(), 2 * 400);
    }

    #[test]
    fn oversized_images_are_refused() {
        let mut cache = PrefetchCache::new(Budget::new(1_000, 8));
        assert!(!cache.insert("big.png".into(), square(20)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_a_source_replaces_it() {
        let mut cache = PrefetchCache::default();
        cache.insert("a.png".into(), square(10));
        cache.insert("a.png".into(), square(20));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.used_bytes(), 20 * 20 * 4);
    }

    #[test]
    fn image_count_is_clamped() {
        assert_eq!(Budget::new(0, 0).images.get(), MIN_PREFETCH_MAX_IMAGES);
        assert_eq!(Budget::new(0, 10_000).images.get(), MAX_PREFETCH_MAX_IMAGES);
    }
}
