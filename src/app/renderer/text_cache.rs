//! Rasterized text cache
//!
//! Rasterizing a string is expensive, so each (font, text) pair is rendered
//! once in white and reused while it keeps being drawn. Color is applied at
//! draw time through the texture tint.

use indexmap::{Equivalent, IndexMap};
use tracing::{debug, trace};

use super::backend::{FontHandle, PresentationBackend};
use super::texture::{Font, Texture};
use crate::app::geometry::WHITE;
use crate::error::Result;

/// Frames an entry may go unused before it is destroyed
pub const DEFAULT_MAX_AGE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextKey {
    font: FontHandle,
    text: String,
}

/// Borrowed lookup key; hashes exactly like [`TextKey`]
#[derive(Hash)]
struct TextKeyRef<'a> {
    font: FontHandle,
    text: &'a str,
}

impl Equivalent<TextKey> for TextKeyRef<'_> {
    fn equivalent(&self, key: &TextKey) -> bool {
        self.font == key.font && self.text == key.text
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    texture: Texture,
    /// Frames since the entry was last resolved
    age: u32,
}

/// Counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Age-based cache of rasterized strings
#[derive(Debug)]
pub struct TextCache {
    entries: IndexMap<TextKey, Entry>,
    max_age: u32,
    stats: CacheStats,
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

impl TextCache {
    pub fn new(max_age: u32) -> Self {
        Self {
            entries: IndexMap::new(),
            max_age,
            stats: CacheStats::default(),
        }
    }

    /// Texture for `text` in `font`, rasterizing it on a miss
    ///
    /// Any hit resets the entry's age so it survives the next ticks.
    pub fn resolve<B>(&mut self, backend: &mut B, font: &Font, text: &str) -> Result<Texture>
    where
        B: PresentationBackend + ?Sized,
    {
        let lookup = TextKeyRef {
            font: font.handle,
            text,
        };

        if let Some(entry) = self.entries.get_mut(&lookup) {
            entry.age = 0;
            self.stats.hits += 1;
            return Ok(entry.texture);
        }

        let texture = backend.rasterize_text(font, text, WHITE)?;
        trace!(
            font = font.handle.0,
            text,
            width = texture.width,
            height = texture.height,
            "Rasterized text"
        );

        self.stats.misses += 1;
        self.entries.insert(
            TextKey {
                font: font.handle,
                text: text.to_owned(),
            },
            Entry { texture, age: 0 },
        );

        Ok(texture)
    }

    /// Age every entry by one frame and destroy the ones past `max_age`
    ///
    /// Returns the number of evicted entries.
    pub fn tick<B>(&mut self, backend: &mut B) -> usize
    where
        B: PresentationBackend + ?Sized,
    {
        let max_age = self.max_age;
        let before = self.entries.len();

        self.entries.retain(|_, entry| {
            entry.age += 1;
            if entry.age > max_age {
                backend.destroy_texture(entry.texture.handle);
                false
            } else {
                true
            }
        });

        let evicted = before - self.entries.len();
        if evicted > 0 {
            self.stats.evictions += evicted as u64;
            debug!(evicted, remaining = self.entries.len(), "Evicted cached text");
        }

        evicted
    }

    /// Destroy every cached texture
    pub fn clear<B>(&mut self, backend: &mut B)
    where
        B: PresentationBackend + ?Sized,
    {
        for (_, entry) in self.entries.drain(..) {
            backend.destroy_texture(entry.texture.handle);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, font: &Font, text: &str) -> bool {
        self.entries.contains_key(&TextKeyRef {
            font: font.handle,
            text,
        })
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::renderer::recording::RecordingBackend;

    fn setup() -> (RecordingBackend, Font) {
        let mut backend = RecordingBackend::new().with_font("font.ttf");
        let font = backend
            .load_font(std::path::Path::new("font.ttf"), 16)
            .unwrap();
        (backend, font)
    }

    #[test]
    fn test_text_drawn_every_frame_rasterizes_once() {
        let (mut backend, font) = setup();
        let mut cache = TextCache::default();

        let first = cache.resolve(&mut backend, &font, "Score").unwrap();
        cache.tick(&mut backend);

        for _ in 0..10 {
            let again = cache.resolve(&mut backend, &font, "Score").unwrap();
            assert_eq!(again, first);
            cache.tick(&mut backend);
        }

        assert_eq!(backend.rasterize_count(), 1);
        assert_eq!(backend.destroy_count(), 0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 10);
    }

    #[test]
    fn test_unused_entry_evicted_on_third_tick() {
        let (mut backend, font) = setup();
        let mut cache = TextCache::new(2);

        cache.resolve(&mut backend, &font, "Hello").unwrap();

        assert_eq!(cache.tick(&mut backend), 0);
        assert_eq!(cache.tick(&mut backend), 0);
        assert!(cache.contains(&font, "Hello"));

        assert_eq!(cache.tick(&mut backend), 1);
        assert!(!cache.contains(&font, "Hello"));
        assert_eq!(backend.destroy_count(), 1);

        cache.tick(&mut backend);
        assert_eq!(backend.destroy_count(), 1);
    }

    #[test]
    fn test_hit_resets_age() {
        let (mut backend, font) = setup();
        let mut cache = TextCache::new(2);

        cache.resolve(&mut backend, &font, "Hello").unwrap();
        cache.tick(&mut backend);
        cache.tick(&mut backend);
        cache.resolve(&mut backend, &font, "Hello").unwrap();
        cache.tick(&mut backend);
        cache.tick(&mut backend);

        assert!(cache.contains(&font, "Hello"));
        assert_eq!(backend.rasterize_count(), 1);
    }

    #[test]
    fn test_fonts_are_part_of_the_key() {
        let mut backend = RecordingBackend::new()
            .with_font("a.ttf")
            .with_font("b.ttf");
        let a = backend.load_font(std::path::Path::new("a.ttf"), 12).unwrap();
        let b = backend.load_font(std::path::Path::new("b.ttf"), 12).unwrap();
        let mut cache = TextCache::default();

        cache.resolve(&mut backend, &a, "same").unwrap();
        cache.resolve(&mut backend, &b, "same").unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(backend.rasterize_count(), 2);
    }

    #[test]
    fn test_rasterized_in_white() {
        let (mut backend, font) = setup();
        let mut cache = TextCache::default();

        cache.resolve(&mut backend, &font, "tint me").unwrap();

        assert!(backend.calls().iter().any(|call| matches!(
            call,
            crate::app::renderer::recording::BackendCall::RasterizeText { color, .. } if *color == WHITE
        )));
    }

    #[test]
    fn test_clear_destroys_everything() {
        let (mut backend, font) = setup();
        let mut cache = TextCache::default();

        cache.resolve(&mut backend, &font, "one").unwrap();
        cache.resolve(&mut backend, &font, "two").unwrap();
        cache.clear(&mut backend);

        assert!(cache.is_empty());
        assert_eq!(backend.destroy_count(), 2);
    }
}
