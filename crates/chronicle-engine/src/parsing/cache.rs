use std::collections::HashMap;
use std::hash::Hash;

use super::{SegmentOptions, blocks::ContentBlock, segment_with};

/// Memoizes segmentation per caller-chosen key.
///
/// A key is re-segmented whenever its text changes. Callers always get their
/// own copy of the blocks.
#[derive(Debug)]
pub struct ParseCache<K> {
    options: SegmentOptions,
    entries: HashMap<K, CachedParse>,
}

#[derive(Debug)]
struct CachedParse {
    source: String,
    blocks: Vec<ContentBlock>,
}

impl<K: Eq + Hash> ParseCache<K> {
    pub fn new(options: SegmentOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
        }
    }

    pub fn segment(&mut self, key: K, text: &str) -> Vec<ContentBlock> {
        if let Some(cached) = self.entries.get(&key)
            && cached.source == text
        {
            return cached.blocks.clone();
        }

        let blocks = segment_with(text, &self.options);
        self.entries.insert(
            key,
            CachedParse {
                source: text.to_string(),
                blocks: blocks.clone(),
            },
        );
        blocks
    }

    /// Drops the entry for `key`, returning whether one existed.
    pub fn invalidate(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash> Default for ParseCache<K> {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_text_returns_equal_blocks() {
        let mut cache = ParseCache::default();
        let first = cache.segment(1u64, "# A\ntext");
        let second = cache.segment(1u64, "# A\ntext");
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn changed_text_is_segmented_again() {
        let mut cache = ParseCache::default();
        cache.segment("doc", "old");
        let blocks = cache.segment("doc", "new");
        assert_eq!(
            blocks,
            vec![ContentBlock::Text {
                content: "new".into()
            }]
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn returned_blocks_are_independent_copies() {
        let mut cache = ParseCache::default();
        let mut blocks = cache.segment(7u32, "text");
        blocks.clear();
        assert_eq!(cache.segment(7u32, "text").len(), 1);
    }

    #[test]
    fn invalidate_removes_entry() {
        let mut cache = ParseCache::default();
        cache.segment('k', "x");
        assert!(cache.invalidate(&'k'));
        assert!(!cache.invalidate(&'k'));
        assert!(cache.is_empty());
    }
}
