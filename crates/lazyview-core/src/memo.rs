//! Memoized rendering.
//!
//! [`RenderMemo`] keeps the last rendered output together with a structural
//! hash of the inputs that produced it. Rendering again with equal inputs hands
//! back the cached output without running the render closure.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Single-slot render cache keyed by input hash
#[derive(Debug)]
pub struct RenderMemo<O> {
    last: Option<(u64, O)>,
    renders: u64,
}

impl<O> Default for RenderMemo<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> RenderMemo<O> {
    pub fn new() -> Self {
        Self {
            last: None,
            renders: 0,
        }
    }

    /// Return the cached output for `key`, rendering only if the inputs changed
    pub fn get_or_render<K, F>(&mut self, key: &K, render: F) -> &O
    where
        K: Hash + ?Sized,
        F: FnOnce() -> O,
    {
        let hash = hash_key(key);
        if self.last.as_ref().map(|(h, _)| *h) != Some(hash) {
            self.renders += 1;
            self.last = None;
        }

        let (_, output) = self.last.get_or_insert_with(|| (hash, render()));
        output
    }

    /// Number of render passes that actually ran
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn cached(&self) -> Option<&O> {
        self.last.as_ref().map(|(_, o)| o)
    }

    /// Drop the cached output so the next call renders unconditionally
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
