//! Provider scopes without a UI runtime.
//!
//! [`ProviderStack`] mirrors nested data providers: each `mount` opens a new,
//! empty [`SharedDataStore`] that shadows the outer ones, each `unmount`
//! discards the innermost. Access with nothing mounted fails with
//! [`LazyViewError::ContextUnavailable`].

use crate::error::{LazyViewError, LazyViewResult};
use crate::store::{SharedDataStore, Snapshot};

pub struct ProviderStack<V> {
    scopes: Vec<SharedDataStore<V>>,
}

impl<V> Default for ProviderStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ProviderStack<V> {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Open a provider scope. Returns its nesting depth (1 for the outermost).
    pub fn mount(&mut self) -> usize {
        self.scopes.push(SharedDataStore::new());
        tracing::debug!(depth = self.scopes.len(), "Data provider mounted");
        self.scopes.len()
    }

    /// Close the innermost scope, handing back its store
    pub fn unmount(&mut self) -> Option<SharedDataStore<V>> {
        let store = self.scopes.pop();
        if store.is_some() {
            tracing::debug!(depth = self.scopes.len(), "Data provider unmounted");
        }
        store
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current(&self) -> LazyViewResult<&SharedDataStore<V>> {
        self.scopes
            .last()
            .ok_or(LazyViewError::ContextUnavailable("current"))
    }

    pub fn current_mut(&mut self) -> LazyViewResult<&mut SharedDataStore<V>> {
        self.scopes
            .last_mut()
            .ok_or(LazyViewError::ContextUnavailable("current_mut"))
    }

    pub fn read(&self, key: &str) -> LazyViewResult<Option<&V>> {
        self.scopes
            .last()
            .map(|store| store.read(key))
            .ok_or(LazyViewError::ContextUnavailable("read"))
    }

    pub fn snapshot(&self) -> LazyViewResult<Snapshot<V>> {
        self.scopes
            .last()
            .map(SharedDataStore::snapshot)
            .ok_or(LazyViewError::ContextUnavailable("snapshot"))
    }
}

impl<V: Clone> ProviderStack<V> {
    pub fn write(&mut self, key: impl Into<String>, value: V) -> LazyViewResult<Option<V>> {
        let store = self
            .scopes
            .last_mut()
            .ok_or(LazyViewError::ContextUnavailable("write"))?;
        Ok(store.write(key, value))
    }
}
