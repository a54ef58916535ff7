//! Shared data provider.
//!
//! Gives a subtree one [`SharedDataStore`] of JSON values. Components get at
//! it either implicitly through the provider, or explicitly by taking a
//! [`SharedData`] prop.
//!
//! ## Usage
//!
//! ```ignore
//! // Implicit: wrap a subtree
//! DataProvider { Gallery {} }
//!
//! // In a descendant
//! let mut data = use_shared_data();
//! data.write("selected", 3);
//!
//! // Explicit: own the store and pass it down
//! let data = use_data_store();
//! rsx! { Caption { data } }
//! ```

use dioxus::prelude::*;
use lazyview_core::{
    LazyViewError, LazyViewResult, SharedDataStore, Snapshot, StoreChange, SubscriptionId,
};
use serde_json::Value;

/// Copyable handle to a shared data store.
///
/// Reads subscribe the calling component to a version counter that every
/// write bumps, so each write re-renders the components that read the store.
/// Registering observers does not touch the counter.
#[derive(Clone, Copy, PartialEq)]
pub struct SharedData {
    store: CopyValue<SharedDataStore<Value>>,
    version: Signal<u64>,
}

impl SharedData {
    /// Current value for `key`, `None` if unset
    pub fn read(&self, key: &str) -> Option<Value> {
        let _ = self.version.read();
        self.store.read().read(key).cloned()
    }

    /// Like [`read`](Self::read) without subscribing the caller
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.store.read().read(key).cloned()
    }

    /// Insert or replace `key`, returning the previous value
    pub fn write(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let previous = self.store.write().write(key, value.into());
        *self.version.write() += 1;
        previous
    }

    /// Whole mapping at this moment
    pub fn snapshot(&self) -> Snapshot<Value> {
        let _ = self.version.read();
        self.store.read().snapshot()
    }

    /// Run `observer` after every write.
    ///
    /// Observers run while the store is borrowed; use the snapshot carried by
    /// [`StoreChange`] rather than reading this handle from inside one.
    /// Components should prefer [`use_shared_observer`], which also removes
    /// the observer on unmount.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange<'_, Value>) + 'static,
    {
        self.store.write().subscribe(observer)
    }

    /// Remove an observer. Returns false if it was not registered or the
    /// store has already been dropped.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.store.try_write() {
            Ok(mut store) => store.unsubscribe(id),
            Err(_) => false,
        }
    }

    /// Number of registered observers, 0 once the store is dropped
    pub fn observer_count(&self) -> usize {
        self.store
            .try_read()
            .map(|store| store.observer_count())
            .unwrap_or(0)
    }
}

/// Create a store owned by the calling component, for explicit passing
pub fn use_data_store() -> SharedData {
    let store = use_hook(|| CopyValue::new(SharedDataStore::<Value>::new()));
    let version = use_signal(|| 0u64);
    SharedData { store, version }
}

/// Provides a fresh, empty shared data store to its children.
///
/// Each provider instance has its own store; siblings never share one. The
/// store is dropped when the provider unmounts.
#[component]
pub fn DataProvider(children: Element) -> Element {
    let data = use_data_store();
    use_context_provider(|| {
        tracing::debug!("Data provider mounted");
        data
    });

    rsx! { {children} }
}

/// Hook to access the nearest [`DataProvider`]'s store.
///
/// Returns [`LazyViewError::ContextUnavailable`] when no provider encloses
/// the caller.
pub fn try_use_shared_data() -> LazyViewResult<SharedData> {
    try_use_context::<SharedData>().ok_or(LazyViewError::ContextUnavailable("use_shared_data"))
}

/// Hook to access the nearest [`DataProvider`]'s store.
///
/// # Panics
///
/// Panics if no provider encloses the caller. That is a wiring bug in the
/// component tree, not a data condition.
pub fn use_shared_data() -> SharedData {
    match try_use_shared_data() {
        Ok(data) => data,
        Err(err) => {
            tracing::error!("{}", err);
            panic!("{}", err);
        }
    }
}

/// Hook reading one key from the nearest provider
pub fn use_shared_value(key: &str) -> Option<Value> {
    use_shared_data().read(key)
}

/// Hook registering `observer` on the nearest provider's store.
///
/// Subscribes once on mount and unsubscribes when the calling component
/// unmounts. Later renders ignore the `observer` passed in.
pub fn use_shared_observer<F>(observer: F) -> SubscriptionId
where
    F: FnMut(&StoreChange<'_, Value>) + 'static,
{
    let mut data = use_shared_data();
    let id = use_hook(move || data.subscribe(observer));
    use_drop(move || {
        data.unsubscribe(id);
    });
    id
}
