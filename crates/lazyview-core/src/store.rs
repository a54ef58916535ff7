//! Shared key/value data store.
//!
//! One part of a component tree publishes values under string keys, another
//! part reads them. Every write swaps in a fresh shallow copy of the map, so a
//! [`Snapshot`] taken earlier never changes underneath its holder, and every
//! registered observer is told about the write.
//!
//! ## Usage
//!
//! ```
//! use lazyview_core::SharedDataStore;
//!
//! let mut store = SharedDataStore::<i32>::new();
//! store.subscribe(|change| println!("{} changed", change.key));
//! store.write("a", 1);
//! assert_eq!(store.read("a"), Some(&1));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Immutable view of the whole store at one point in time
pub type Snapshot<V> = Rc<HashMap<String, V>>;

/// Handle returned by [`SharedDataStore::subscribe`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

/// Notification delivered to observers after a write
#[derive(Debug)]
pub struct StoreChange<'a, V> {
    pub key: &'a str,
    /// Value the key held before this write, if any
    pub previous: Option<&'a V>,
    /// Store contents after this write
    pub snapshot: &'a Snapshot<V>,
}

impl<V> StoreChange<'_, V> {
    /// The value just written
    pub fn value(&self) -> Option<&V> {
        self.snapshot.get(self.key)
    }
}

type Observer<V> = Box<dyn FnMut(&StoreChange<'_, V>)>;

/// Key/value store with copy-on-write snapshots and write observers
pub struct SharedDataStore<V> {
    entries: Snapshot<V>,
    observers: Vec<(SubscriptionId, Observer<V>)>,
    next_subscription: u64,
    writes: u64,
}

impl<V> Default for SharedDataStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for SharedDataStore<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDataStore")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .field("writes", &self.writes)
            .finish()
    }
}

impl<V> SharedDataStore<V> {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(HashMap::new()),
            observers: Vec::new(),
            next_subscription: 0,
            writes: 0,
        }
    }

    /// Current value for `key`, or `None` if it was never written
    pub fn read(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The full current mapping
    pub fn snapshot(&self) -> Snapshot<V> {
        Rc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Register `observer` to run after every write
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange<'_, V>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<V: Clone> SharedDataStore<V> {
    /// Insert or replace `key`, returning the previous value.
    ///
    /// Other keys are untouched. Observers run once per call, even when the
    /// new value equals the old one.
    pub fn write(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();

        let mut next = HashMap::clone(&self.entries);
        let previous = next.insert(key.clone(), value);
        self.entries = Rc::new(next);
        self.writes += 1;

        tracing::trace!(
            key = %key,
            replaced = previous.is_some(),
            entries = self.entries.len(),
            "Shared data write"
        );

        let change = StoreChange {
            key: &key,
            previous: previous.as_ref(),
            snapshot: &self.entries,
        };
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }

        previous
    }
}
