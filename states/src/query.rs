//! Keyed query cache with "keep previous data" semantics.
//!
//! The cache itself never performs IO. A caller selects a key, asks whether
//! it needs fetching, records the start of a request with [`QueryCache::begin`]
//! and later feeds the outcome back through [`QueryCache::resolve`].
//! [`QueryClient`](crate::QueryClient) wires this to an async runtime.
//!
//! While the selected key has no data yet, [`QueryCache::view`] keeps
//! returning the data of the last key that was shown successfully, flagged
//! with `is_previous_data`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nothing to show: no data for the selected key and none to fall back on.
    Loading,
    /// The selected key (or the previous one, while loading) has data.
    Success,
    /// The last request for the selected key failed.
    Error,
}

#[derive(Debug)]
struct Entry<T> {
    data: Option<T>,
    error: Option<String>,
    fetching: bool,
    generation: u64,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            fetching: false,
            generation: 0,
        }
    }
}

/// Read-only projection of the cache for the currently selected key.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryView<'a, T> {
    pub status: QueryStatus,
    pub data: Option<&'a T>,
    pub error: Option<&'a str>,
    /// A request for the selected key is in flight.
    pub is_fetching: bool,
    /// `data` belongs to an earlier key, shown while the selected key loads.
    pub is_previous_data: bool,
}

impl<T> QueryView<'_, T> {
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }
}

#[derive(Debug)]
pub struct QueryCache<K, T> {
    entries: HashMap<K, Entry<T>>,
    selected: Option<K>,
    last_shown: Option<K>,
    next_generation: u64,
}

impl<K, T> Default for QueryCache<K, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            selected: None,
            last_shown: None,
            next_generation: 1,
        }
    }
}

impl<K, T> QueryCache<K, T>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Makes `key` the one the view reflects. Returns `true` if it changed.
    pub fn select(&mut self, key: K) -> bool {
        if self.selected.as_ref() == Some(&key) {
            return false;
        }
        if self.entries.get(&key).is_some_and(|entry| entry.data.is_some()) {
            self.last_shown = Some(key.clone());
        }
        self.selected = Some(key);
        true
    }

    /// A key needs a fetch only when it has never been requested. A key whose
    /// request failed stays failed until someone calls [`QueryCache::begin`]
    /// for it again.
    pub fn needs_fetch(&self, key: &K) -> bool {
        !self.entries.contains_key(key)
    }

    pub fn is_fetching(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.fetching)
    }

    pub fn data(&self, key: &K) -> Option<&T> {
        self.entries.get(key).and_then(|entry| entry.data.as_ref())
    }

    /// Records the start of a request for `key` and returns its generation.
    /// Any response carrying an older generation for the same key is ignored.
    pub fn begin(&mut self, key: K) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;

        let entry = self.entries.entry(key).or_default();
        entry.fetching = true;
        entry.error = None;
        entry.generation = generation;
        generation
    }

    /// Applies the outcome of request `generation` for `key`.
    ///
    /// Returns `false` when the response was superseded by a newer request.
    pub fn resolve(&mut self, key: K, generation: u64, result: Result<T, String>) -> bool {
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        if entry.generation != generation {
            return false;
        }

        entry.fetching = false;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                if self.selected.as_ref() == Some(&key) {
                    self.last_shown = Some(key);
                }
            }
            Err(message) => {
                entry.error = Some(message);
            }
        }
        true
    }

    pub fn view(&self) -> QueryView<'_, T> {
        let current = self
            .selected
            .as_ref()
            .and_then(|key| self.entries.get(key));
        let is_fetching = current.is_some_and(|entry| entry.fetching);

        if let Some(entry) = current {
            if let Some(message) = entry.error.as_deref() {
                return QueryView {
                    status: QueryStatus::Error,
                    data: None,
                    error: Some(message),
                    is_fetching,
                    is_previous_data: false,
                };
            }
            if let Some(data) = entry.data.as_ref() {
                return QueryView {
                    status: QueryStatus::Success,
                    data: Some(data),
                    error: None,
                    is_fetching,
                    is_previous_data: false,
                };
            }
        }

        let previous = self
            .last_shown
            .as_ref()
            .and_then(|key| self.entries.get(key))
            .and_then(|entry| entry.data.as_ref());

        match previous {
            Some(data) => QueryView {
                status: QueryStatus::Success,
                data: Some(data),
                error: None,
                is_fetching,
                is_previous_data: true,
            },
            None => QueryView {
                status: QueryStatus::Loading,
                data: None,
                error: None,
                is_fetching,
                is_previous_data: false,
            },
        }
    }
}
