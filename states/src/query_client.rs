//! Runs fetches for a [`QueryCache`] and feeds their results back.
//!
//! Fetch futures are spawned on the [`Spawner`]; their outcomes travel back
//! over a `flume` channel and are applied on the UI thread by
//! [`QueryClient::sync`], once per frame. Nothing here blocks.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;

use flume::{Receiver, Sender};

use crate::{QueryCache, QueryView, Spawner, TaskHandle, TaskId};

struct Resolution<K, T> {
    key: K,
    id: TaskId,
    result: Result<T, String>,
}

pub struct QueryClient<K, T> {
    cache: QueryCache<K, T>,
    send: Sender<Resolution<K, T>>,
    recv: Receiver<Resolution<K, T>>,
    tasks: HashMap<K, TaskHandle>,
    spawner: Spawner,
}

impl<K, T> std::fmt::Debug for QueryClient<K, T>
where
    K: std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("cache", &self.cache)
            .field("in_flight", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl<K, T> QueryClient<K, T>
where
    K: Clone + Eq + Hash + Send + 'static,
    T: Send + 'static,
{
    pub fn new(spawner: Spawner) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            cache: QueryCache::new(),
            send,
            recv,
            tasks: HashMap::new(),
            spawner,
        }
    }

    pub fn view(&self) -> QueryView<'_, T> {
        self.cache.view()
    }

    pub fn selected(&self) -> Option<&K> {
        self.cache.selected()
    }

    /// Number of requests still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Selects `key` and starts `fetch` for it unless the key was requested
    /// before. Returns `true` if a request was started.
    ///
    /// Switching keys does not cancel the request of the key being left; its
    /// response is cached under its own key when it arrives.
    pub fn select_with<F, Fut, E>(&mut self, key: K, fetch: F) -> bool
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        self.cache.select(key.clone());
        if !self.cache.needs_fetch(&key) {
            return false;
        }
        self.start(key, fetch);
        true
    }

    /// Selects `key` and starts a new request for it even if it is cached or
    /// in flight. An older in-flight request for the same key is cancelled.
    pub fn refetch<F, Fut, E>(&mut self, key: K, fetch: F)
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        self.cache.select(key.clone());
        self.start(key, fetch);
    }

    fn start<F, Fut, E>(&mut self, key: K, fetch: F)
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let generation = self.cache.begin(key.clone());
        let id = TaskId::of::<T>(generation);
        let handle = TaskHandle::new(id);
        let token = handle.cancellation_token();
        if let Some(previous) = self.tasks.insert(key.clone(), handle) {
            log::debug!("query {} superseded by {id}", previous.id());
            previous.cancel();
        }

        let send = self.send.clone();
        let future = fetch(key.clone());
        log::debug!("query {id} started");

        self.spawner.spawn(async move {
            let Some(result) = token.run_until_cancelled(future).await else {
                log::debug!("query {id} cancelled");
                return;
            };
            let resolution = Resolution {
                key,
                id,
                result: result.map_err(|err| err.to_string()),
            };
            if send.send(resolution).is_err() {
                log::debug!("query {id} finished after its client was dropped");
            }
        });
    }

    /// Applies every finished request. Returns how many changed the cache.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(Resolution { key, id, result }) = self.recv.try_recv() {
            if self.tasks.get(&key).is_some_and(|handle| handle.id() == id) {
                self.tasks.remove(&key);
            }
            if let Err(message) = &result {
                log::warn!("query {id} failed: {message}");
            }
            if self.cache.resolve(key, id.generation(), result) {
                applied += 1;
            } else {
                log::debug!("query {id} result dropped as superseded");
            }
        }
        applied
    }
}

impl<K, T> Drop for QueryClient<K, T> {
    fn drop(&mut self) {
        for handle in self.tasks.values() {
            handle.cancel();
        }
    }
}
