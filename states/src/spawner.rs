//! Platform-abstracted task spawning.
//!
//! On native targets fetches run on a tokio runtime handle. On wasm32 they
//! are handed to the browser's event loop with
//! `wasm_bindgen_futures::spawn_local`, which does not require `Send`.

use std::future::Future;

#[derive(Debug, Clone)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
}

impl Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_handle(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Spawner for the browser's event loop.
    #[cfg(target_arch = "wasm32")]
    pub fn local() -> Self {
        Self {}
    }

    /// Spawner for the runtime the caller is currently inside of.
    ///
    /// Returns `None` on native targets when called outside a tokio runtime.
    pub fn try_current() -> Option<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            tokio::runtime::Handle::try_current()
                .ok()
                .map(Self::from_handle)
        }

        #[cfg(target_arch = "wasm32")]
        {
            Some(Self {})
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(future));
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}
