//! The app's current location.
//!
//! Natively the location lives in a [`MemoryHistory`]; in the browser it is
//! `window.location` and pages are pushed with `history.pushState`, so the
//! `page` parameter survives reloads and shows up in the address bar.
//! Browser back/forward fire `popstate`, which only wakes egui through the
//! listener registered in [`Location::browser`].

use roster_business::{MemoryHistory, Navigator};
use roster_states::State;

pub struct Location {
    navigator: Box<dyn Navigator>,
}

impl Location {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self {
            navigator: Box::new(navigator),
        }
    }

    /// Starts at `initial`, e.g. `/users?page=3`.
    pub fn memory(initial: &str) -> Self {
        Self::new(MemoryHistory::new(initial))
    }

    /// The browser location. `egui_ctx` is repainted whenever the user
    /// moves through the browser history.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(egui_ctx: &egui::Context) -> Self {
        Self::new(BrowserHistory::listen(egui_ctx.clone()))
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> String {
        self.navigator.current_query()
    }

    pub fn push(&mut self, url: &str) {
        self.navigator.push(url);
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.navigator.can_go_forward()
    }

    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }

    pub fn forward(&mut self) -> bool {
        self.navigator.forward()
    }
}

impl State for Location {}

#[cfg(target_arch = "wasm32")]
struct BrowserHistory {
    on_popstate: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
    fn listen(egui_ctx: egui::Context) -> Self {
        use wasm_bindgen::JsCast as _;

        let Some(window) = web_sys::window() else {
            log::warn!("no window, back/forward will not repaint");
            return Self { on_popstate: None };
        };
        let on_popstate = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            egui_ctx.request_repaint();
        });
        if let Err(err) = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for popstate: {err:?}");
            return Self { on_popstate: None };
        }
        Self {
            on_popstate: Some(on_popstate),
        }
    }

    fn history() -> Option<web_sys::History> {
        web_sys::window().and_then(|window| window.history().ok())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for BrowserHistory {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast as _;

        if let (Some(window), Some(on_popstate)) = (web_sys::window(), self.on_popstate.take()) {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserHistory {
    fn current_query(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_owned())
            .unwrap_or_default()
    }

    fn push(&mut self, url: &str) {
        let Some(history) = Self::history() else {
            log::warn!("browser history unavailable, cannot navigate to {url}");
            return;
        };
        if let Err(err) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("pushState({url}) failed: {err:?}");
        }
    }

    // The browser does not expose the position within its history.
    fn can_go_back(&self) -> bool {
        true
    }

    fn can_go_forward(&self) -> bool {
        true
    }

    fn back(&mut self) -> bool {
        Self::history().is_some_and(|history| history.back().is_ok())
    }

    fn forward(&mut self) -> bool {
        Self::history().is_some_and(|history| history.forward().is_ok())
    }
}
