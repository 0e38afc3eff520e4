//! Browser bindings for [`common::store`]: `window.localStorage` as the
//! key/value backend and DOM events on `window` as the change broadcast.

use common::store::{Broadcast, ClientStore, KeyValueStore, StoreEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Dispatches `cartUpdated` / `favoritesUpdated` on `window`.
pub struct WindowEvents;

impl Broadcast for WindowEvents {
    fn publish(&self, event: StoreEvent) {
        if let (Some(window), Ok(dom_event)) = (web_sys::window(), web_sys::Event::new(event.name())) {
            let _ = window.dispatch_event(&dom_event);
        }
    }
}

pub type BrowserStore = ClientStore<LocalStorage, WindowEvents>;

pub fn client_store() -> BrowserStore {
    ClientStore::new(LocalStorage, WindowEvents)
}

/// A `window` event subscription, removed when dropped.
///
/// Components keep one in their state for as long as they are mounted.
pub struct WindowListener {
    name: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(name: &'static str, callback: Callback<()>) -> Self {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback.emit(());
        });
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        Self { name, closure }
    }

    pub fn store(event: StoreEvent, callback: Callback<()>) -> Self {
        Self::new(event.name(), callback)
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref());
        }
    }
}
