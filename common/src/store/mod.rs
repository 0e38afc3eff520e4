//! Durable client state kept in browser local storage.
//!
//! The cart, the favorites, the session and the banner cache all live as
//! JSON under fixed keys. Views never touch the keys directly: they go
//! through [`ClientStore`], whose mutation methods write the whole value
//! back synchronously and then publish a [`StoreEvent`] so every mounted
//! view in the same document can re-read it. Other tabs are not notified.

pub mod banners;
pub mod cart;
pub mod favorites;
pub mod session;

#[cfg(test)]
pub(crate) mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const CART_KEY: &str = "cart";
pub const FAVORITES_KEY: &str = "favorites";
pub const LAST_EMAIL_KEY: &str = "lastEmail";
pub const PROMOS_KEY: &str = "promos";

/// String key/value persistence, i.e. `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Change notifications published after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    CartUpdated,
    FavoritesUpdated,
}

impl StoreEvent {
    /// Name of the DOM event dispatched on `window`.
    pub fn name(self) -> &'static str {
        match self {
            StoreEvent::CartUpdated => "cartUpdated",
            StoreEvent::FavoritesUpdated => "favoritesUpdated",
        }
    }
}

/// Same-document fan-out of [`StoreEvent`]s.
pub trait Broadcast {
    fn publish(&self, event: StoreEvent);
}

/// Reads a JSON value; missing or unreadable entries are `None`.
pub(crate) fn read_json<T: DeserializeOwned>(storage: &impl KeyValueStore, key: &str) -> Option<T> {
    storage
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Writes a JSON value. Serialization of these plain records cannot fail in
/// practice; if it ever does the previous value is left untouched.
pub(crate) fn write_json<T: Serialize>(storage: &impl KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        storage.set(key, &raw);
    }
}

/// Entry point the views use to reach each piece of local state.
pub struct ClientStore<S, B> {
    storage: S,
    broadcast: B,
}

impl<S: KeyValueStore, B: Broadcast> ClientStore<S, B> {
    pub fn new(storage: S, broadcast: B) -> Self {
        Self { storage, broadcast }
    }

    pub fn cart(&self) -> cart::Cart<'_, S, B> {
        cart::Cart::new(&self.storage, &self.broadcast)
    }

    pub fn favorites(&self) -> favorites::Favorites<'_, S, B> {
        favorites::Favorites::new(&self.storage, &self.broadcast)
    }

    pub fn session(&self) -> session::SessionStore<'_, S> {
        session::SessionStore::new(&self.storage)
    }

    pub fn banners(&self) -> banners::BannerCache<'_, S> {
        banners::BannerCache::new(&self.storage)
    }
}
