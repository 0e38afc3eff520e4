use super::{Broadcast, FAVORITES_KEY, KeyValueStore, StoreEvent, read_json, write_json};
use crate::model::product::Product;

/// The `favorites` entry of local storage: product copies, unique by id.
pub struct Favorites<'a, S, B> {
    storage: &'a S,
    broadcast: &'a B,
}

impl<'a, S: KeyValueStore, B: Broadcast> Favorites<'a, S, B> {
    pub fn new(storage: &'a S, broadcast: &'a B) -> Self {
        Self { storage, broadcast }
    }

    pub fn list(&self) -> Vec<Product> {
        read_json(self.storage, FAVORITES_KEY).unwrap_or_default()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.list().iter().any(|product| product.id == product_id)
    }

    /// Removes the product when present, appends it otherwise. Returns
    /// whether it is a favorite afterwards.
    pub fn toggle(&self, product: &Product) -> bool {
        let mut list = self.list();
        let before = list.len();
        list.retain(|favorite| favorite.id != product.id);
        let added = list.len() == before;
        if added {
            list.push(product.clone());
        }
        write_json(self.storage, FAVORITES_KEY, &list);
        self.broadcast.publish(StoreEvent::FavoritesUpdated);
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryStore, RecordingBroadcast};

    fn product(id: &str) -> Product {
        Product { id: id.into(), ..Product::default() }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let favorites = Favorites::new(&storage, &events);

        assert!(favorites.toggle(&product("p1")));
        assert!(favorites.contains("p1"));
        assert!(!favorites.toggle(&product("p1")));
        assert!(!favorites.contains("p1"));
        assert!(favorites.toggle(&product("p1")));
        assert_eq!(favorites.list().len(), 1);
        assert_eq!(events.take(), vec![StoreEvent::FavoritesUpdated; 3]);
    }

    #[test]
    fn toggle_drops_duplicates_left_by_older_writers() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        storage.set(FAVORITES_KEY, r#"[{"_id":"p1"},{"_id":"p2"},{"_id":"p1"}]"#);
        let favorites = Favorites::new(&storage, &events);

        assert!(!favorites.toggle(&product("p1")));
        let ids: Vec<String> = favorites.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p2".to_string()]);
    }
}
