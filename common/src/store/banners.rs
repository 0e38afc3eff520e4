use super::{KeyValueStore, PROMOS_KEY, read_json, write_json};
use crate::model::promo::Promo;

/// Last public banner list, shown before the network answers.
pub struct BannerCache<'a, S> {
    storage: &'a S,
}

impl<'a, S: KeyValueStore> BannerCache<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn cached(&self) -> Vec<Promo> {
        read_json(self.storage, PROMOS_KEY).unwrap_or_default()
    }

    pub fn replace(&self, promos: &[Promo]) {
        write_json(self.storage, PROMOS_KEY, &promos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn cache_round_trip_and_null_entry() {
        let storage = MemoryStore::default();
        storage.set(PROMOS_KEY, "null");
        let cache = BannerCache::new(&storage);
        assert!(cache.cached().is_empty());

        let promo = Promo { id: "b1".into(), active: true, image_desktop_url: "/d.jpg".into(), ..Promo::default() };
        cache.replace(std::slice::from_ref(&promo));
        assert_eq!(cache.cached(), vec![promo]);
    }
}
