use std::cell::RefCell;
use std::collections::HashMap;

use super::{Broadcast, KeyValueStore, StoreEvent};

/// In-memory stand-in for local storage.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Records published events in order.
#[derive(Default)]
pub struct RecordingBroadcast {
    pub events: RefCell<Vec<StoreEvent>>,
}

impl RecordingBroadcast {
    pub fn take(&self) -> Vec<StoreEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl Broadcast for RecordingBroadcast {
    fn publish(&self, event: StoreEvent) {
        self.events.borrow_mut().push(event);
    }
}
