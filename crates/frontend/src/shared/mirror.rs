//! Persisted local mirror of one resource collection.
//!
//! The whole collection lives as a single JSON array under a fixed storage
//! key. It is seeded on first read and rewritten in full by every mutation.
//! Storage failures never reach the caller. Only a missing blob or one that
//! is not a JSON array is replaced by the seed; elements are decoded one by
//! one so a single odd record never costs the rest of the collection.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::storage::{BrowserStorage, KeyValueStorage};

/// Record that can live in a [`MirrorStore`]
pub trait MirrorRecord: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Decodes one stored element; `None` drops it from the collection.
    fn decode_stored(raw: &Value) -> Option<Self> {
        serde_json::from_value(raw.clone()).ok()
    }
}

#[derive(Debug, Clone)]
pub struct MirrorStore<R, S = BrowserStorage> {
    key: &'static str,
    seed: fn() -> Vec<R>,
    storage: S,
    _record: PhantomData<R>,
}

impl<R: MirrorRecord, S: KeyValueStorage> MirrorStore<R, S> {
    pub fn new(key: &'static str, seed: fn() -> Vec<R>, storage: S) -> Self {
        Self {
            key,
            seed,
            storage,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored collection, or the seed (persisted best-effort) when the key is
    /// absent or does not hold a JSON array.
    pub fn read_mock(&self) -> Vec<R> {
        match self.storage.get_item(self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Array(items)) => return self.decode_items(&items),
                Ok(_) => log::debug!("Mirror '{}' is not a list, reseeding", self.key),
                Err(e) => log::debug!("Mirror '{}' is unreadable, reseeding: {}", self.key, e),
            },
            Ok(None) => {}
            Err(e) => log::debug!("Mirror '{}' read failed: {}", self.key, e),
        }

        let seed = (self.seed)();
        self.write_mock(&seed);
        seed
    }

    fn decode_items(&self, items: &[Value]) -> Vec<R> {
        items
            .iter()
            .filter_map(|item| {
                let record = R::decode_stored(item);
                if record.is_none() {
                    log::debug!("Mirror '{}' skipped an undecodable element", self.key);
                }
                record
            })
            .collect()
    }

    /// Replaces the whole stored collection. Failures are ignored.
    pub fn write_mock(&self, list: &[R]) {
        let raw = match serde_json::to_string(list) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("Mirror '{}' serialization failed: {}", self.key, e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(self.key, &raw) {
            log::debug!("Mirror '{}' write failed: {}", self.key, e);
        }
    }

    /// Applies `change` to the record with `id`; every other record is
    /// written back untouched.
    pub fn update_by_id(&self, id: i64, mut change: impl FnMut(&mut R)) -> Vec<R> {
        let mut list = self.read_mock();
        for record in list.iter_mut().filter(|r| r.id() == id) {
            change(record);
        }
        self.write_mock(&list);
        list
    }

    pub fn remove_by_id(&self, id: i64) -> Vec<R> {
        let mut list = self.read_mock();
        list.retain(|r| r.id() != id);
        self.write_mock(&list);
        list
    }

    /// Puts `record` at the front under a freshly generated id.
    pub fn prepend_new(&self, mut record: R) -> Vec<R> {
        let mut list = self.read_mock();
        record.set_id(next_id(&list));
        list.insert(0, record);
        self.write_mock(&list);
        list
    }
}

/// `max(existing ids, 0) + 1`
pub fn next_id<R: MirrorRecord>(list: &[R]) -> i64 {
    list.iter().map(MirrorRecord::id).fold(0, i64::max) + 1
}
