use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// String key-value storage capability injected into every tracker.
///
/// Values are opaque strings; typed access goes through [`read_json`] and
/// [`write_json`]. Implementations decide when data actually hits disk.
pub trait StorePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Read a JSON-encoded value from a store slot. A missing key is `None`,
/// not an error.
pub fn read_json<T: DeserializeOwned>(store: &dyn StorePort, key: &str) -> Result<Option<T>> {
    match store.get(key) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Write a value into a store slot as JSON.
pub fn write_json<T: Serialize>(store: &mut dyn StorePort, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw);
    Ok(())
}

/// In-memory store. Used by tests and as the backing map for the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl StorePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("points"), None);

        store.set("points", "150".to_string());
        assert_eq!(store.get("points").as_deref(), Some("150"));

        store.remove("points");
        assert_eq!(store.get("points"), None);
    }

    #[test]
    fn test_json_helpers() {
        let mut store = MemoryStore::new();
        write_json(&mut store, "nums", &vec![1u32, 2, 3]).unwrap();

        let nums: Option<Vec<u32>> = read_json(&store, "nums").unwrap();
        assert_eq!(nums, Some(vec![1, 2, 3]));

        let missing: Option<Vec<u32>> = read_json(&store, "absent").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_json_helper_bad_payload_errors() {
        let mut store = MemoryStore::new();
        store.set("nums", "not json".to_string());

        let result: Result<Option<Vec<u32>>> = read_json(&store, "nums");
        assert!(result.is_err());
    }
}
