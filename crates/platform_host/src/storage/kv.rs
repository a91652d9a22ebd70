//! Origin-scoped string key-value storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`KeyValueStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for string-keyed, string-valued storage that survives page reloads.
pub trait KeyValueStore {
    /// Reads the raw string stored under `key`.
    fn get_item<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>>;

    /// Writes a raw string under `key`, replacing any previous value.
    fn set_item<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, Result<(), String>>;

    /// Removes `key` from the store.
    fn remove_item<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same backing map.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Returns the raw value for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Seeds a raw value, bypassing the async contract.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn set_item<'a>(&'a self, key: &'a str, value: &'a str) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.seed(key, value);
            Ok(())
        })
    }

    fn remove_item<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub async fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.get_item(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("`{key}` is not valid JSON: {e}"))?;
    Ok(Some(value))
}

/// Serializes `value` as JSON and writes it under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set_item(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
    }

    #[test]
    fn memory_store_round_trip_and_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        block_on(store_obj.set_item("notepad", "hello")).expect("set");
        assert_eq!(
            block_on(store_obj.get_item("notepad")).expect("get"),
            Some("hello".to_string())
        );
        block_on(store_obj.remove_item("notepad")).expect("remove");
        assert_eq!(block_on(store_obj.get_item("notepad")).expect("get"), None);
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryKeyValueStore::default();
        let other = store.clone();
        block_on(store.set_item("loggedIn", "true")).expect("set");
        assert_eq!(other.raw("loggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn typed_json_helpers_round_trip() {
        let store = MemoryKeyValueStore::default();
        let entries = vec![Entry {
            name: "a".to_string(),
        }];
        block_on(save_json_with(&store, "files", &entries)).expect("save");
        assert_eq!(store.raw("files").as_deref(), Some(r#"[{"name":"a"}]"#));

        let loaded: Option<Vec<Entry>> = block_on(load_json_with(&store, "files")).expect("load");
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn corrupt_json_is_reported_with_key() {
        let store = MemoryKeyValueStore::default();
        store.seed("files", "{not json");
        let err = block_on(load_json_with::<_, Vec<Entry>>(&store, "files")).unwrap_err();
        assert!(err.starts_with("`files` is not valid JSON"));
    }
}
