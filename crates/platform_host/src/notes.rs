//! The single notepad buffer, stored as raw text under [`NOTEPAD_KEY`].

use crate::storage::{kv::KeyValueStore, NOTEPAD_KEY};

/// Reads the saved note. A missing key is an empty note.
///
/// # Errors
///
/// Returns an error when the store read fails.
pub async fn load_note<S: KeyValueStore + ?Sized>(store: &S) -> Result<String, String> {
    Ok(store.get_item(NOTEPAD_KEY).await?.unwrap_or_default())
}

/// Replaces the saved note.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn save_note<S: KeyValueStore + ?Sized>(store: &S, text: &str) -> Result<(), String> {
    store.set_item(NOTEPAD_KEY, text).await
}
