//! Flat file collection persisted as one JSON array under [`FILES_KEY`].
//!
//! Names are unique and compared case-sensitively. Every mutation re-reads and re-writes the
//! whole collection, so concurrent editors resolve as last write wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{
    kv::{load_json_with, save_json_with, KeyValueStore},
    FILES_KEY,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One named text file.
pub struct FileRecord {
    /// Unique, case-sensitive file name.
    pub name: String,
    /// Text content.
    pub content: String,
}

impl FileRecord {
    /// Builds a record from borrowed parts.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Failures of file collection mutations. None of them change stored state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    /// A file with exactly this name already exists.
    #[error("file \"{0}\" already exists")]
    DuplicateName(String),
    /// The index does not address an entry.
    #[error("no file at index {0}")]
    IndexOutOfRange(usize),
    /// The backing store could not be read or written.
    #[error("file store failure: {0}")]
    Store(String),
}

/// Appends `record` unless a file with the same exact name exists.
///
/// # Errors
///
/// Returns [`FileError::DuplicateName`] and leaves `files` untouched on a name clash.
pub fn insert_file(files: &mut Vec<FileRecord>, record: FileRecord) -> Result<(), FileError> {
    if files.iter().any(|file| file.name == record.name) {
        return Err(FileError::DuplicateName(record.name));
    }
    files.push(record);
    Ok(())
}

/// Removes the entry at `index`, keeping the relative order of the rest.
///
/// # Errors
///
/// Returns [`FileError::IndexOutOfRange`] when `index` is past the end.
pub fn remove_file_at(files: &mut Vec<FileRecord>, index: usize) -> Result<FileRecord, FileError> {
    if index >= files.len() {
        return Err(FileError::IndexOutOfRange(index));
    }
    Ok(files.remove(index))
}

/// Finds a file by exact name.
pub fn find_file<'a>(files: &'a [FileRecord], name: &str) -> Option<&'a FileRecord> {
    files.iter().find(|file| file.name == name)
}

/// Loads the file collection. A missing key is an empty collection.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored JSON is corrupt.
pub async fn load_files<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<FileRecord>, String> {
    Ok(load_json_with(store, FILES_KEY).await?.unwrap_or_default())
}

/// Creates and persists a file, returning the updated collection.
///
/// # Errors
///
/// See [`FileError`]. On [`FileError::DuplicateName`] nothing is written.
pub async fn create_file<S: KeyValueStore + ?Sized>(
    store: &S,
    name: &str,
    content: &str,
) -> Result<Vec<FileRecord>, FileError> {
    let mut files = load_files(store).await.map_err(FileError::Store)?;
    insert_file(&mut files, FileRecord::new(name, content))?;
    save_json_with(store, FILES_KEY, &files)
        .await
        .map_err(FileError::Store)?;
    Ok(files)
}

/// Deletes and persists the file at `index`, returning the updated collection.
///
/// # Errors
///
/// See [`FileError`]. On [`FileError::IndexOutOfRange`] nothing is written.
pub async fn delete_file<S: KeyValueStore + ?Sized>(
    store: &S,
    index: usize,
) -> Result<Vec<FileRecord>, FileError> {
    let mut files = load_files(store).await.map_err(FileError::Store)?;
    remove_file_at(&mut files, index)?;
    save_json_with(store, FILES_KEY, &files)
        .await
        .map_err(FileError::Store)?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MemoryKeyValueStore;

    fn seeded(names: &[&str]) -> MemoryKeyValueStore {
        let store = MemoryKeyValueStore::default();
        for name in names {
            block_on(create_file(&store, name, &format!("{name} body"))).expect("seed file");
        }
        store
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(block_on(load_files(&store)).expect("load"), Vec::new());
    }

    #[test]
    fn create_persists_in_wire_format() {
        let store = MemoryKeyValueStore::default();
        block_on(create_file(&store, "todo", "milk")).expect("create");
        assert_eq!(
            store.raw(FILES_KEY).as_deref(),
            Some(r#"[{"name":"todo","content":"milk"}]"#)
        );
    }

    #[test]
    fn duplicate_name_leaves_collection_unchanged() {
        let store = seeded(&["a"]);
        let before = store.raw(FILES_KEY);

        let err = block_on(create_file(&store, "a", "other")).unwrap_err();

        assert_eq!(err, FileError::DuplicateName("a".to_string()));
        assert_eq!(store.raw(FILES_KEY), before);
        let files = block_on(load_files(&store)).expect("load");
        assert_eq!(files, vec![FileRecord::new("a", "a body")]);
    }

    #[test]
    fn name_uniqueness_is_case_sensitive() {
        let store = seeded(&["a"]);
        let files = block_on(create_file(&store, "A", "upper")).expect("distinct name");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_entry_and_keeps_order() {
        let store = seeded(&["a", "b", "c", "d"]);

        let files = block_on(delete_file(&store, 1)).expect("delete");

        let names: Vec<_> = files.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(block_on(load_files(&store)).expect("reload"), files);
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let store = seeded(&["a"]);
        let before = store.raw(FILES_KEY);
        assert_eq!(
            block_on(delete_file(&store, 3)).unwrap_err(),
            FileError::IndexOutOfRange(3)
        );
        assert_eq!(store.raw(FILES_KEY), before);
    }

    #[test]
    fn corrupt_collection_surfaces_store_error() {
        let store = MemoryKeyValueStore::default();
        store.seed(FILES_KEY, "nope");
        assert!(matches!(
            block_on(create_file(&store, "a", "")),
            Err(FileError::Store(_))
        ));
        assert_eq!(store.raw(FILES_KEY).as_deref(), Some("nope"));
    }

    #[test]
    fn find_file_matches_exact_name() {
        let files = vec![FileRecord::new("Notes", "x")];
        assert!(find_file(&files, "Notes").is_some());
        assert!(find_file(&files, "notes").is_none());
    }
}
