//! JSON file storage for the address book.

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Stores the whole address book as one pretty-printed JSON document.
///
/// Saves are written to a sibling temporary file and renamed over the
/// snapshot, so a crash mid-write never leaves a truncated book behind.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("address_book"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        info!(path = %self.path.display(), records = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        info!(path = %self.path.display(), records = book.len(), "address book saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty_book() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileBookRepository::new(dir.path().join("absent.json"));
        let book = repo.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("book.json");
        let repo = JsonFileBookRepository::new(&path);

        let mut book = AddressBook::new();
        book.add_record(Record::new("John").unwrap());
        repo.save(&book).unwrap();

        assert!(path.exists());
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let repo = JsonFileBookRepository::new(&path);
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        let repo = JsonFileBookRepository::new("/data/address_book.json");
        assert_eq!(
            repo.temp_path(),
            PathBuf::from("/data/address_book.json.tmp")
        );
    }
}
