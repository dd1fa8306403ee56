use super::DataStore;
use crate::book::Book;
use crate::error::{AssistantError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(AssistantError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Book>> {
        let path = self.data_path();
        if !path.exists() {
            log::info!("no data file at {}", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(AssistantError::Io)?;
        let book: Book = serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        log::info!(
            "loaded {} contacts and {} notes from {}",
            book.contacts.len(),
            book.notes.len(),
            path.display()
        );
        Ok(Some(book))
    }

    fn save(&mut self, book: &Book) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.data_path();
        let content =
            serde_json::to_string_pretty(book).map_err(AssistantError::Serialization)?;
        fs::write(&path, content).map_err(AssistantError::Io)?;
        log::info!("saved book to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Name, NoteText};

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested")).with_data_file("book.json");

        let mut book = Book::new();
        let mut contact = Contact::new(Name::new("Anna").unwrap());
        contact.add_phone("0991911155").unwrap();
        book.contacts.add(contact);
        book.notes.add(NoteText::new("water the plants").unwrap()).unwrap();

        store.save(&book).unwrap();
        assert!(dir.path().join("nested").join("book.json").exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load(),
            Err(AssistantError::Serialization(_))
        ));
    }

    #[test]
    fn invalid_field_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("data.json"),
            r#"{"contacts": [{"name": "Anna", "phones": ["123"]}]}"#,
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().is_err());
    }
}
