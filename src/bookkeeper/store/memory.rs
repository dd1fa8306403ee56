use super::DataStore;
use crate::book::Book;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: Option<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: Book) -> Self {
        Self {
            book: Some(book),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Book>> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &Book) -> Result<()> {
        self.book = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Contact, Name, NoteText};

    pub struct BookFixture {
        pub book: Book,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self { book: Book::new() }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let mut contact = Contact::new(Name::new(name).unwrap());
            contact.add_phone(phone).unwrap();
            self.book.contacts.add(contact);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut contact = match self.book.contacts.delete(name) {
                Ok(existing) => existing,
                Err(_) => Contact::new(Name::new(name).unwrap()),
            };
            contact.add_birthday(birthday).unwrap();
            self.book.contacts.add(contact);
            self
        }

        pub fn with_note(mut self, text: &str, tags: &[&str]) -> Self {
            let id = self.book.notes.add(NoteText::new(text).unwrap()).unwrap().id;
            let note = self.book.notes.find_mut(&id.to_string()).unwrap();
            for tag in tags {
                note.add_tag(tag).unwrap();
            }
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
