//! One interactive session over one store: load on open, save on close.

use crate::book::Book;
use crate::config::AssistantConfig;
use crate::error::Result;
use crate::seed;
use crate::store::DataStore;
use chrono::NaiveDate;

/// How much starter data a fresh book gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedPlan {
    pub contacts: usize,
    pub notes: usize,
}

impl SeedPlan {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts == 0 && self.notes == 0
    }
}

impl From<&AssistantConfig> for SeedPlan {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            contacts: config.seed_contacts,
            notes: config.seed_notes,
        }
    }
}

pub struct Session<S: DataStore> {
    store: S,
    book: Book,
}

impl<S: DataStore> Session<S> {
    /// Loads the stored book. When nothing is stored yet, starts from a book
    /// filled according to `seed`.
    pub fn open(store: S, seed: SeedPlan, today: NaiveDate) -> Result<Self> {
        let book = match store.load()? {
            Some(book) => book,
            None => {
                let mut book = Book::new();
                if !seed.is_empty() {
                    seed::populate(&mut book, seed.contacts, seed.notes, today)?;
                }
                book
            }
        };
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Persists the book and hands the store back.
    pub fn close(mut self) -> Result<S> {
        self.store.save(&self.book)?;
        log::info!("session closed");
        Ok(self.store)
    }
}
