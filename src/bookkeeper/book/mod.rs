//! # Collections
//!
//! [`ContactDirectory`] and [`NoteCollection`] own their entities and expose
//! lookup, CRUD and the derived queries (birthday windows, tag search).
//! [`Book`] bundles both so a session loads and saves them as one unit.

use serde::{Deserialize, Serialize};

pub mod directory;
pub mod notes;

pub use directory::{weekday_name, ContactDirectory};
pub use notes::NoteCollection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub contacts: ContactDirectory,
    #[serde(default)]
    pub notes: NoteCollection,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }
}
