//! # Storage Layer
//!
//! The whole [`Book`] is persisted as one bundle: it is read once when a
//! session opens and written once when it closes. The [`DataStore`] trait
//! hides where that bundle lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a pretty-printed JSON document
//!   (`data.json` by default) inside the data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── data.json    # {"contacts": [...], "notes": {"last_id": N, "notes": [...]}}
//! └── config.json  # optional, see config.rs
//! ```
//!
//! A missing data file is not an error: `load` returns `Ok(None)` and the
//! session decides what a fresh book looks like.

use crate::book::Book;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the stored bundle, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Book>>;

    /// Replace the stored bundle.
    fn save(&mut self, book: &Book) -> Result<()>;
}
