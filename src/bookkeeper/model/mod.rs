//! Entities and their validated fields.
//!
//! - [`fields`]: smart-constructed scalar values (`Phone`, `Birthday`, `Tag`, ...)
//! - [`contact`]: `Contact`, a named record with phones and optional details
//! - [`note`]: `Note`, an id-keyed text with tags

pub mod contact;
pub mod fields;
pub mod note;

pub use contact::Contact;
pub use fields::{Address, Birthday, Email, Field, Name, NoteText, Phone, Tag};
pub use note::Note;
