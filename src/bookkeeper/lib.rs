//! # Bookkeeper Architecture
//!
//! Bookkeeper is an interactive assistant for a personal address book and a
//! notebook. The binary is a thin read-eval-print loop; everything it does
//! goes through this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, repl.rs, logging.rs)          │
//! │  - Reads lines, prints colored replies, owns the exit code  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch (dispatch.rs, suggest.rs)                         │
//! │  - Line → command name + args → handler                     │
//! │  - Errors become messages; unknown names get suggestions    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Ordered registry of handlers                             │
//! │  - Arity checks and reply formatting                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book/, model/)                                     │
//! │  - Validated fields, contacts, notes, their collections     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, session.rs)                         │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! │  - Session: load on open, save on close                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Below the CLI Layer
//!
//! Handlers never print. Follow-up input (the text of a new note) is read
//! through the [`commands::Prompt`] trait, so the terminal editor, piped
//! stdin and tests all drive the same code.
//!
//! ## Testing Strategy
//!
//! - Domain and command modules: unit tests against `Book` values, using
//!   `store::memory::fixtures::BookFixture` and a scripted prompt
//! - Storage: `FileStore` against temporary directories
//! - Binary: `tests/` drives the compiled executable over stdin

pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
pub mod suggest;
