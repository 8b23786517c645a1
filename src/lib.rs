//! shelfmark - a personal-library cataloger with typo-tolerant search.
//!
//! shelfmark keeps metadata records for documents (papers, files, links) in
//! a single JSON library file and retrieves them through free-text or
//! field-scoped queries with approximate matching. There is no index: every
//! query is a linear scan over the whole library, which is plenty for a
//! personal catalog.
//!
//! # Quick start
//!
//! ```
//! use shelfmark::{Library, Source};
//! use shelfmark::query::parse_query;
//! use shelfmark::search::search;
//!
//! let mut library = Library::new();
//! library.add(
//!     "The Go Programming Language".to_string(),
//!     vec!["Alan Donovan".to_string(), "Brian Kernighan".to_string()],
//!     vec![Source::Url("https://gopl.io".to_string())],
//!     vec!["golang".to_string()],
//!     "en".to_string(),
//! );
//!
//! let query = parse_query(&["go", "au:donovan"]).unwrap();
//! for (doc, score) in search(&query, false, &library) {
//!     println!("#{} {} ({:.2}/{:.2})", doc.id, doc.name, score.exact, score.fuzzy);
//! }
//! ```

pub mod cli;
pub mod data_dir;
pub mod distance;
pub mod error;
pub mod library;
pub mod matcher;
pub mod persist;
pub mod query;
pub mod search;

pub use error::{Error, Result};
pub use library::{Document, Library, Source};
pub use matcher::Score;
pub use query::{Query, QueryElement};
