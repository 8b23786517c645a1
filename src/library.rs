use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a document lives. Only the string rendering participates in
/// matching; resolving `File` paths against a base directory is the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    File(PathBuf),
    Url(String),
    Other(String),
}

impl Source {
    /// Classify a raw CLI argument. A URL scheme wins, then anything
    /// path-shaped, then an opaque reference.
    pub fn classify(raw: &str) -> Self {
        if raw.contains("://") {
            Self::Url(raw.to_string())
        } else if raw.contains('/')
            || raw.starts_with('.')
            || raw.starts_with('~')
            || PathBuf::from(raw).exists()
        {
            Self::File(PathBuf::from(raw))
        } else {
            Self::Other(raw.to_string())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
            Self::Other(other) => write!(f, "{other}"),
        }
    }
}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lang: String,
}

impl Document {
    /// Every source, rendered for matching.
    pub fn source_strings(&self) -> Vec<String> {
        self.sources.iter().map(ToString::to_string).collect()
    }
}

/// The in-memory document store: a map keyed by id behind a single owner.
///
/// Ids are allocated from a monotonic counter seeded at `max id + 1` (0 for
/// an empty store). The counter never rolls back within a process, so an id
/// freed by removal is not handed out again even when the removed document
/// held the current maximum.
#[derive(Debug, Default)]
pub struct Library {
    documents: BTreeMap<u64, Document>,
    next_id: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted documents. Duplicate ids
    /// are a corrupt library and are rejected.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for doc in documents {
            let id = doc.id;
            if map.insert(id, doc).is_some() {
                return Err(Error::Config(format!(
                    "library contains duplicate document id {id}"
                )));
            }
        }
        let next_id = map.keys().next_back().map_or(0, |max| max + 1);
        Ok(Self { documents: map, next_id })
    }

    /// Insert a new document and return it with its freshly allocated id.
    pub fn add(
        &mut self,
        name: String,
        authors: Vec<String>,
        sources: Vec<Source>,
        tags: Vec<String>,
        lang: String,
    ) -> &Document {
        let id = self.next_id;
        self.next_id += 1;
        let doc = Document { id, name, authors, sources, tags, lang };
        self.documents.insert(id, doc);
        &self.documents[&id]
    }

    pub fn get(&self, id: u64) -> Result<&Document> {
        self.documents.get(&id).ok_or(Error::NotFound { id })
    }

    /// Replace the document sharing `doc.id`.
    pub fn update(&mut self, doc: Document) -> Result<()> {
        match self.documents.get_mut(&doc.id) {
            Some(slot) => {
                *slot = doc;
                Ok(())
            }
            None => Err(Error::NotFound { id: doc.id }),
        }
    }

    /// Remove by id. Idempotent: removing an absent id is not an error.
    /// Returns whether a document was actually deleted.
    pub fn remove(&mut self, id: u64) -> bool {
        self.documents.remove(&id).is_some()
    }

    /// All documents, ascending by id. The order is stable for the life of
    /// the process.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
