use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::library::{Document, Library};

/// Load a library from disk.
///
/// Strict: a missing or unparseable file is a [`Error::Persistence`], the
/// caller decides whether an absent library is acceptable. Round-trips
/// everything [`save`] wrote, ids included; the allocation counter is
/// re-seeded past the highest stored id.
pub fn load(path: &Path) -> Result<Library> {
    let raw = fs::read_to_string(path).map_err(|e| Error::Persistence {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let documents: Vec<Document> =
        serde_json::from_str(&raw).map_err(|e| Error::Persistence {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let library = Library::from_documents(documents)?;
    tracing::debug!(path = %path.display(), documents = library.len(), "library loaded");
    Ok(library)
}

/// Write the library to disk as pretty JSON.
///
/// Goes through a sibling temp file and a rename so an interrupted save
/// never leaves a truncated library behind.
pub fn save(path: &Path, library: &Library) -> Result<()> {
    let documents: Vec<&Document> = library.iter().collect();
    let raw = serde_json::to_string_pretty(&documents)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, raw)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), documents = documents.len(), "library saved");
    Ok(())
}
