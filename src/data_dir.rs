use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const LIBRARY_FILE: &str = "library.json";

/// Resolve the library file from, in order of priority:
/// 1. An explicit path (from --library)
/// 2. The SHELFMARK_LIBRARY environment variable
/// 3. The XDG data directory (~/.local/share/shelfmark/library.json)
///
/// The parent directory is created if needed; the file itself may not
/// exist yet.
pub fn resolve_library_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Ok(val) = std::env::var("SHELFMARK_LIBRARY") {
        PathBuf::from(val)
    } else {
        let data_home = xdg::BaseDirectories::with_prefix("shelfmark")
            .get_data_home()
            .ok_or_else(|| {
                Error::Config(
                    "could not determine XDG data home directory".into(),
                )
            })?;
        data_home.join(LIBRARY_FILE)
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|_| Error::DataDir(parent.to_path_buf()))?;
    }

    Ok(path)
}
