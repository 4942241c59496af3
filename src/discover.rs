//! Finding the files a run will touch.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One subdirectory of the base directory that holds a target file.
#[derive(PartialEq, Debug, Clone)]
pub struct Entry {
    /// Name of the subdirectory, used in progress output.
    pub name: String,
    pub path: PathBuf,
}

/// List every `<base>/<entry>/<target>` that exists, sorted by entry name.
///
/// Hidden subdirectories count like any other. Anything at the target path
/// that isn't a regular file is ignored. Finding nothing is fine; failing to
/// list the base directory is not.
pub fn discover(cfg: &Config) -> Result<Vec<Entry>> {
    let wrap = |source: std::io::Error| Error::Discovery {
        path: cfg.base.clone(),
        source,
    };

    let mut found = vec![];
    for dirent in std::fs::read_dir(&cfg.base).map_err(wrap)? {
        let dirent = dirent.map_err(wrap)?;
        let name = dirent.file_name();

        // Follows symlinks, unlike DirEntry::file_type.
        let dir = dirent.path();
        if !dir.is_dir() {
            continue;
        }
        let path = dir.join(&cfg.target);
        if path.is_file() {
            found.push((name, path));
        }
    }

    found.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(found
        .into_iter()
        .map(|(name, path)| Entry::new(name.to_string_lossy(), path))
        .collect())
}

impl Entry {
    pub fn new(name: impl AsRef<str>, path: impl AsRef<Path>) -> Self {
        Self {
            name: name.as_ref().into(),
            path: path.as_ref().into(),
        }
    }
}
