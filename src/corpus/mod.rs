//! Input file sets
//!
//! A [`FileSet`] is the explicit list of files one run works on. Discovery
//! from a directory is a separate step, so the pipelines can be driven from
//! any list of paths.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Ordered list of input files, sorted ascending by full path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<PathBuf>,
}

impl FileSet {
    /// Build a file set from explicit paths, sorting them by path
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Self { paths }
    }

    /// List every entry directly inside `dir`
    ///
    /// Entries are not filtered by type or extension; a subdirectory is
    /// listed like any other entry and fails later when it is read.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| Error::ListDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            paths.push(entry.into_path());
        }
        debug!("Discovered {} entries in {}", paths.len(), dir.display());
        Ok(Self::from_paths(paths))
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
