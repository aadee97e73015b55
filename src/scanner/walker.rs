use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{DocgenError, Result};

/// Default source file extension
pub const SOURCE_EXTENSION: &str = "cs";

pub struct FileWalker {
    extension: String,
}

impl FileWalker {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Recursively collects source files under `root`, sorted by file name per directory
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(DocgenError::RootNotFound(root.display().to_string()));
        }

        let mut files = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .ignore(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new(SOURCE_EXTENSION)
    }
}
