use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::walker::FileWalker;

/// A source file read fully into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// File name without extension
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }
}

/// All source texts of a project, gathered before any parsing happens
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    /// Walks `root` and reads every matching file.
    ///
    /// Files that cannot be read are logged and skipped.
    pub fn load(root: &Path, walker: &FileWalker) -> Result<Self> {
        let paths = walker.walk(root)?;
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            match read_source(&path) {
                Ok(content) => {
                    tracing::debug!("Read {} ({} bytes)", path.display(), content.len());
                    files.push(SourceFile { path, content });
                }
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        tracing::info!("Loaded {} source files from {}", files.len(), root.display());
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Contents of every file, in walk order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.content.as_str())
    }

    /// First file whose stem equals `stem`
    pub fn find_by_stem(&self, stem: &str) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.stem() == Some(stem))
    }
}

/// Reads a file as UTF-8 (lossily), dropping a leading byte order mark
fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let decoded = String::from_utf8_lossy(&bytes);
    let text: &str = &decoded;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_contents() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.cs"), "class A {}").unwrap();
        fs::create_dir_all(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub/B.cs"), "class B {}").unwrap();

        let sources = SourceSet::load(temp_dir.path(), &FileWalker::default()).unwrap();

        assert_eq!(sources.len(), 2);
        let texts: Vec<_> = sources.texts().collect();
        assert!(texts.contains(&"class A {}"));
        assert!(texts.contains(&"class B {}"));
    }

    #[test]
    fn test_bom_is_stripped() {
        let temp_dir = TempDir::new().unwrap();
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"public class Bom {}");
        fs::write(temp_dir.path().join("Bom.cs"), bytes).unwrap();

        let sources = SourceSet::load(temp_dir.path(), &FileWalker::default()).unwrap();

        assert_eq!(sources.texts().next(), Some("public class Bom {}"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Bad.cs"), [b'c', 0xFF, b'x']).unwrap();

        let sources = SourceSet::load(temp_dir.path(), &FileWalker::default()).unwrap();

        assert_eq!(sources.len(), 1);
        assert!(sources.texts().next().unwrap().starts_with('c'));
    }

    #[test]
    fn test_find_by_stem() {
        let sources = SourceSet::new(vec![
            SourceFile::new("src/Device.cs", "a"),
            SourceFile::new("src/Bridge/DeviceJoinMap.cs", "b"),
        ]);

        assert_eq!(sources.find_by_stem("DeviceJoinMap").unwrap().content, "b");
        assert!(sources.find_by_stem("Missing").is_none());
    }
}
