use std::path::{Path, PathBuf};

use crate::scanner::SOURCE_EXTENSION;

/// Default README name patched when no explicit file is given
pub const README_FILENAME: &str = "README.md";

/// Where generated documentation goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Print Markdown sections to standard output
    Stdout,
    /// Patch marked sections of a README in place
    Readme(PathBuf),
}

/// Resolved settings for one documentation run
#[derive(Debug, Clone)]
pub struct DocgenConfig {
    /// Root directory scanned for sources
    pub root: PathBuf,
    pub output: OutputMode,
    /// Source file extension, without the dot
    pub extension: String,
}

impl DocgenConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: OutputMode::Stdout,
            extension: SOURCE_EXTENSION.to_string(),
        }
    }

    /// Patch a README; `None` selects `README.md` under the root
    pub fn with_readme(mut self, readme: Option<PathBuf>) -> Self {
        let path = readme.unwrap_or_else(|| self.root.join(README_FILENAME));
        self.output = OutputMode::Readme(path);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocgenConfig::default();
        assert_eq!(config.root(), Path::new("."));
        assert_eq!(config.output, OutputMode::Stdout);
        assert_eq!(config.extension, "cs");
    }

    #[test]
    fn test_readme_defaults_to_root() {
        let config = DocgenConfig::new("plugin").with_readme(None);
        assert_eq!(config.output, OutputMode::Readme(PathBuf::from("plugin/README.md")));
    }

    #[test]
    fn test_explicit_readme_and_extension() {
        let config = DocgenConfig::new("plugin")
            .with_readme(Some(PathBuf::from("docs/PLUGIN.md")))
            .with_extension(".csx");
        assert_eq!(config.output, OutputMode::Readme(PathBuf::from("docs/PLUGIN.md")));
        assert_eq!(config.extension, "csx");
    }
}
