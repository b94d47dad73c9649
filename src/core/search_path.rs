//! Locating the generated artifacts directory.
//!
//! The default location is derived from the crate's own manifest directory at
//! compile time, so it is the same no matter where the owning process starts.

use crate::domain::ports::ArtifactSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub const GENERATED_DIR_NAME: &str = "generated";
pub const ARTIFACT_SUFFIX: &str = ".schema.json";

pub fn artifact_file_name(module: &str) -> String {
    format!("{}{}", module, ARTIFACT_SUFFIX)
}

/// `anchor`'s grandparent joined with `generated`.
///
/// For a component file at `<pkg>/src/lib.rs` this is `<pkg>/generated`.
pub fn generated_dir_for(anchor: &Path) -> PathBuf {
    let base = anchor.ancestors().nth(2).unwrap_or_else(|| Path::new(""));
    base.join(GENERATED_DIR_NAME)
}

pub fn default_anchor() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("lib.rs")
}

pub fn default_generated_dir() -> PathBuf {
    generated_dir_for(&default_anchor())
}

/// Ordered directories consulted when importing a generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A search path holding only the crate's own `generated` directory.
    pub fn with_default() -> Self {
        let mut path = Self::new();
        path.prepend(default_generated_dir());
        path
    }

    /// Put `dir` first. Returns `false` when it was already registered.
    pub fn prepend(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            tracing::debug!("Search path already contains {}", dir.display());
            return false;
        }
        tracing::debug!("Registering search path {}", dir.display());
        self.entries.insert(0, dir);
        true
    }

    /// Put `dir` last. Returns `false` when it was already registered.
    pub fn append(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            tracing::debug!("Search path already contains {}", dir.display());
            return false;
        }
        tracing::debug!("Appending search path {}", dir.display());
        self.entries.push(dir);
        true
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.entries.iter().any(|entry| entry == dir)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArtifactSource for SearchPath {
    fn locate(&self, module: &str) -> Option<PathBuf> {
        let file_name = artifact_file_name(module);
        self.entries
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn locations(&self) -> Vec<PathBuf> {
        self.entries.clone()
    }
}
