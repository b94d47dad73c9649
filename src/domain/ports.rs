use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where generated modules are looked up and read from.
pub trait ArtifactSource {
    /// Path of the first artifact for `module`, if any location holds one.
    fn locate(&self, module: &str) -> Option<PathBuf>;

    fn read(&self, path: &Path) -> Result<String>;

    /// Locations consulted by `locate`, in lookup order.
    fn locations(&self) -> Vec<PathBuf>;
}
