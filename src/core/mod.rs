pub mod exports;
pub mod loader;
pub mod search_path;

pub use crate::domain::model::{ModelDefinition, ModuleArtifact};
pub use crate::domain::ports::ArtifactSource;
pub use crate::utils::error::Result;
