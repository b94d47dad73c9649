//! Taskin model definitions for Rust.
//!
//! The `Task` and `User` models are authored as Zod schemas in `types-ts` and
//! exported as JSON Schema into this crate's `generated/` directory by the
//! external build. [`models`] imports them once per process.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::TomlConfig;
#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::core::exports::{models, GeneratedModels, EXPORTS, VERSION};
pub use crate::core::loader::ModelLoader;
pub use crate::core::search_path::{default_generated_dir, SearchPath};
pub use crate::domain::model::ModelDefinition;
pub use crate::utils::error::{Result, TypesError};
