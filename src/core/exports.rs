//! The public surface: exported model names, version, and the process-wide
//! loaded models.

use crate::core::loader::ModelLoader;
use crate::domain::model::{ModelDefinition, ModuleArtifact};
use crate::utils::error::{Result, TypesError};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Release of this crate. Unrelated to the schema version of the artifacts.
pub const VERSION: &str = "1.0.5";

/// Names guaranteed to resolve after a successful load.
pub const EXPORTS: [&str; 2] = ["Task", "User"];

/// Models imported from the generated modules.
#[derive(Debug, Clone)]
pub struct GeneratedModels {
    task: ModelDefinition,
    user: ModelDefinition,
    artifacts: Vec<ModuleArtifact>,
}

impl GeneratedModels {
    pub(crate) fn from_namespace(
        mut namespace: BTreeMap<String, ModelDefinition>,
        artifacts: Vec<ModuleArtifact>,
    ) -> Result<Self> {
        let mut take = |name: &str| {
            namespace
                .remove(name)
                .ok_or_else(|| TypesError::ExportNotDefined {
                    name: name.to_string(),
                })
        };
        let task = take("Task")?;
        let user = take("User")?;

        Ok(Self {
            task,
            user,
            artifacts,
        })
    }

    pub fn task(&self) -> &ModelDefinition {
        &self.task
    }

    pub fn user(&self) -> &ModelDefinition {
        &self.user
    }

    /// Look up an exported model. Names outside [`EXPORTS`] never resolve.
    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        match name {
            "Task" => Some(&self.task),
            "User" => Some(&self.user),
            _ => None,
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        &EXPORTS
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ModelDefinition> {
        [&self.task, &self.user].into_iter()
    }

    /// The imported module files, in import order.
    pub fn artifacts(&self) -> &[ModuleArtifact] {
        &self.artifacts
    }
}

static MODELS: OnceLock<Result<GeneratedModels>> = OnceLock::new();

/// Models from the crate's own `generated` directory.
///
/// Loaded on first call; every later call returns the same value, including
/// a failed load.
pub fn models() -> std::result::Result<&'static GeneratedModels, &'static TypesError> {
    MODELS
        .get_or_init(|| ModelLoader::with_default_path().load())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(name: &str, module: &str) -> ModelDefinition {
        ModelDefinition::new(name, module, json!({ "type": "object" }))
    }

    #[test]
    fn test_get_only_resolves_exports() {
        let mut namespace = BTreeMap::new();
        namespace.insert("Task".to_string(), definition("Task", "task"));
        namespace.insert("User".to_string(), definition("User", "user"));
        namespace.insert("TaskStatus".to_string(), definition("TaskStatus", "task"));

        let models = GeneratedModels::from_namespace(namespace, Vec::new()).unwrap();
        for name in EXPORTS {
            assert_eq!(models.get(name).map(|d| d.name.as_str()), Some(name));
        }
        assert!(models.get("TaskStatus").is_none());
        assert_eq!(models.definitions().count(), EXPORTS.len());
    }

    #[test]
    fn test_from_namespace_requires_every_export() {
        let mut namespace = BTreeMap::new();
        namespace.insert("User".to_string(), definition("User", "user"));

        let err = GeneratedModels::from_namespace(namespace, Vec::new()).unwrap_err();
        assert!(matches!(err, TypesError::ExportNotDefined { name } if name == "Task"));
    }

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "1.0.5");
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
