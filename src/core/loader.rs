use crate::core::exports::GeneratedModels;
use crate::core::search_path::SearchPath;
use crate::domain::model::{ModelDefinition, ModuleArtifact};
use crate::domain::ports::ArtifactSource;
use crate::utils::error::{Result, TypesError};
use crate::utils::validation::validate_module_name;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Generated modules imported on load, in import order.
pub const GENERATED_MODULES: [&str; 2] = ["task", "user"];

pub struct ModelLoader<S: ArtifactSource = SearchPath> {
    source: S,
}

impl ModelLoader<SearchPath> {
    /// Loader over the crate's own `generated` directory.
    pub fn with_default_path() -> Self {
        Self::new(SearchPath::with_default())
    }

    pub fn from_generated_dir(dir: impl Into<PathBuf>) -> Self {
        let mut path = SearchPath::new();
        path.prepend(dir);
        Self::new(path)
    }
}

impl<S: ArtifactSource> ModelLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Import one generated module by name.
    pub fn import_module(&self, module: &str) -> Result<ModuleArtifact> {
        validate_module_name("module", module)?;
        let path = self.source.locate(module).ok_or_else(|| {
            let searched = self
                .source
                .locations()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            TypesError::ModuleNotFound {
                module: module.to_string(),
                searched: if searched.is_empty() {
                    "<empty search path>".to_string()
                } else {
                    searched
                },
            }
        })?;

        tracing::debug!("Importing module '{}' from {}", module, path.display());
        let content = self.source.read(&path)?;
        let artifact = ModuleArtifact::parse(module, &path, &content)?;
        tracing::debug!(
            "Module '{}' defines: {}",
            module,
            artifact.public_names().collect::<Vec<_>>().join(", ")
        );
        Ok(artifact)
    }

    /// Import every generated module and publish the exported models.
    ///
    /// Any failure is reported as [`TypesError::MissingGeneratedArtifacts`]
    /// with the underlying error kept as its source.
    pub fn load(&self) -> Result<GeneratedModels> {
        self.try_load().map_err(TypesError::missing_artifacts)
    }

    fn try_load(&self) -> Result<GeneratedModels> {
        let mut artifacts = Vec::with_capacity(GENERATED_MODULES.len());
        let mut namespace: BTreeMap<String, ModelDefinition> = BTreeMap::new();

        for module in GENERATED_MODULES {
            let artifact = self.import_module(module)?;
            for (name, definition) in &artifact.definitions {
                if let Some(previous) = namespace.insert(name.clone(), definition.clone()) {
                    tracing::warn!(
                        "'{}' from module '{}' shadows the one from '{}'",
                        name,
                        module,
                        previous.module
                    );
                }
            }
            artifacts.push(artifact);
        }

        let models = GeneratedModels::from_namespace(namespace, artifacts)?;
        tracing::info!(
            "✅ Loaded generated models: {}",
            models.names().join(", ")
        );
        Ok(models)
    }
}
