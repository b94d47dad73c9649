use crate::utils::error::{Result, TypesError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A named model exposed by a generated module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    pub module: String,
    pub schema: Value,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>, module: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            schema,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.schema.get("description").and_then(Value::as_str)
    }

    /// Schema properties, sorted by name.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .get("properties")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|props| props.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn required(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required().contains(&field)
    }
}

/// One imported `<module>.schema.json` file.
#[derive(Debug, Clone)]
pub struct ModuleArtifact {
    pub module: String,
    pub path: PathBuf,
    pub definitions: BTreeMap<String, ModelDefinition>,
}

impl ModuleArtifact {
    pub fn parse(module: &str, path: &Path, content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let root = document
            .as_object()
            .ok_or_else(|| TypesError::InvalidArtifact {
                path: path.to_path_buf(),
                reason: "top-level value is not a JSON object".to_string(),
            })?;

        let mut definitions = BTreeMap::new();
        let table = root
            .get("definitions")
            .or_else(|| root.get("$defs"))
            .and_then(Value::as_object);

        match table {
            Some(table) => {
                for (name, schema) in table {
                    // 底線開頭的名稱視為私有，不匯出
                    if name.starts_with('_') {
                        continue;
                    }
                    definitions.insert(
                        name.clone(),
                        ModelDefinition::new(name.clone(), module, schema.clone()),
                    );
                }
            }
            None => {
                if let Some(title) = root.get("title").and_then(Value::as_str) {
                    definitions.insert(
                        title.to_string(),
                        ModelDefinition::new(title, module, document.clone()),
                    );
                }
            }
        }

        Ok(Self {
            module: module.to_string(),
            path: path.to_path_buf(),
            definitions,
        })
    }

    pub fn public_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}
