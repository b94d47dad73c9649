use std::path::PathBuf;
use thiserror::Error;

/// 生成步驟的指令，所有缺少產物的錯誤都會帶上這段文字
pub const REMEDIATION: &str = "Please run 'pnpm build' in the types-rs package.";

#[derive(Error, Debug)]
pub enum TypesError {
    #[error("Generated Rust models not found. Please run 'pnpm build' in the types-rs package.")]
    MissingGeneratedArtifacts {
        #[source]
        source: Box<TypesError>,
    },

    #[error("Generated module '{module}' not found (searched: {searched})")]
    ModuleNotFound { module: String, searched: String },

    #[error("Invalid generated artifact {}: {reason}", .path.display())]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("Exported name '{name}' is not defined by any generated module")]
    ExportNotDefined { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Artifact,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TypesError {
    /// 將任何載入失敗包裝成單一的對外錯誤，保留原始原因
    pub fn missing_artifacts(cause: TypesError) -> Self {
        match cause {
            already @ TypesError::MissingGeneratedArtifacts { .. } => already,
            other => TypesError::MissingGeneratedArtifacts {
                source: Box::new(other),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TypesError::MissingGeneratedArtifacts { .. }
            | TypesError::ModuleNotFound { .. }
            | TypesError::InvalidArtifact { .. }
            | TypesError::ExportNotDefined { .. }
            | TypesError::SerializationError(_) => ErrorCategory::Artifact,
            TypesError::IoError(_) => ErrorCategory::Io,
            TypesError::ConfigError { .. } | TypesError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TypesError::MissingGeneratedArtifacts { .. } => ErrorSeverity::Critical,
            TypesError::IoError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// The innermost error in the `source` chain.
    pub fn root_cause(&self) -> &TypesError {
        match self {
            TypesError::MissingGeneratedArtifacts { source } => source.root_cause(),
            other => other,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TypesError::MissingGeneratedArtifacts { .. }
            | TypesError::ModuleNotFound { .. }
            | TypesError::ExportNotDefined { .. } => REMEDIATION.to_string(),
            TypesError::InvalidArtifact { path, .. } => format!(
                "Delete {} and regenerate it. {}",
                path.display(),
                REMEDIATION
            ),
            TypesError::SerializationError(_) => {
                format!("A generated file is not valid JSON. {}", REMEDIATION)
            }
            TypesError::IoError(_) => {
                "Check that the generated directory is readable".to_string()
            }
            TypesError::ConfigError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            TypesError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TypesError::MissingGeneratedArtifacts { source } => {
                format!("{} (cause: {})", self, source.root_cause())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TypesError>;
