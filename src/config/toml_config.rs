use crate::core::search_path::{default_generated_dir, SearchPath};
use crate::utils::error::{Result, TypesError};
use crate::utils::logger;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub loader: LoaderConfig,
    pub logging: Option<LoggingConfig>,
    /// 設定檔所在目錄，相對路徑以此為基準
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub generated_dir: Option<PathBuf>,
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(TypesError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TypesError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODELS_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| TypesError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// 依設定建立搜尋路徑：generated_dir (或預設目錄) 在前，其餘依序附加
    pub fn search_path(&self) -> SearchPath {
        let mut search_path = SearchPath::new();
        match &self.loader.generated_dir {
            Some(dir) => search_path.prepend(self.resolve(dir)),
            None => search_path.prepend(default_generated_dir()),
        };
        for extra in &self.loader.search_paths {
            search_path.append(self.resolve(extra));
        }
        search_path
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = &self.loader.generated_dir {
            validation::validate_path("loader.generated_dir", &dir.to_string_lossy())?;
        }
        for path in &self.loader.search_paths {
            validation::validate_path("loader.search_paths", &path.to_string_lossy())?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_non_empty_string("logging.level", level)?;
                if logger::filter_for_level(level).is_none() {
                    return Err(TypesError::InvalidConfigValueError {
                        field: "logging.level".to_string(),
                        value: level.clone(),
                        reason: "Not a valid log level or filter directive".to_string(),
                    });
                }
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[loader]
generated_dir = "/opt/taskin/generated"
search_paths = ["/opt/taskin/extra"]

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());

        let search_path = config.search_path();
        assert_eq!(
            search_path.entries(),
            &[
                PathBuf::from("/opt/taskin/generated"),
                PathBuf::from("/opt/taskin/extra")
            ]
        );
    }

    #[test]
    fn test_empty_config_uses_default_dir() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.search_path().entries(), &[default_generated_dir()]);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TASKIN_TYPES_TEST_EXTRA", "/srv/models");

        let toml_content = r#"
[loader]
search_paths = ["${TASKIN_TYPES_TEST_EXTRA}", "${TASKIN_TYPES_TEST_UNSET}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.loader.search_paths[0], PathBuf::from("/srv/models"));
        assert_eq!(
            config.loader.search_paths[1],
            PathBuf::from("${TASKIN_TYPES_TEST_UNSET}")
        );

        std::env::remove_var("TASKIN_TYPES_TEST_EXTRA");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loudest\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let empty_dir = TomlConfig::from_toml_str("[loader]\ngenerated_dir = \"\"\n").unwrap();
        assert!(empty_dir.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[loader\n").unwrap_err();
        assert!(matches!(err, TypesError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file_resolves_relative_paths() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[loader]\ngenerated_dir = \"models/generated\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let base = temp_file.path().parent().unwrap();
        assert_eq!(
            config.search_path().entries(),
            &[base.join("models/generated")]
        );
    }
}
