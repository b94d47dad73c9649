use anyhow::Result;
use taskin_types::utils::validation::Validate;
use taskin_types::{ModelLoader, TomlConfig};
use tempfile::TempDir;

/// 設定檔中的相對路徑以設定檔目錄為基準
#[test]
fn test_config_points_loader_at_custom_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let models_dir = temp_dir.path().join("models");
    std::fs::create_dir(&models_dir)?;
    std::fs::write(
        models_dir.join("task.schema.json"),
        r#"{ "definitions": { "Task": { "type": "object" } } }"#,
    )?;
    std::fs::write(
        models_dir.join("user.schema.json"),
        r#"{ "definitions": { "User": { "type": "object" } } }"#,
    )?;

    let config_path = temp_dir.path().join("taskin-types.toml");
    std::fs::write(
        &config_path,
        "[loader]\ngenerated_dir = \"models\"\n\n[logging]\nlevel = \"info\"\n",
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let search_path = config.search_path();
    assert_eq!(search_path.entries(), &[models_dir.clone()]);

    let models = ModelLoader::new(search_path).load()?;
    assert_eq!(models.task().schema["type"], "object");
    assert_eq!(models.artifacts()[1].path, models_dir.join("user.schema.json"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, taskin_types::TypesError::IoError(_)));
}
