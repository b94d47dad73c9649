use chrono::{DateTime, Local};
use clap::Parser;
use taskin_types::utils::error::ErrorSeverity;
use taskin_types::utils::{logger, validation::Validate};
use taskin_types::{
    CliConfig, Command, GeneratedModels, ModelLoader, SearchPath, TomlConfig, TypesError, EXPORTS,
    VERSION,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔 (可選)
    let config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    init_logging(&cli, &config);
    tracing::info!("Starting taskin-types {}", VERSION);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let search_path = config.search_path();
    tracing::debug!("Search path: {:?}", search_path.entries());

    match cli.command {
        Command::Exports => {
            for name in EXPORTS {
                println!("{}", name);
            }
        }
        Command::Paths => {
            for entry in search_path.entries() {
                println!("{}", entry.display());
            }
        }
        Command::Check => {
            let models = load_or_exit(search_path);
            print_report(&models)?;
            println!("✅ Generated models are up to date (taskin-types {})", VERSION);
        }
        Command::Show { name } => {
            let models = load_or_exit(search_path);
            match models.get(&name) {
                Some(definition) => {
                    println!("{}", serde_json::to_string_pretty(&definition.schema)?);
                }
                None => {
                    eprintln!(
                        "❌ '{}' is not exported. Exported names: {}",
                        name,
                        EXPORTS.join(", ")
                    );
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(cli: &CliConfig, config: &TomlConfig) {
    let json = cli.json_logs || config.json_logs();
    let configured = if cli.verbose {
        None
    } else {
        config.log_level().and_then(logger::filter_for_level)
    };

    match (configured, json) {
        (Some(filter), true) => logger::init_json_logger_with(filter),
        (Some(filter), false) => logger::init_cli_logger_with(filter),
        (None, true) => logger::init_json_logger(cli.verbose),
        (None, false) => logger::init_cli_logger(cli.verbose),
    }
}

fn load_or_exit(search_path: SearchPath) -> GeneratedModels {
    match ModelLoader::new(search_path).load() {
        Ok(models) => models,
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &TypesError) -> ! {
    tracing::error!(
        "❌ Loading generated models failed: {} (Category: {:?}, Severity: {:?})",
        e.user_friendly_message(),
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

fn print_report(models: &GeneratedModels) -> anyhow::Result<()> {
    for artifact in models.artifacts() {
        let modified: DateTime<Local> = std::fs::metadata(&artifact.path)?.modified()?.into();
        println!(
            "📄 {} ({}, modified {})",
            artifact.module,
            artifact.path.display(),
            modified.format("%Y-%m-%d %H:%M:%S")
        );
        println!(
            "   defines: {}",
            artifact.public_names().collect::<Vec<_>>().join(", ")
        );
    }

    for definition in models.definitions() {
        let required = definition.required();
        println!(
            "🔹 {} from '{}': {} properties, required: {}",
            definition.name,
            definition.module,
            definition.properties().count(),
            if required.is_empty() {
                "-".to_string()
            } else {
                required.join(", ")
            }
        );
    }
    Ok(())
}
