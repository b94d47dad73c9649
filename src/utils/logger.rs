use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("taskin_types=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskin_types=info"))
    }
}

/// 解析設定檔中的 log level，例如 "debug" 或完整的 filter 字串
pub fn filter_for_level(level: &str) -> Option<EnvFilter> {
    let directive = if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("taskin_types={}", level)
    };
    EnvFilter::try_new(directive).ok()
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with(default_filter(verbose));
}

pub fn init_cli_logger_with(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    init_json_logger_with(default_filter(verbose));
}

pub fn init_json_logger_with(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
