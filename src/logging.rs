use tracing::Level;

use crate::config::LoggingConfig;

/// Map a configured level name to a tracing level, falling back to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a console subscriber for applications embedding this crate.
///
/// Returns false if a global subscriber was already set, in which case the
/// existing one is kept.
pub fn init_logging(config: Option<&LoggingConfig>) -> bool {
    let level = config.map_or(Level::INFO, |c| parse_level(&c.level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_max_level(level)
        .try_init()
        .is_ok()
}
