use shared_types::EngineConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse the calendar and fee tables, and store them
/// in the global `OnceLock`. Safe to call multiple times — only the first
/// call has effect.
///
/// If the file is missing or unparseable, an empty calendar and zeroed
/// fee tables are used.
pub fn load_engine_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_engine_config(&contents),
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}) — using empty calendar and zero fee tables");
            EngineConfig::default()
        }
    });
}

/// Parse config contents, falling back to defaults on error.
pub fn parse_engine_config(contents: &str) -> EngineConfig {
    match toml::from_str::<EngineConfig>(contents) {
        Ok(config) => {
            tracing::info!(
                holidays = config.calendar.holidays.len(),
                extension_days = config.calendar.extension_days.len(),
                "engine config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e} — using empty calendar and zero fee tables");
            EngineConfig::default()
        }
    }
}

/// Get the loaded engine config. Returns empty defaults if
/// `load_engine_config()` hasn't been called yet (safe fallback).
pub fn engine_config() -> &'static EngineConfig {
    static DEFAULT: OnceLock<EngineConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(EngineConfig::default))
}
