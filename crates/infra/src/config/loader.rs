//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. If a config file is found, load it (missing fields keep their defaults)
//! 3. Apply environment variable overrides on top
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ASNALO_GEMINI_API_KEY` (or `GEMINI_API_KEY`): generation service credential
//! - `ASNALO_GEMINI_BASE_URL`: generation service base URL
//! - `ASNALO_GEMINI_FAST_MODEL`: model id for drafting and note summaries
//! - `ASNALO_GEMINI_DEEP_MODEL`: model id for health analysis and reports
//! - `ASNALO_GATEWAY_TIMEOUT_SECS`: per-request timeout in seconds
//! - `ASNALO_LOG_LEVEL`: `EnvFilter` directive
//! - `ASNALO_LOG_JSON`: emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./asnalo.{toml,json}` or `./config.{toml,json}` (current working directory)
//! 2. The same names in the parent directory
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use asnalo_domain::{Config, Result, SfaError};

pub const ENV_API_KEY: &str = "ASNALO_GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "ASNALO_GEMINI_BASE_URL";
pub const ENV_FAST_MODEL: &str = "ASNALO_GEMINI_FAST_MODEL";
pub const ENV_DEEP_MODEL: &str = "ASNALO_GEMINI_DEEP_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "ASNALO_GATEWAY_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "ASNALO_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "ASNALO_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] = ["asnalo.toml", "asnalo.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Reads the first config file found by [`find_config_file`] (or defaults
/// when there is none) and applies environment overrides on top.
///
/// # Errors
/// Returns `SfaError::Config` if:
/// - A config file exists but cannot be read or parsed
/// - An environment variable holds an unparseable value
pub fn load() -> Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, starting from defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from environment variables only
///
/// Unset variables keep their built-in defaults.
///
/// # Errors
/// Returns `SfaError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overlay environment variables onto an existing configuration
///
/// # Errors
/// Returns `SfaError::Config` if a numeric variable cannot be parsed.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(key) = env_opt(ENV_API_KEY).or_else(|| env_opt(ENV_API_KEY_FALLBACK)) {
        config.gateway.api_key = Some(key);
    }
    if let Some(url) = env_opt(ENV_BASE_URL) {
        config.gateway.base_url = url;
    }
    if let Some(model) = env_opt(ENV_FAST_MODEL) {
        config.gateway.fast_model = model;
    }
    if let Some(model) = env_opt(ENV_DEEP_MODEL) {
        config.gateway.deep_model = model;
    }
    if let Some(secs) = env_opt(ENV_TIMEOUT_SECS) {
        config.gateway.timeout_secs = secs
            .parse::<u64>()
            .map_err(|e| SfaError::Config(format!("Invalid gateway timeout: {}", e)))?;
    }
    if let Some(level) = env_opt(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);
    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SfaError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SfaError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            SfaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SfaError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SfaError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SfaError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SfaError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SfaError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search multiple paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
            dirs.push(exe_dir.join(".."));
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating blank values as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
