//! Configuration loader
//!
//! Loads service configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. If `USER_SERVICE_CONFIG` names a file, load it (missing file is an error)
//! 2. Otherwise probe the standard locations for a config file
//! 3. If no file exists, start from [`Config::default`]
//! 4. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `USER_SERVICE_CONFIG`: Explicit config file path
//! - `USER_SERVICE_HOST`: Listen address
//! - `USER_SERVICE_PORT`: Listen port
//! - `USER_SERVICE_DB_PATH`: Database file path
//! - `USER_SERVICE_DB_POOL_SIZE`: Connection pool size
//! - `USER_SERVICE_LOG_LEVEL`: Default log filter directive
//! - `USER_SERVICE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order), each as `.toml` then
//! `.json`:
//! 1. `./user-service.{toml,json}` (current working directory)
//! 2. `./config.{toml,json}` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use mylearn_domain::{Config, Result, UserServiceError};

const CONFIG_PATH_VAR: &str = "USER_SERVICE_CONFIG";
const HOST_VAR: &str = "USER_SERVICE_HOST";
const PORT_VAR: &str = "USER_SERVICE_PORT";
const DB_PATH_VAR: &str = "USER_SERVICE_DB_PATH";
const DB_POOL_SIZE_VAR: &str = "USER_SERVICE_DB_POOL_SIZE";
const LOG_LEVEL_VAR: &str = "USER_SERVICE_LOG_LEVEL";
const LOG_JSON_VAR: &str = "USER_SERVICE_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["user-service.toml", "user-service.json", "config.toml", "config.json"];

/// Load configuration using the file-then-environment strategy
///
/// # Errors
/// Returns `UserServiceError::Config` if:
/// - `USER_SERVICE_CONFIG` points at a missing or unreadable file
/// - A config file exists but its format is invalid
/// - An environment override has an invalid value
pub fn load() -> Result<Config> {
    let explicit = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);

    let base = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(base)
}

/// Overlay environment variables onto `config`
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `UserServiceError::Config` if a numeric variable does not parse.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(host) = env_opt(HOST_VAR) {
        config.server.host = host;
    }
    if let Some(port) = env_opt(PORT_VAR) {
        config.server.port = port
            .parse::<u16>()
            .map_err(|e| UserServiceError::Config(format!("Invalid port: {}", e)))?;
    }
    if let Some(path) = env_opt(DB_PATH_VAR) {
        config.database.path = path;
    }
    if let Some(pool_size) = env_opt(DB_POOL_SIZE_VAR) {
        config.database.pool_size = pool_size
            .parse::<u32>()
            .map_err(|e| UserServiceError::Config(format!("Invalid pool size: {}", e)))?;
    }
    if let Some(level) = env_opt(LOG_LEVEL_VAR) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(LOG_JSON_VAR, config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `UserServiceError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(UserServiceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            UserServiceError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| UserServiceError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| UserServiceError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| UserServiceError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(UserServiceError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_opt(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
