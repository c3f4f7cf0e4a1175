use std::env;
use std::path::{Path, PathBuf};

use crate::utils::parse_flag;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_FILE: &str = "data.json";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_data_file() -> PathBuf {
    let raw = env::var("INVENTORY_DATA_FILE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PathBuf::from(DEFAULT_DATA_FILE)
    } else {
        PathBuf::from(trimmed)
    }
}

pub fn get_host() -> String {
    let raw = env::var("INVENTORY_HOST").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Falls back to [`DEFAULT_PORT`] when unset or not a valid port number.
pub fn get_port() -> u16 {
    env::var("INVENTORY_PORT")
        .ok()
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_degrade_on_load_error() -> bool {
    let raw = env::var("INVENTORY_DEGRADE_ON_LOAD_ERROR").ok();
    parse_flag(raw.as_ref(), "INVENTORY_DEGRADE_ON_LOAD_ERROR", false).unwrap_or(false)
}

pub fn get_cors_origins() -> Vec<String> {
    let raw = env::var("INVENTORY_CORS_ORIGINS").unwrap_or_default();
    split_origins(&raw)
}

pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect()
}

/// Resolved runtime settings. CLI flags take precedence over the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub degrade_on_load_error: bool,
    pub cors_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            host: get_host(),
            port: get_port(),
            data_file: get_data_file(),
            degrade_on_load_error: get_degrade_on_load_error(),
            cors_origins: get_cors_origins(),
        }
    }
}
