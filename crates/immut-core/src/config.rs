//! Configuration loading and parsing
//!
//! Loads `immut.toml` from the analyzed directory or any ancestor. Unknown
//! keys are reported as warnings rather than errors so a newer config keeps
//! working against an older binary.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::mutability::{DestructuringMode, MutabilityOptions};
use crate::rules::Severity;

pub const CONFIG_FILENAME: &str = "immut.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["include", "exclude", "rules"];
const KNOWN_RULES_KEYS: &[&str] = &["enabled", "disabled", "severity", "prefer-const"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    #[serde(default)]
    pub severity: HashMap<String, SeverityValue>,
    #[serde(rename = "prefer-const")]
    pub prefer_const: PreferConstConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreferConstConfig {
    pub destructuring: DestructuringValue,
    pub ignore_read_before_assign: bool,
    pub ignored_initializers: Vec<String>,
}

impl From<PreferConstConfig> for MutabilityOptions {
    fn from(value: PreferConstConfig) -> Self {
        MutabilityOptions {
            destructuring: value.destructuring.into(),
            ignore_read_before_assign: value.ignore_read_before_assign,
            ignored_initializers: value.ignored_initializers,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DestructuringValue {
    #[default]
    Any,
    All,
}

impl From<DestructuringValue> for DestructuringMode {
    fn from(value: DestructuringValue) -> Self {
        match value {
            DestructuringValue::Any => DestructuringMode::Any,
            DestructuringValue::All => DestructuringMode::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityValue {
    Error,
    Warning,
    Info,
    Hint,
}

impl From<SeverityValue> for Severity {
    fn from(value: SeverityValue) -> Self {
        match value {
            SeverityValue::Error => Severity::Error,
            SeverityValue::Warning => Severity::Warning,
            SeverityValue::Info => Severity::Info,
            SeverityValue::Hint => Severity::Hint,
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = detect_unknown_keys(&content);

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    if let Some(toml::Value::Table(rules)) = table.get("rules") {
        let known_rules: HashSet<&str> = KNOWN_RULES_KEYS.iter().copied().collect();
        for key in rules.keys() {
            if !known_rules.contains(key.as_str()) {
                warnings.push(format!("Unknown config option in [rules]: '{}'", key));
            }
        }
    }

    warnings
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    find_config_file(start_dir)
        .and_then(|path| load_config(&path).ok())
        .unwrap_or_default()
}

pub fn load_config_or_default_with_warnings(start_dir: &Path) -> ConfigResult {
    match find_config_file(start_dir) {
        Some(path) => load_config_with_warnings(&path).unwrap_or_default(),
        None => ConfigResult::default(),
    }
}
