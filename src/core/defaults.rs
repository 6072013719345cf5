use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::utils::io;

/// Root configuration structure for seqname.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeqnameConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the command line leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Extra names (or glob patterns) never renamed.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            prefix: default_prefix(),
            exclude: Vec::new(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_directory() -> String {
    ".".to_string()
}

fn default_prefix() -> String {
    "yoga_course_".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If seqname.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full seqname.json config, falling back to defaults on any error.
pub fn load_config() -> SeqnameConfig {
    try_load_config().unwrap_or_default()
}

/// Load seqname.json, surfacing parse errors instead of hiding them.
pub fn try_load_config() -> Result<SeqnameConfig> {
    load_config_from(&paths::seqname_json()?)
}

/// Load a config file. A missing file yields the built-in defaults.
pub fn load_config_from(path: &Path) -> Result<SeqnameConfig> {
    if !path.exists() {
        return Ok(SeqnameConfig::default());
    }

    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to seqname.json (creates it and its directory if missing).
pub fn save_config(config: &SeqnameConfig) -> Result<()> {
    save_config_to(config, &paths::seqname_json()?)
}

pub fn save_config_to(config: &SeqnameConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize seqname.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Delete seqname.json (reset to defaults). Returns whether a file was removed.
pub fn reset_config() -> Result<bool> {
    reset_config_at(&paths::seqname_json()?)
}

pub fn reset_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to seqname.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::seqname_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

/// Set `value` at a JSON pointer inside `config`, creating intermediate objects.
pub fn set_json_pointer(config: &mut Value, pointer: &str, value: Value) -> Result<()> {
    let Some(path) = pointer.strip_prefix('/') else {
        return Err(Error::validation_invalid_argument(
            "pointer",
            "JSON pointer must start with '/'",
            Some(pointer.to_string()),
        ));
    };

    let segments: Vec<String> = path
        .split('/')
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect();

    let Some((last, parents)) = segments.split_last() else {
        return Err(Error::validation_invalid_argument(
            "pointer",
            "JSON pointer is empty",
            Some(pointer.to_string()),
        ));
    };

    let mut current = config;
    for segment in parents {
        current = match current {
            Value::Object(map) => map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(serde_json::Map::new())),
            _ => {
                return Err(Error::config_invalid_value(
                    pointer,
                    None,
                    format!("'{}' is not an object", segment),
                ))
            }
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        _ => Err(Error::config_invalid_value(
            pointer,
            None,
            "parent of the pointer target is not an object",
        )),
    }
}

/// Apply a pointer update to a typed config, rejecting values that no longer deserialize.
pub fn set_config_value(config: &SeqnameConfig, pointer: &str, value: Value) -> Result<SeqnameConfig> {
    let mut json = serde_json::to_value(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize config".to_string()))
    })?;

    set_json_pointer(&mut json, pointer, value)?;

    serde_json::from_value(json).map_err(|e| {
        Error::config_invalid_value(pointer, None, format!("value does not fit the config: {}", e))
    })
}
