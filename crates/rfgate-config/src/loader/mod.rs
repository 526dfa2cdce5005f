//! Inputs file loading.
//!
//! The format is picked from the file extension: `.toml` is parsed as TOML,
//! anything else as YAML.


use std::path::Path;

use rfgate_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::{InputDescriptor, InputsFile};
use crate::validation;

/// On-disk format of an inputs file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Parse and validate inputs from a string.
pub fn parse_str(content: &str, format: ConfigFormat) -> Result<Vec<InputDescriptor>, ConfigError> {
    let file: InputsFile = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}")))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?,
    };

    validation::validate(&file.inputs)?;

    for name in validation::duplicate_names(&file.inputs) {
        warn!("input name '{name}' is used more than once, entries will share state");
    }

    Ok(file.inputs)
}

/// Read, parse and validate the inputs file at `path`.
pub fn load_from_path(path: &Path) -> Result<Vec<InputDescriptor>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let inputs = parse_str(&content, ConfigFormat::from_path(path))?;
    debug!("parsed {} inputs from {}", inputs.len(), path.display());
    Ok(inputs)
}
