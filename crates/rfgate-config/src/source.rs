//! Backing sources for the inputs list.

use std::path::PathBuf;
use std::time::SystemTime;

use rfgate_common::ConfigError;

use crate::loader;
use crate::schema::InputDescriptor;

/// Something that can report when it last changed and produce an inputs list.
pub trait InputSource {
    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;

    /// Last modification time of the source.
    fn modified(&self) -> Result<SystemTime, ConfigError>;

    /// Parse and validate the current contents.
    fn load(&self) -> Result<Vec<InputDescriptor>, ConfigError>;
}

/// An inputs file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Fails with [`ConfigError::FileNotFound`] if `path` does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path));
        }
        Ok(Self { path })
    }
}

impl InputSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn modified(&self) -> Result<SystemTime, ConfigError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(self.path.clone())
            } else {
                ConfigError::ParseError(format!("failed to stat {}: {e}", self.path.display()))
            }
        })?;
        metadata.modified().map_err(|e| {
            ConfigError::ParseError(format!(
                "no modification time for {}: {e}",
                self.path.display()
            ))
        })
    }

    fn load(&self) -> Result<Vec<InputDescriptor>, ConfigError> {
        loader::load_from_path(&self.path)
    }
}
