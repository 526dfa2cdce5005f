//! Core config watcher implementation.

use std::sync::Arc;
use std::time::SystemTime;

use rfgate_common::ConfigError;
use tracing::{info, warn};

use crate::schema::InputDescriptor;
use crate::source::{FileSource, InputSource};

/// Serves the current inputs list, reloading it when the source changes.
///
/// A failed reload keeps the previous list and leaves the recorded mtime
/// alone, so the next call tries again.
pub struct ConfigWatcher<S = FileSource> {
    source: S,
    inputs: Arc<[InputDescriptor]>,
    last_modified: SystemTime,
}

impl<S: InputSource> ConfigWatcher<S> {
    /// Perform the initial load.
    ///
    /// Unlike later reloads, a failure here is returned: there is no
    /// previous list to fall back to.
    pub fn open(source: S) -> Result<Self, ConfigError> {
        let last_modified = source.modified()?;
        let inputs = source.load()?;
        info!("loaded {} inputs from {}", inputs.len(), source.describe());

        Ok(Self {
            source,
            inputs: inputs.into(),
            last_modified,
        })
    }

    /// Current inputs, reloaded first if the source changed.
    pub fn get_inputs(&mut self) -> Arc<[InputDescriptor]> {
        match self.source.modified() {
            Ok(modified) if modified == self.last_modified => {}
            Ok(modified) => self.reload(modified),
            Err(e) => {
                warn!("failed to re-load inputs, going on with the old ones: {e}");
            }
        }
        Arc::clone(&self.inputs)
    }

    fn reload(&mut self, modified: SystemTime) {
        info!("reloading inputs as {} changed", self.source.describe());
        match self.source.load() {
            Ok(inputs) => {
                info!("reloaded {} inputs", inputs.len());
                self.inputs = inputs.into();
                self.last_modified = modified;
            }
            Err(e) => {
                warn!("failed to re-load inputs, going on with the old ones: {e}");
            }
        }
    }

    /// Inputs as of the last successful load, without checking the source.
    pub fn inputs(&self) -> Arc<[InputDescriptor]> {
        Arc::clone(&self.inputs)
    }

    /// Modification time recorded at the last successful load.
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
