//! rfgate input configuration.
//!
//! Loads the list of watched inputs from a YAML (or TOML) file, validates
//! it, and keeps it fresh by re-reading the file whenever its modification
//! time changes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rfgate_config::{ConfigWatcher, FileSource};
//!
//! let source = FileSource::new("inputs_pins_command.yml").expect("config missing");
//! let mut watcher = ConfigWatcher::open(source).expect("config invalid");
//! for input in watcher.get_inputs().iter() {
//!     println!("{} on pin {}", input.name, input.pin);
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod source;
pub mod validation;
pub mod watcher;

pub use loader::{load_from_path, parse_str, ConfigFormat};
pub use schema::{InputDescriptor, InputsFile};
pub use source::{FileSource, InputSource};
pub use watcher::ConfigWatcher;

/// Default inputs file name, resolved against the base directory.
pub const DEFAULT_INPUTS_FILE: &str = "inputs_pins_command.yml";
