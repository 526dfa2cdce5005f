//! Modification-time based reload of the inputs list.
//!
//! The watcher is polled from the control loop: each call compares the
//! source's mtime with the last successfully loaded one and only re-parses
//! when it moved.

mod config_watcher;


pub use config_watcher::ConfigWatcher;
