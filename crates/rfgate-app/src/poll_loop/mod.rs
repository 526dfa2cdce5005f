//! Edge-triggered input polling.
//!
//! Each cycle pulls the current inputs from the config watcher, samples
//! every pin in configuration order and dispatches the bound command when
//! an input's logical state changes.

mod runner;
mod state;
mod types;


pub use runner::PollLoop;
pub use types::PollTiming;
