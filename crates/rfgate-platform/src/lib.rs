pub mod command;
pub mod gpio;

pub use command::{CommandRunner, ShellRunner};
pub use gpio::{GpioPort, RpiGpio};
