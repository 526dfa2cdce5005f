//! Digital input access.
//!
//! The poll loop only needs to claim a pin as an input and sample its
//! level. [`GpioPort`] captures exactly that so the loop can be driven by
//! real hardware ([`RpiGpio`]) or by a scripted fake in tests.

mod rpi;

pub use rpi::RpiGpio;

use rfgate_common::{BoardPin, GpioError};

/// Input-only GPIO capability addressed by physical header pin.
pub trait GpioPort {
    /// Claim `pin` as an input. Claiming an already configured pin is a no-op.
    fn configure_input(&mut self, pin: BoardPin) -> Result<(), GpioError>;

    /// Raw electrical level of a configured pin, `true` for high.
    fn read_level(&mut self, pin: BoardPin) -> Result<bool, GpioError>;

    /// Whether `pin` has been claimed as an input.
    fn is_configured(&self, pin: BoardPin) -> bool;

    /// Release every claimed pin back to its reset state.
    fn release_all(&mut self);
}
