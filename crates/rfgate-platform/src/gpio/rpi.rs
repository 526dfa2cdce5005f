//! Raspberry Pi GPIO backed by `rppal`.

use std::collections::HashMap;

use rfgate_common::board::bcm_for_board;
use rfgate_common::{BoardPin, GpioError};
use rppal::gpio::{Gpio, InputPin};
use tracing::{debug, info};

/// Memory-mapped GPIO on a Raspberry Pi, using physical pin numbering.
pub struct RpiGpio {
    gpio: Gpio,
    pins: HashMap<BoardPin, InputPin>,
}

impl RpiGpio {
    /// Open the GPIO peripheral. Fails off-device or without permissions.
    pub fn new() -> Result<Self, GpioError> {
        let gpio = Gpio::new().map_err(|e| GpioError::Unavailable(e.to_string()))?;
        Ok(Self {
            gpio,
            pins: HashMap::new(),
        })
    }
}

impl super::GpioPort for RpiGpio {
    fn configure_input(&mut self, pin: BoardPin) -> Result<(), GpioError> {
        if self.pins.contains_key(&pin) {
            return Ok(());
        }

        let bcm = bcm_for_board(pin).ok_or(GpioError::InvalidPin(pin))?;
        let input = self
            .gpio
            .get(bcm)
            .map_err(|e| GpioError::PinSetup {
                pin,
                reason: e.to_string(),
            })?
            .into_input();

        debug!("board pin {pin} claimed as input (BCM {bcm})");
        self.pins.insert(pin, input);
        Ok(())
    }

    fn read_level(&mut self, pin: BoardPin) -> Result<bool, GpioError> {
        self.pins
            .get(&pin)
            .map(InputPin::is_high)
            .ok_or_else(|| GpioError::PinRead {
                pin,
                reason: "pin is not configured as input".into(),
            })
    }

    fn is_configured(&self, pin: BoardPin) -> bool {
        self.pins.contains_key(&pin)
    }

    fn release_all(&mut self) {
        let count = self.pins.len();
        // Dropping an rppal pin restores its previous mode.
        self.pins.clear();
        info!("released {count} gpio pins");
    }
}
