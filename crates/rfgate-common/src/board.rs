//! Raspberry Pi 40-pin header layout.
//!
//! Configuration files address inputs by physical header position. The
//! SoC addresses them by BCM line number. This table maps one to the other;
//! power and ground pins have no mapping.

use crate::types::BoardPin;

/// Header pin → BCM line, indexed by `pin - 1`.
const BOARD_TO_BCM: [Option<u8>; 40] = [
    None,     // 1  3V3
    None,     // 2  5V
    Some(2),  // 3
    None,     // 4  5V
    Some(3),  // 5
    None,     // 6  GND
    Some(4),  // 7
    Some(14), // 8
    None,     // 9  GND
    Some(15), // 10
    Some(17), // 11
    Some(18), // 12
    Some(27), // 13
    None,     // 14 GND
    Some(22), // 15
    Some(23), // 16
    None,     // 17 3V3
    Some(24), // 18
    Some(10), // 19
    None,     // 20 GND
    Some(9),  // 21
    Some(25), // 22
    Some(11), // 23
    Some(8),  // 24
    None,     // 25 GND
    Some(7),  // 26
    Some(0),  // 27 ID_SD
    Some(1),  // 28 ID_SC
    Some(5),  // 29
    None,     // 30 GND
    Some(6),  // 31
    Some(12), // 32
    Some(13), // 33
    None,     // 34 GND
    Some(19), // 35
    Some(16), // 36
    Some(26), // 37
    Some(20), // 38
    None,     // 39 GND
    Some(21), // 40
];

/// BCM line wired to the given header pin, if it is a GPIO pin.
pub fn bcm_for_board(pin: BoardPin) -> Option<u8> {
    let index = usize::from(pin).checked_sub(1)?;
    BOARD_TO_BCM.get(index).copied().flatten()
}

/// Whether the header pin can be used as a digital input.
pub fn is_gpio_pin(pin: BoardPin) -> bool {
    bcm_for_board(pin).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_header_pins() {
        assert_eq!(bcm_for_board(3), Some(2));
        assert_eq!(bcm_for_board(5), Some(3));
        assert_eq!(bcm_for_board(11), Some(17));
        assert_eq!(bcm_for_board(40), Some(21));
    }

    #[test]
    fn power_and_ground_pins_have_no_line() {
        for pin in [1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39] {
            assert!(!is_gpio_pin(pin), "pin {pin} should not be gpio");
        }
    }

    #[test]
    fn id_eeprom_pins_are_addressable() {
        assert_eq!(bcm_for_board(27), Some(0));
        assert_eq!(bcm_for_board(28), Some(1));
    }

    #[test]
    fn out_of_range_pins_have_no_line() {
        assert_eq!(bcm_for_board(0), None);
        assert_eq!(bcm_for_board(41), None);
        assert_eq!(bcm_for_board(255), None);
    }

    #[test]
    fn header_exposes_28_gpio_lines() {
        let count = (1..=40).filter(|&p| is_gpio_pin(p)).count();
        assert_eq!(count, 28);
    }
}
