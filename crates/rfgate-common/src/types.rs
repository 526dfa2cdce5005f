use std::fmt;

/// Physical pin number on the board header (1-40 on a Raspberry Pi).
pub type BoardPin = u8;

/// Logical state of an input given the raw electrical level.
///
/// Inputs are wired active-low, so a high level reads as `false`.
pub fn logical_state(raw_high: bool) -> bool {
    !raw_high
}

/// An observed change of an input's logical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub name: String,
    pub pin: BoardPin,
    pub state: bool,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - PIN {} - Status {}",
            self.name,
            self.pin,
            u8::from(self.state)
        )
    }
}
