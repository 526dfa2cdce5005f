//! Typed schema for the inputs file.

use rfgate_common::BoardPin;
use serde::{Deserialize, Serialize};

/// Root of the inputs file: a single `inputs` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputsFile {
    pub inputs: Vec<InputDescriptor>,
}

/// One watched input and the commands bound to its transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputDescriptor {
    /// Identifier, also the key of the state cache.
    pub name: String,
    /// Physical header pin.
    pub pin: BoardPin,
    /// Idle convention: `0` starts the input in the `true` state.
    pub normally: i64,
    /// Command run when the input goes to `false`.
    #[serde(rename = "message0")]
    pub message_on_false: String,
    /// Command run when the input goes to `true`.
    #[serde(rename = "message1")]
    pub message_on_true: String,
}

impl InputDescriptor {
    /// Logical state assumed before the first read.
    pub fn initial_state(&self) -> bool {
        self.normally == 0
    }

    /// Command bound to a transition into `state`.
    pub fn command_for(&self, state: bool) -> &str {
        if state {
            &self.message_on_true
        } else {
            &self.message_on_false
        }
    }
}
