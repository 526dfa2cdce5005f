//! Schema validation for a parsed inputs list.
//!
//! Collects every problem into a single `ConfigError` so a broken file
//! reports all of its mistakes at once.

use std::collections::HashSet;

use rfgate_common::board::is_gpio_pin;
use rfgate_common::ConfigError;

use crate::schema::InputDescriptor;

/// Validate a freshly parsed inputs list.
pub fn validate(inputs: &[InputDescriptor]) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        if input.name.trim().is_empty() {
            errors.push(format!("inputs[{index}].name is empty"));
        }
        if !is_gpio_pin(input.pin) {
            errors.push(format!(
                "inputs[{index}].pin = {} is not a gpio pin on the board header",
                input.pin
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Names that appear more than once, in first-repeat order.
///
/// Duplicates share one state cache entry; callers warn rather than reject.
pub fn duplicate_names(inputs: &[InputDescriptor]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for input in inputs {
        let name = input.name.as_str();
        if !seen.insert(name) && !dupes.contains(&name) {
            dupes.push(name);
        }
    }
    dupes
}
