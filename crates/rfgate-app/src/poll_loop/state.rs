//! Last known logical state per input name.

use std::collections::HashMap;

use rfgate_config::InputDescriptor;
use tracing::info;

/// Logical state cache keyed by input name.
///
/// Entries are never removed: an input dropped from the config keeps its
/// last state, and comes back with it if re-added under the same name.
#[derive(Debug, Default, Clone)]
pub struct StateCache {
    states: HashMap<String, bool>,
}

impl StateCache {
    /// Seed every input from its `normally` field.
    pub fn seeded(inputs: &[InputDescriptor]) -> Self {
        let states = inputs
            .iter()
            .map(|input| (input.name.clone(), input.initial_state()))
            .collect();
        Self { states }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.states.get(name).copied()
    }

    /// Cached state, seeding inputs that were added by a reload.
    pub fn get_or_seed(&mut self, input: &InputDescriptor) -> bool {
        *self
            .states
            .entry(input.name.clone())
            .or_insert_with(|| {
                let state = input.initial_state();
                info!(
                    "seeding new input {} - PIN {} with state {}",
                    input.name,
                    input.pin,
                    u8::from(state)
                );
                state
            })
    }

    pub fn set(&mut self, name: &str, state: bool) {
        self.states.insert(name.to_string(), state);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, normally: i64) -> InputDescriptor {
        InputDescriptor {
            name: name.into(),
            pin: 5,
            normally,
            message_on_false: "off".into(),
            message_on_true: "on".into(),
        }
    }

    #[test]
    fn seeded_follows_normally() {
        let cache = StateCache::seeded(&[input("door", 0), input("window", 1)]);
        assert_eq!(cache.get("door"), Some(true));
        assert_eq!(cache.get("window"), Some(false));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn later_duplicate_wins_when_seeding() {
        let cache = StateCache::seeded(&[input("door", 0), input("door", 1)]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("door"), Some(false));
    }

    #[test]
    fn get_or_seed_keeps_existing_state() {
        let mut cache = StateCache::seeded(&[input("door", 0)]);
        cache.set("door", false);
        assert!(!cache.get_or_seed(&input("door", 0)));
    }

    #[test]
    fn get_or_seed_seeds_new_inputs() {
        let mut cache = StateCache::default();
        assert!(cache.is_empty());
        assert!(cache.get_or_seed(&input("gate", 0)));
        assert_eq!(cache.get("gate"), Some(true));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(StateCache::default().get("door"), None);
    }
}
