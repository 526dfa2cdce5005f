//! The poll loop itself.

use rfgate_common::{logical_state, RfgateError, Transition};
use rfgate_config::{ConfigWatcher, InputDescriptor, InputSource};
use rfgate_platform::{CommandRunner, GpioPort};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::state::StateCache;
use super::types::PollTiming;

/// Samples configured inputs and dispatches commands on edges.
pub struct PollLoop<S, G, R> {
    watcher: ConfigWatcher<S>,
    gpio: G,
    runner: R,
    states: StateCache,
    timing: PollTiming,
}

impl<S, G, R> PollLoop<S, G, R>
where
    S: InputSource,
    G: GpioPort,
    R: CommandRunner,
{
    /// Seed the state cache and claim every configured pin as input.
    pub fn new(
        mut watcher: ConfigWatcher<S>,
        mut gpio: G,
        runner: R,
        timing: PollTiming,
    ) -> Result<Self, RfgateError> {
        let inputs = watcher.get_inputs();
        let states = StateCache::seeded(&inputs);

        info!("Configure GPIO:");
        for input in inputs.iter() {
            info!("\t {} - PIN {}", input.name, input.pin);
            gpio.configure_input(input.pin)?;
        }

        Ok(Self {
            watcher,
            gpio,
            runner,
            states,
            timing,
        })
    }

    /// Poll until `shutdown` is cancelled or a pin fails.
    pub async fn run(&mut self, shutdown: CancellationToken) -> Result<(), RfgateError> {
        info!("polling inputs");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                pass = self.poll_once() => {
                    pass?;
                }
            }
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.timing.cycle_interval) => {}
            }
        }
        info!("poll loop stopped");
        Ok(())
    }

    /// One pass over the current inputs, in configuration order.
    ///
    /// Returns the transitions observed. Stops at the first read failure
    /// without touching the remaining inputs.
    pub async fn poll_once(&mut self) -> Result<Vec<Transition>, RfgateError> {
        let inputs = self.watcher.get_inputs();
        let mut transitions = Vec::new();

        for input in inputs.iter() {
            if let Some(transition) = self.poll_input(input)? {
                transitions.push(transition);
            }
            tokio::time::sleep(self.timing.pin_delay).await;
        }

        Ok(transitions)
    }

    fn poll_input(&mut self, input: &InputDescriptor) -> Result<Option<Transition>, RfgateError> {
        if !self.gpio.is_configured(input.pin) {
            info!("configuring added input {} - PIN {}", input.name, input.pin);
            self.gpio.configure_input(input.pin)?;
        }
        let cached = self.states.get_or_seed(input);

        let raw = self.gpio.read_level(input.pin).map_err(|e| {
            error!("failed to read input {} - PIN {}: {e}", input.name, input.pin);
            e
        })?;
        let state = logical_state(raw);
        if state == cached {
            return Ok(None);
        }

        self.states.set(&input.name, state);
        let transition = Transition {
            name: input.name.clone(),
            pin: input.pin,
            state,
        };
        info!("{transition}");

        let command = input.command_for(state);
        debug!("dispatching '{command}'");
        self.runner.run(command);

        Ok(Some(transition))
    }

    /// Release all claimed pins.
    pub fn shutdown(&mut self) {
        self.gpio.release_all();
    }
}

#[cfg(test)]
impl<S, G, R> PollLoop<S, G, R> {
    pub fn states(&self) -> &StateCache {
        &self.states
    }

    pub fn watcher(&self) -> &ConfigWatcher<S> {
        &self.watcher
    }
}
