//! Construction parameters for a simulation run.

use ct_core::Route;

use crate::{SimError, SimResult};

/// Top-level simulation configuration.
///
/// The application crate may load this from a JSON file (enable the `serde`
/// feature) and pass it to [`SimBuilder`][crate::SimBuilder], which validates
/// it against the route before anything is spawned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// The run stops once the clock is strictly past this value.
    pub max_t: u64,

    /// Time units added to the clock per step.  Must be positive.
    pub delta_t: u64,

    /// Probability that a newly spawned actor is an inspector.
    pub p_inspector: f64,

    /// Probability that a bus reaches its next stop during one step.
    pub p_bus_advancement: f64,

    /// Actors spawned before the first turn.
    pub initial_actors: usize,

    /// Buses placed on distinct, randomly chosen stops before the first turn.
    /// At most the number of stops in the route.
    pub initial_buses: usize,

    /// Minimum time between two actor spawns.
    pub spawn_delay: u64,

    /// A bus carrying strictly more passengers than this is destroyed.
    pub commuters_rage_threshold: usize,

    /// A stop with strictly more waiting actors than this triggers a new bus.
    pub spawn_new_bus_threshold: usize,

    /// RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_t:                    60 * 3,
            delta_t:                  5,
            p_inspector:              0.1,
            p_bus_advancement:        0.95,
            initial_actors:           5,
            initial_buses:            2,
            spawn_delay:              10,
            commuters_rage_threshold: 10,
            spawn_new_bus_threshold:  5,
            seed:                     None,
        }
    }
}

impl SimConfig {
    /// Check the configuration against the route it will run on.
    pub fn validate(&self, route: &Route) -> SimResult<()> {
        if self.delta_t == 0 {
            return Err(SimError::Config(
                "delta_t must be positive, otherwise the clock never advances".into(),
            ));
        }
        if self.max_t.checked_add(self.delta_t).is_none() {
            return Err(SimError::Config(format!(
                "max_t {} plus delta_t {} overflows the clock",
                self.max_t, self.delta_t
            )));
        }
        check_probability("p_inspector", self.p_inspector)?;
        check_probability("p_bus_advancement", self.p_bus_advancement)?;
        if self.initial_buses > route.len() {
            return Err(SimError::Config(format!(
                "initial_buses is {} but the route only has {} stops",
                self.initial_buses,
                route.len()
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> SimResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SimError::Config(format!("{name} must lie in [0, 1], got {p}")));
    }
    Ok(())
}
