//! Observer hooks for reporting and data collection.

use ct_core::{Route, SimTime};

use crate::{SimEvent, SimSnapshot, StopReason};

/// Callbacks invoked by [`Sim::run_turn`][crate::Sim::run_turn] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get shared references only;
/// they cannot change the simulation.
pub trait SimObserver {
    /// Called after `process_turn`, before time advances.
    fn on_turn_processed(
        &mut self,
        _route:    &Route,
        _snapshot: &SimSnapshot,
        _events:   &[SimEvent],
    ) {}

    /// Called after `step_forward` with the new clock value.
    fn on_step(&mut self, _time: SimTime) {}

    /// Called once, on the step that stopped the simulation.
    fn on_sim_end(&mut self, _time: SimTime, _reason: StopReason) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
