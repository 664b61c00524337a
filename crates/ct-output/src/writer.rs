//! The `StatusWriter` trait implemented by all report backends.

use ct_core::{Route, SimTime};
use ct_sim::{SimEvent, SimSnapshot, StopReason};

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Errors are returned to the caller; [`ReportObserver`][crate::ReportObserver]
/// stores them for [`take_error`][crate::ReportObserver::take_error] because
/// observer hooks have no return value.
pub trait StatusWriter {
    /// Report the state before the first turn.
    fn write_welcome(&mut self, route: &Route, snapshot: &SimSnapshot) -> OutputResult<()>;

    /// Report one processed turn: what happened, then where everyone is.
    fn write_status(
        &mut self,
        route:    &Route,
        snapshot: &SimSnapshot,
        events:   &[SimEvent],
    ) -> OutputResult<()>;

    /// Report why the run ended.
    fn write_end(&mut self, time: SimTime, reason: StopReason) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
