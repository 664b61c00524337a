//! `ReportObserver<W>`: bridges `SimObserver` to a `StatusWriter`.

use ct_core::{Route, SimTime};
use ct_sim::{SimEvent, SimObserver, SimSnapshot, StopReason};

use crate::writer::StatusWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that reports every turn to any [`StatusWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: StatusWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: StatusWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Report the state before the first turn.
    pub fn welcome(&mut self, route: &Route, snapshot: &SimSnapshot) {
        let result = self.writer.write_welcome(route, snapshot);
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: StatusWriter> SimObserver for ReportObserver<W> {
    fn on_turn_processed(&mut self, route: &Route, snapshot: &SimSnapshot, events: &[SimEvent]) {
        let result = self.writer.write_status(route, snapshot, events);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, time: SimTime, reason: StopReason) {
        let result = self.writer.write_end(time, reason);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
