//! Text-adventure backend: narrative lines followed by boxed tables.

use std::io::Write;

use ct_core::{Route, SimTime};
use ct_sim::{SimEvent, SimSnapshot, StopReason};

use crate::narrative::{self, TURN_INTRO, WELCOME};
use crate::table::render_status;
use crate::writer::StatusWriter;
use crate::OutputResult;

/// Writes the human-readable report to any [`Write`] sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Give back the sink, e.g. to inspect a buffer after the run.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusWriter for TextWriter<W> {
    fn write_welcome(&mut self, route: &Route, snapshot: &SimSnapshot) -> OutputResult<()> {
        writeln!(self.out, "{WELCOME}{}", render_status(snapshot, route))?;
        Ok(())
    }

    fn write_status(
        &mut self,
        route:    &Route,
        snapshot: &SimSnapshot,
        events:   &[SimEvent],
    ) -> OutputResult<()> {
        writeln!(self.out, "{TURN_INTRO}")?;
        for event in events {
            writeln!(self.out, "{}", narrative::describe(event, route))?;
        }
        writeln!(self.out, "{}", render_status(snapshot, route))?;
        Ok(())
    }

    fn write_end(&mut self, _time: SimTime, reason: StopReason) -> OutputResult<()> {
        writeln!(self.out, "{}", narrative::stop_reason(reason))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
