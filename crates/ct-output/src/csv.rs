//! CSV backend.
//!
//! One stream, one header.  Every turn appends an `actor` record per actor
//! and a `bus` record per bus, each tagged with the clock; columns that do
//! not apply to a record kind are left empty.

use std::io::Write;

use csv::Writer;
use ct_core::{Route, SimTime};
use ct_sim::{SimEvent, SimSnapshot, StopReason};

use crate::row::{actor_rows, bus_rows, ActorRow, BusRow};
use crate::writer::StatusWriter;
use crate::{OutputError, OutputResult};

pub const HEADER: [&str; 13] = [
    "time",
    "record",
    "id",
    "name",
    "hometown",
    "position",
    "travel_time",
    "has_ticket",
    "mark",
    "at_stop",
    "passengers",
    "tricksters",
    "inspectors",
];

/// Writes per-turn actor and bus records to any [`Write`] sink.
pub struct CsvWriter<W: Write> {
    out:      Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(out);
        out.write_record(HEADER)?;
        Ok(Self { out, finished: false })
    }

    /// Flush and give back the sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }

    fn write_actor(&mut self, row: &ActorRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.time.to_string(),
            "actor".to_owned(),
            row.id.to_string(),
            row.name.to_owned(),
            row.hometown.clone(),
            row.position.clone(),
            row.travel_time.to_string(),
            (row.has_ticket as u8).to_string(),
            row.mark.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ])?;
        Ok(())
    }

    fn write_bus(&mut self, row: &BusRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.time.to_string(),
            "bus".to_owned(),
            row.id.to_string(),
            String::new(),
            String::new(),
            row.last_stop.clone(),
            String::new(),
            String::new(),
            String::new(),
            (row.at_stop as u8).to_string(),
            row.passengers.to_string(),
            row.tricksters.to_string(),
            row.inspectors.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshot(&mut self, route: &Route, snapshot: &SimSnapshot) -> OutputResult<()> {
        for row in actor_rows(snapshot, route) {
            self.write_actor(&row)?;
        }
        for row in bus_rows(snapshot, route) {
            self.write_bus(&row)?;
        }
        Ok(())
    }
}

impl<W: Write> StatusWriter for CsvWriter<W> {
    fn write_welcome(&mut self, route: &Route, snapshot: &SimSnapshot) -> OutputResult<()> {
        self.write_snapshot(route, snapshot)
    }

    fn write_status(
        &mut self,
        route:    &Route,
        snapshot: &SimSnapshot,
        _events:  &[SimEvent],
    ) -> OutputResult<()> {
        self.write_snapshot(route, snapshot)
    }

    fn write_end(&mut self, _time: SimTime, _reason: StopReason) -> OutputResult<()> {
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
