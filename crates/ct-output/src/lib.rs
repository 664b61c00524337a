//! `ct-output`: reporting for the commute transit simulation.
//!
//! Two backends render the same turn reports:
//!
//! | Backend      | Output                                                     |
//! |--------------|------------------------------------------------------------|
//! | [`TextWriter`] | narrative lines, then the "SITUATION AT TIME t" tables   |
//! | [`CsvWriter`]  | one `actor` / `bus` record per entity per turn           |
//!
//! Both implement [`StatusWriter`] and write to any `io::Write`; neither
//! opens files.  [`ReportObserver`] drives a writer from the engine's
//! `SimObserver` hooks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{ReportObserver, TextWriter};
//!
//! let mut obs = ReportObserver::new(TextWriter::new(std::io::stdout()));
//! obs.welcome(sim.route(), &sim.snapshot());
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod narrative;
pub mod observer;
pub mod row;
pub mod table;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use narrative::describe;
pub use observer::ReportObserver;
pub use row::{ActorRow, BusRow};
pub use table::render_status;
pub use text::TextWriter;
pub use writer::StatusWriter;
