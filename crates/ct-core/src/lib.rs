//! `ct-core`: foundational types for the commute transit simulation.
//!
//! This crate is a dependency of every other `ct-*` crate.  It has no `ct-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`, `BusId`, `IdAllocator`                     |
//! | [`time`]        | `SimTime`                                             |
//! | [`rng`]         | `SimRng` (the single simulation-wide generator)       |
//! | [`route`]       | `Stop`, `Route` (the cyclic ring of stops)            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, time and stops.     |

pub mod error;
pub mod ids;
pub mod rng;
pub mod route;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ActorId, BusId, IdAllocator};
pub use rng::SimRng;
pub use route::{Route, Stop};
pub use time::SimTime;
