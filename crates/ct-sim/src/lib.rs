//! `ct-sim`: the turn engine of the commute transit simulation.
//!
//! # One turn
//!
//! ```text
//! process_turn():
//!   ① Spawn    : one new actor if `spawn_delay` has elapsed since the last.
//!   ② Stops    : for every bus standing at a stop:
//!                   terminus     → every rider aboard leaves the simulation
//!                   other stops  → inspectors expel ≤ 1 trickster each,
//!                                  waiting actors board,
//!                                  tired passengers leave the simulation
//!   ③ Rage     : buses over `commuters_rage_threshold` are destroyed.
//!   ④ Dispatch : first stop over `spawn_new_bus_threshold` → one new bus.
//! step_forward():
//!   ⑤ Buses roll to advance, clock += delta_t, actors age by delta_t.
//!   ⑥ Stop when clock > max_t or no rider is left.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(SimConfig { seed: Some(7), ..Default::default() })
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! println!("stopped at {} because {:?}", sim.clock(), sim.stop_reason());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use event::{SimEvent, StopReason};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{ActorView, BusView, SimSnapshot};
