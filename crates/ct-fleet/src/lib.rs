//! `ct-fleet`: buses and the fleet that holds them.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`bus`]     | `Bus`: onboard roster, last stop, random advancement  |
//! | [`fleet`]   | `Fleet`: active buses keyed by `BusId`                |
//!
//! A bus only stores the ids of its passengers.  The actors themselves live
//! in the engine's [`ct_actor::ActorRoster`]; bus queries that need actor
//! attributes (tickets, marks) take the roster by reference.

pub mod bus;
pub mod fleet;


pub use bus::Bus;
pub use fleet::Fleet;
