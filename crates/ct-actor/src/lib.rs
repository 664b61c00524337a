//! `ct-actor`: the people of the commute transit simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`mark`]      | `Sex`, `Mark` (role mark `M` / `F` / `T`), `Location`      |
//! | [`names`]     | Fixed name pools for riders and inspectors                 |
//! | [`actor`]     | `Actor`, `ActorKind`, `InspectorTraits` and the thresholds |
//! | [`roster`]    | `ActorRoster`, the engine's set of active actors           |
//!
//! An actor is either a rider or an inspector.  Both share identity,
//! position, ticket state and aging; they differ in when they give up and in
//! what they do to other passengers.  The variants are a closed enum, not a
//! trait hierarchy.

pub mod actor;
pub mod mark;
pub mod names;
pub mod roster;


pub use actor::{
    Actor, ActorKind, InspectorTraits, INSPECTOR_MAX_IDLE_TIME, INSPECTOR_MAX_WORKTIME,
    P_HAS_TICKET, P_MALE, RIDER_PATIENCE,
};
pub use mark::{Location, Mark, Sex};
pub use roster::ActorRoster;
