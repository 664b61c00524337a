//! Narrative event records.
//!
//! The engine appends one record per notable happening while it processes a
//! turn.  The list is cleared at the start of every turn and is never read
//! back by the engine: it exists for reporting only.  Rendering to text lives
//! in `ct-output`.

use ct_core::{ActorId, BusId, SimTime, Stop};

/// Something that happened during [`Sim::process_turn`][crate::Sim::process_turn].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimEvent {
    /// A new actor appeared at a stop.
    ActorSpawned {
        time:      SimTime,
        actor:     ActorId,
        name:      &'static str,
        inspector: bool,
        stop:      Stop,
        pronoun:   &'static str,
    },

    /// A bus is standing at a stop this turn.
    BusArrived { bus: BusId, stop: Stop },

    /// A bus is at the terminus.
    TerminusReached { bus: BusId, had_passengers: bool },

    /// Riders left the bus at the terminus and the simulation with it.
    RidersDisembarked { bus: BusId, riders: Vec<(ActorId, &'static str)> },

    /// An inspector threw a ticketless rider off the bus.
    TricksterExpelled {
        bus:            BusId,
        inspector:      ActorId,
        inspector_name: &'static str,
        trickster:      ActorId,
        trickster_name: &'static str,
    },

    /// An inspector looked at a ticketless rider and let them be.
    TricksterGraced {
        bus:            BusId,
        inspector:      ActorId,
        inspector_name: &'static str,
        trickster:      ActorId,
        trickster_name: &'static str,
    },

    /// Summary of one bus's inspection, recorded only when at least one
    /// trickster was graced.
    InspectionOutcome { bus: BusId, graced: usize, expelled: usize },

    /// Waiting actors boarded the bus.
    PassengersCollected { bus: BusId, count: usize },

    /// Passengers who ran out of patience (or inspectors done with work) left.
    PassengersGaveUp { bus: BusId, actors: Vec<ActorId> },

    /// An overcrowded bus was destroyed along with everyone aboard.
    BusDestroyed { bus: BusId, passengers: usize },

    /// A crowded stop made the operator send a new bus from the terminus.
    BusDispatched { bus: BusId, crowded_stop: Stop, from: Stop },
}

/// Why the simulation stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The clock passed `max_t`.
    Timeout,
    /// No rider is left in the simulation.
    AllRidersArrived,
    /// The driving loop asked to stop.
    UserStopped,
}
