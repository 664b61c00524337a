//! Read-only projection of engine state for reporting.

use ct_actor::{ActorRoster, Location, Mark};
use ct_core::{ActorId, BusId, SimTime, Stop};
use ct_fleet::Fleet;

/// One actor as seen by a reporter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActorView {
    pub id:          ActorId,
    pub name:        &'static str,
    pub home:        Stop,
    pub location:    Location,
    pub travel_time: u64,
    pub has_ticket:  bool,
    pub mark:        Mark,
}

/// One bus as seen by a reporter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusView {
    pub id:         BusId,
    pub last_stop:  Stop,
    pub at_stop:    bool,
    pub passengers: usize,
    pub tricksters: usize,
    pub inspectors: usize,
}

/// Every active actor and bus at one moment, both sorted by id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimSnapshot {
    pub time:   SimTime,
    pub actors: Vec<ActorView>,
    pub buses:  Vec<BusView>,
}

impl SimSnapshot {
    pub fn capture(time: SimTime, actors: &ActorRoster, fleet: &Fleet) -> Self {
        let actor_views = actors
            .iter()
            .map(|a| ActorView {
                id:          a.id(),
                name:        a.name(),
                home:        a.home(),
                location:    a.location(),
                travel_time: a.travel_time(),
                has_ticket:  a.has_ticket(),
                mark:        a.mark(),
            })
            .collect();

        let bus_views = fleet
            .iter()
            .map(|b| BusView {
                id:         b.id(),
                last_stop:  b.last_stop(),
                at_stop:    b.is_at_stop(),
                passengers: b.passenger_count(),
                tricksters: b.tricksters(actors).len(),
                inspectors: b.inspectors(actors).len(),
            })
            .collect();

        Self { time, actors: actor_views, buses: bus_views }
    }
}
