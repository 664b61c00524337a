//! A single bus.

use ct_actor::{Actor, ActorRoster, Location};
use ct_core::{ActorId, BusId, Route, SimRng, Stop};

/// A bus cycling through the route.
///
/// A bus is either **at a stop** (`at_stop = true`, standing at `last_stop`
/// and able to board or unload passengers) or **in transit** somewhere
/// after `last_stop`.  Each step it rolls once against `p_advance`: success
/// puts it at the next stop, failure leaves it on the road.
#[derive(Clone, Debug)]
pub struct Bus {
    id:         BusId,
    last_stop:  Stop,
    at_stop:    bool,
    p_advance:  f64,
    /// Onboard actors in boarding order.  Order only matters for display and
    /// for the inspection scan.
    passengers: Vec<ActorId>,
}

impl Bus {
    /// A new, empty bus standing at `stop`.
    pub fn new(id: BusId, stop: Stop, p_advance: f64) -> Self {
        Self {
            id,
            last_stop: stop,
            at_stop: true,
            p_advance,
            passengers: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> BusId {
        self.id
    }

    /// Last stop reached (the current stop while `at_stop`).
    #[inline]
    pub fn last_stop(&self) -> Stop {
        self.last_stop
    }

    #[inline]
    pub fn is_at_stop(&self) -> bool {
        self.at_stop
    }

    #[inline]
    pub fn passengers(&self) -> &[ActorId] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn contains(&self, actor: ActorId) -> bool {
        self.passengers.contains(&actor)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Roll against the advancement probability.
    ///
    /// On success the bus reaches the successor of its last stop; on failure
    /// it is in transit for this turn.  Returns whether it advanced.
    pub fn attempt_advance(&mut self, route: &Route, rng: &mut SimRng) -> bool {
        let advanced = rng.gen_bool(self.p_advance);
        if advanced {
            self.last_stop = route.successor(self.last_stop);
        }
        self.at_stop = advanced;
        advanced
    }

    // ── Boarding ──────────────────────────────────────────────────────────

    /// Put the given actors on board and mark them as aboard this bus.
    ///
    /// Ids that are not in `actors` or already aboard are skipped.  Returns
    /// the number of actors that boarded.
    pub fn board(&mut self, ids: &[ActorId], actors: &mut ActorRoster) -> usize {
        let mut boarded = 0;
        for &id in ids {
            if self.contains(id) {
                continue;
            }
            let Some(actor) = actors.get_mut(id) else {
                continue;
            };
            actor.set_location(Location::Aboard(self.id));
            self.passengers.push(id);
            boarded += 1;
        }
        boarded
    }

    /// Take the given actors off the bus.  The engine's roster is untouched.
    /// Returns the number of actors removed.
    pub fn alight(&mut self, ids: &[ActorId]) -> usize {
        let before = self.passengers.len();
        self.passengers.retain(|p| !ids.contains(p));
        before - self.passengers.len()
    }

    /// Empty the bus, returning everyone who was aboard.
    pub fn take_passengers(&mut self) -> Vec<ActorId> {
        std::mem::take(&mut self.passengers)
    }

    // ── Derived queries ───────────────────────────────────────────────────

    fn select(&self, actors: &ActorRoster, pred: impl Fn(&Actor) -> bool) -> Vec<ActorId> {
        self.passengers
            .iter()
            .copied()
            .filter(|&id| actors.get(id).is_some_and(&pred))
            .collect()
    }

    /// Onboard riders without a valid ticket, in boarding order.
    pub fn tricksters(&self, actors: &ActorRoster) -> Vec<ActorId> {
        self.select(actors, Actor::is_trickster)
    }

    /// Onboard inspectors, in boarding order.
    pub fn inspectors(&self, actors: &ActorRoster) -> Vec<ActorId> {
        self.select(actors, Actor::is_inspector)
    }

    /// Onboard riders (everyone but inspectors), in boarding order.
    pub fn riders(&self, actors: &ActorRoster) -> Vec<ActorId> {
        self.select(actors, Actor::is_rider)
    }

    pub fn has_inspector(&self, actors: &ActorRoster) -> bool {
        self.passengers
            .iter()
            .any(|&id| actors.get(id).is_some_and(Actor::is_inspector))
    }
}
