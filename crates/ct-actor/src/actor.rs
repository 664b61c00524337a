//! The `Actor` entity and its two variants.
//!
//! # Shared capabilities
//!
//! | Method                  | Rider                         | Inspector                          |
//! |-------------------------|-------------------------------|------------------------------------|
//! | `age(delta)`            | travel time += delta          | travel time and idle time += delta |
//! | `wants_to_drop()`       | travel time ≥ patience        | work time ≥ max or idle ≥ max      |
//! | `name()`                | male / female name pool       | evil name pool                     |
//! | `possessive_pronoun()`  | "his" / "her"                 | "their evil"                       |
//!
//! Equality and ordering look at the id only.

use std::cmp::Ordering;

use ct_core::{ActorId, Route, SimRng, Stop};

use crate::{Location, Mark, Sex, names};

/// Probability that a freshly spawned rider holds a valid ticket.
pub const P_HAS_TICKET: f64 = 0.8;

/// Probability that a freshly spawned actor is male.
pub const P_MALE: f64 = 0.5;

/// Travel time after which a rider gives up and leaves the bus.
pub const RIDER_PATIENCE: u64 = 60;

/// Total work time after which an inspector leaves the bus.
pub const INSPECTOR_MAX_WORKTIME: u64 = 60;

/// Time without finding a violation after which an inspector leaves the bus.
pub const INSPECTOR_MAX_IDLE_TIME: u64 = 30;

// ── InspectorTraits ───────────────────────────────────────────────────────────

/// Per-inspector state.
///
/// The two expulsion probabilities are drawn once when the inspector is
/// created, so two inspectors facing the same ticketless rider can decide
/// differently.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectorTraits {
    p_expel_male:   f64,
    p_expel_female: f64,
    idle_time:      u64,
}

impl InspectorTraits {
    pub fn new(p_expel_male: f64, p_expel_female: f64) -> Self {
        Self { p_expel_male, p_expel_female, idle_time: 0 }
    }

    /// Both thresholds drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut SimRng) -> Self {
        let p_expel_female = rng.random();
        let p_expel_male = rng.random();
        Self::new(p_expel_male, p_expel_female)
    }

    /// Expulsion threshold applied to riders with the given mark.
    ///
    /// Inspectors are never expelled, so their threshold is zero.
    pub fn threshold_for(&self, mark: Mark) -> f64 {
        match mark {
            Mark::RiderMale   => self.p_expel_male,
            Mark::RiderFemale => self.p_expel_female,
            Mark::Inspector   => 0.0,
        }
    }

    /// Time since this inspector last expelled someone.
    #[inline]
    pub fn idle_time(&self) -> u64 {
        self.idle_time
    }

    /// Decide whether `other` gets thrown off the bus.
    ///
    /// Ticket holders are always spared and consume no randomness.  For a
    /// ticketless rider one uniform draw is taken and compared against the
    /// threshold for the rider's mark.
    pub fn evaluate_for_expulsion(&self, other: &Actor, rng: &mut SimRng) -> bool {
        if other.has_ticket() {
            return false;
        }
        match other.mark() {
            Mark::Inspector => false,
            mark => rng.random::<f64>() < self.threshold_for(mark),
        }
    }
}

// ── ActorKind ─────────────────────────────────────────────────────────────────

/// The closed set of actor variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ActorKind {
    Rider,
    Inspector(InspectorTraits),
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// A person waiting for, or riding, a bus.
#[derive(Clone, Debug)]
pub struct Actor {
    id:          ActorId,
    sex:         Sex,
    name:        &'static str,
    home:        Stop,
    location:    Location,
    has_ticket:  bool,
    travel_time: u64,
    kind:        ActorKind,
}

impl Actor {
    /// A rider with explicit attributes, waiting at `home`.
    pub fn new_rider(id: ActorId, sex: Sex, name: &'static str, home: Stop, has_ticket: bool) -> Self {
        Self {
            id,
            sex,
            name,
            home,
            location: Location::Stop(home),
            has_ticket,
            travel_time: 0,
            kind: ActorKind::Rider,
        }
    }

    /// An inspector with explicit attributes, waiting at `home`.  Inspectors
    /// always hold a valid ticket.
    pub fn new_inspector(
        id:     ActorId,
        sex:    Sex,
        name:   &'static str,
        home:   Stop,
        traits: InspectorTraits,
    ) -> Self {
        Self {
            id,
            sex,
            name,
            home,
            location: Location::Stop(home),
            has_ticket: true,
            travel_time: 0,
            kind: ActorKind::Inspector(traits),
        }
    }

    /// A random rider: sex, name, source stop and ticket are all drawn from
    /// `rng`.
    pub fn spawn_rider(id: ActorId, route: &Route, rng: &mut SimRng) -> Self {
        let sex = random_sex(rng);
        let name = names::rider_name(sex, rng);
        let home = route.random_source(rng);
        let has_ticket = rng.gen_bool(P_HAS_TICKET);
        Self::new_rider(id, sex, name, home, has_ticket)
    }

    /// A random inspector.
    pub fn spawn_inspector(id: ActorId, route: &Route, rng: &mut SimRng) -> Self {
        let sex = random_sex(rng);
        let home = route.random_source(rng);
        let name = names::inspector_name(rng);
        let traits = InspectorTraits::random(rng);
        Self::new_inspector(id, sex, name, home, traits)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn home(&self) -> Stop {
        self.home
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn has_ticket(&self) -> bool {
        self.has_ticket
    }

    #[inline]
    pub fn travel_time(&self) -> u64 {
        self.travel_time
    }

    /// Inspector state, or `None` for riders.
    #[inline]
    pub fn inspector(&self) -> Option<&InspectorTraits> {
        match &self.kind {
            ActorKind::Inspector(traits) => Some(traits),
            ActorKind::Rider => None,
        }
    }

    #[inline]
    pub fn is_inspector(&self) -> bool {
        matches!(self.kind, ActorKind::Inspector(_))
    }

    #[inline]
    pub fn is_rider(&self) -> bool {
        matches!(self.kind, ActorKind::Rider)
    }

    /// A rider without a valid ticket.
    #[inline]
    pub fn is_trickster(&self) -> bool {
        self.is_rider() && !self.has_ticket
    }

    pub fn mark(&self) -> Mark {
        match self.kind {
            ActorKind::Rider => Mark::rider(self.sex),
            ActorKind::Inspector(_) => Mark::Inspector,
        }
    }

    pub fn possessive_pronoun(&self) -> &'static str {
        match (&self.kind, self.sex) {
            (ActorKind::Inspector(_), _) => "their evil",
            (ActorKind::Rider, Sex::Male) => "his",
            (ActorKind::Rider, Sex::Female) => "her",
        }
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    /// Add `delta` to the accumulated travel time (and, for inspectors, to
    /// the time since the last violation found).
    pub fn age(&mut self, delta: u64) {
        self.travel_time += delta;
        if let ActorKind::Inspector(traits) = &mut self.kind {
            traits.idle_time += delta;
        }
    }

    pub fn wants_to_drop(&self) -> bool {
        match &self.kind {
            ActorKind::Rider => self.travel_time >= RIDER_PATIENCE,
            ActorKind::Inspector(traits) => {
                self.travel_time >= INSPECTOR_MAX_WORKTIME
                    || traits.idle_time >= INSPECTOR_MAX_IDLE_TIME
            }
        }
    }

    /// Evaluate `other` for expulsion.  Riders never expel anyone.
    pub fn evaluate_for_expulsion(&self, other: &Actor, rng: &mut SimRng) -> bool {
        match &self.kind {
            ActorKind::Inspector(traits) => traits.evaluate_for_expulsion(other, rng),
            ActorKind::Rider => false,
        }
    }

    /// Reset the idle timer after an expulsion.  No-op for riders.
    pub fn record_violation_found(&mut self) {
        if let ActorKind::Inspector(traits) = &mut self.kind {
            traits.idle_time = 0;
        }
    }

    /// Move the actor to `location`.
    #[inline]
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actor {}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

fn random_sex(rng: &mut SimRng) -> Sex {
    if rng.gen_bool(P_MALE) { Sex::Male } else { Sex::Female }
}
