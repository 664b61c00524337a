//! The `Sim` struct: one turn of processing and one step of time.

use ct_actor::{Actor, ActorRoster};
use ct_core::{ActorId, BusId, IdAllocator, Route, SimRng, SimTime, Stop};
use ct_fleet::{Bus, Fleet};

use crate::{SimConfig, SimEvent, SimObserver, SimSnapshot, StopReason};

/// The simulation engine.
///
/// A run alternates two operations, driven from outside:
///
/// 1. [`process_turn`](Self::process_turn): spawn, arrivals, terminus
///    unloading, inspection, boarding, give-ups, overcrowding, bus dispatch.
///    Rosters change; the clock does not.
/// 2. [`step_forward`](Self::step_forward): buses roll to advance, the clock
///    and every actor age by `delta_t`, termination is checked.
///
/// Every actor in the roster is either waiting at a stop or aboard exactly
/// one bus.  Dropping an actor removes it from its bus and from the roster
/// in the same call.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:      SimConfig,
    pub(crate) route:       Route,
    pub(crate) clock:       SimTime,
    pub(crate) last_spawn:  SimTime,
    pub(crate) actors:      ActorRoster,
    pub(crate) fleet:       Fleet,
    /// Narrative records for the current turn; reset by `process_turn`.
    pub(crate) events:      Vec<SimEvent>,
    pub(crate) running:     bool,
    pub(crate) stop_reason: Option<StopReason>,
    pub(crate) rng:         SimRng,
    pub(crate) actor_ids:   IdAllocator<ActorId>,
    pub(crate) bus_ids:     IdAllocator<BusId>,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    #[inline]
    pub fn last_spawn(&self) -> SimTime {
        self.last_spawn
    }

    #[inline]
    pub fn actors(&self) -> &ActorRoster {
        &self.actors
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Narrative records produced by the most recent `process_turn`.
    #[inline]
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// `false` once the simulation has stopped; no further turns run.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The generator every random decision is drawn from.
    #[inline]
    pub fn rng(&self) -> &SimRng {
        &self.rng
    }

    /// Read-only projection of all actors and buses.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot::capture(self.clock, &self.actors, &self.fleet)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Stop the simulation at the driver's request.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.stop_reason = Some(StopReason::UserStopped);
            tracing::info!(time = self.clock.0, "simulation stopped by driver");
        }
    }

    /// One full turn: `process_turn`, then `step_forward`, reporting to
    /// `observer` in between.  Returns whether the simulation is still
    /// running afterwards.
    pub fn run_turn<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if !self.running {
            return false;
        }
        self.process_turn();
        observer.on_turn_processed(&self.route, &self.snapshot(), &self.events);
        self.step_forward();
        observer.on_step(self.clock);
        if let (false, Some(reason)) = (self.running, self.stop_reason) {
            observer.on_sim_end(self.clock, reason);
        }
        self.running
    }

    /// Run turns until the simulation stops on its own.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.run_turn(observer) {}
    }

    // ── Entity creation ───────────────────────────────────────────────────

    /// Spawn a random actor (an inspector with probability `p_inspector`)
    /// at a random source stop and record the spawn time.
    pub fn spawn_actor(&mut self) -> SimEvent {
        let id = self.actor_ids.allocate();
        let actor = if self.rng.gen_bool(self.config.p_inspector) {
            Actor::spawn_inspector(id, &self.route, &mut self.rng)
        } else {
            Actor::spawn_rider(id, &self.route, &mut self.rng)
        };
        let event = SimEvent::ActorSpawned {
            time:      self.clock,
            actor:     id,
            name:      actor.name(),
            inspector: actor.is_inspector(),
            stop:      actor.home(),
            pronoun:   actor.possessive_pronoun(),
        };
        tracing::debug!(
            actor = id.0,
            inspector = actor.is_inspector(),
            stop = actor.home().0,
            "actor spawned"
        );
        self.actors.insert(actor);
        self.last_spawn = self.clock;
        event
    }

    /// Add an actor built by `make` from the next free id.
    ///
    /// Lets callers place hand-crafted riders and inspectors while the
    /// engine stays the only source of ids.  `make` must build the actor
    /// with the id it is handed; an actor carrying any other id is discarded
    /// and `None` is returned.
    pub fn add_actor(&mut self, make: impl FnOnce(ActorId) -> Actor) -> Option<ActorId> {
        let id = self.actor_ids.allocate();
        let actor = make(id);
        if actor.id() != id {
            tracing::warn!(
                expected = id.0,
                got = actor.id().0,
                "actor built with foreign id discarded"
            );
            return None;
        }
        self.actors.insert(actor);
        Some(id)
    }

    /// Put a new, empty bus at `stop`.
    pub fn spawn_bus(&mut self, stop: Stop) -> BusId {
        let id = self.bus_ids.allocate();
        self.fleet.insert(Bus::new(id, stop, self.config.p_bus_advancement));
        tracing::debug!(bus = id.0, stop = stop.0, "bus spawned");
        id
    }

    // ── process_turn ──────────────────────────────────────────────────────

    /// Run the decision pass of one turn.  Does not advance time.
    pub fn process_turn(&mut self) {
        self.events.clear();
        if !self.running {
            return;
        }

        if self.clock.since(self.last_spawn) >= self.config.spawn_delay {
            let event = self.spawn_actor();
            self.events.push(event);
        }

        for bus in self.fleet.at_stop() {
            self.serve_stop(bus);
        }

        self.destroy_overcrowded();
        self.dispatch_bus_if_crowded();
    }

    fn serve_stop(&mut self, bus_id: BusId) {
        let Some(bus) = self.fleet.get(bus_id) else {
            return;
        };
        let stop = bus.last_stop();
        self.events.push(SimEvent::BusArrived { bus: bus_id, stop });

        if stop.is_terminus() {
            self.unload_at_terminus(bus_id);
            return;
        }

        if bus.has_inspector(&self.actors) {
            self.inspect(bus_id);
        }

        let waiting = self.actors.waiting_at(stop);
        let collected = match self.fleet.get_mut(bus_id) {
            Some(bus) => bus.board(&waiting, &mut self.actors),
            None => 0,
        };
        if collected > 0 {
            tracing::debug!(bus = bus_id.0, stop = stop.0, collected, "passengers boarded");
            self.events.push(SimEvent::PassengersCollected { bus: bus_id, count: collected });
        }

        let tired: Vec<ActorId> = match self.fleet.get(bus_id) {
            Some(bus) => bus
                .passengers()
                .iter()
                .copied()
                .filter(|&id| self.actors.get(id).is_some_and(Actor::wants_to_drop))
                .collect(),
            None => Vec::new(),
        };
        if !tired.is_empty() {
            self.drop_passengers(bus_id, &tired);
            self.events.push(SimEvent::PassengersGaveUp { bus: bus_id, actors: tired });
        }
    }

    /// Every rider aboard leaves the bus and the simulation.  Inspectors stay.
    fn unload_at_terminus(&mut self, bus_id: BusId) {
        let Some(bus) = self.fleet.get(bus_id) else {
            return;
        };
        let had_passengers = !bus.is_empty();
        let riders = bus.riders(&self.actors);
        self.events.push(SimEvent::TerminusReached { bus: bus_id, had_passengers });

        if riders.is_empty() {
            return;
        }
        let named: Vec<(ActorId, &'static str)> = riders
            .iter()
            .filter_map(|&id| self.actors.get(id).map(|a| (id, a.name())))
            .collect();
        self.drop_passengers(bus_id, &riders);
        tracing::debug!(bus = bus_id.0, riders = riders.len(), "riders arrived at terminus");
        self.events.push(SimEvent::RidersDisembarked { bus: bus_id, riders: named });
    }

    /// Each inspector aboard scans the ticketless riders in boarding order
    /// and expels at most one of them: the first one the draw goes against.
    fn inspect(&mut self, bus_id: BusId) {
        let Some(bus) = self.fleet.get(bus_id) else {
            return;
        };
        let inspectors = bus.inspectors(&self.actors);
        let mut graced = 0;
        let mut expelled = 0;

        for inspector_id in inspectors {
            let tricksters = match self.fleet.get(bus_id) {
                Some(bus) => bus.tricksters(&self.actors),
                None => return,
            };
            for trickster_id in tricksters {
                let (Some(inspector), Some(trickster)) =
                    (self.actors.get(inspector_id), self.actors.get(trickster_id))
                else {
                    continue;
                };
                let inspector_name = inspector.name();
                let trickster_name = trickster.name();

                if inspector.evaluate_for_expulsion(trickster, &mut self.rng) {
                    self.drop_passengers(bus_id, &[trickster_id]);
                    if let Some(inspector) = self.actors.get_mut(inspector_id) {
                        inspector.record_violation_found();
                    }
                    expelled += 1;
                    tracing::debug!(
                        bus = bus_id.0,
                        inspector = inspector_id.0,
                        trickster = trickster_id.0,
                        "trickster expelled"
                    );
                    self.events.push(SimEvent::TricksterExpelled {
                        bus: bus_id,
                        inspector: inspector_id,
                        inspector_name,
                        trickster: trickster_id,
                        trickster_name,
                    });
                    break;
                }

                graced += 1;
                self.events.push(SimEvent::TricksterGraced {
                    bus: bus_id,
                    inspector: inspector_id,
                    inspector_name,
                    trickster: trickster_id,
                    trickster_name,
                });
            }
        }

        if graced > 0 {
            self.events.push(SimEvent::InspectionOutcome { bus: bus_id, graced, expelled });
        }
    }

    /// Destroy every bus carrying more than `commuters_rage_threshold`
    /// passengers, together with everyone aboard.
    fn destroy_overcrowded(&mut self) {
        for bus_id in self.fleet.overcrowded(self.config.commuters_rage_threshold) {
            let Some(mut bus) = self.fleet.remove(bus_id) else {
                continue;
            };
            let passengers = bus.take_passengers();
            self.actors.remove_all(&passengers);
            tracing::info!(bus = bus_id.0, passengers = passengers.len(), "overcrowded bus destroyed");
            self.events.push(SimEvent::BusDestroyed { bus: bus_id, passengers: passengers.len() });
        }
    }

    /// Send one new bus from the terminus if any stop, checked in route
    /// order, has more than `spawn_new_bus_threshold` actors waiting.  Only
    /// the first crowded stop counts.
    fn dispatch_bus_if_crowded(&mut self) {
        let threshold = self.config.spawn_new_bus_threshold;
        let crowded = self
            .route
            .stops()
            .find(|&stop| self.actors.waiting_count(stop) > threshold);

        if let Some(crowded_stop) = crowded {
            let from = self.route.terminus();
            let bus = self.spawn_bus(from);
            tracing::info!(bus = bus.0, crowded_stop = crowded_stop.0, "bus dispatched from terminus");
            self.events.push(SimEvent::BusDispatched { bus, crowded_stop, from });
        }
    }

    /// Take `ids` off the bus and out of the simulation.
    fn drop_passengers(&mut self, bus_id: BusId, ids: &[ActorId]) {
        if let Some(bus) = self.fleet.get_mut(bus_id) {
            bus.alight(ids);
        }
        self.actors.remove_all(ids);
    }

    // ── step_forward ──────────────────────────────────────────────────────

    /// Advance buses, the clock and every actor by one step, then check
    /// whether the run is over.
    ///
    /// The run ends when the clock passes `max_t` or no rider is left.  When
    /// both hold on the same step the rider condition is reported.
    pub fn step_forward(&mut self) {
        if !self.running {
            return;
        }

        for bus in self.fleet.iter_mut() {
            bus.attempt_advance(&self.route, &mut self.rng);
        }

        self.clock += self.config.delta_t;
        self.actors.age_all(self.config.delta_t);

        if self.clock.0 > self.config.max_t {
            self.finish(StopReason::Timeout);
        }
        if self.actors.rider_count() == 0 {
            self.finish(StopReason::AllRidersArrived);
        }
    }

    fn finish(&mut self, reason: StopReason) {
        self.running = false;
        self.stop_reason = Some(reason);
        tracing::info!(time = self.clock.0, ?reason, "simulation finished");
    }
}
