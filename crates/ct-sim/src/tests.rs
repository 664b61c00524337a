//! Integration tests for ct-sim.

use ct_actor::{Actor, InspectorTraits, Sex};
use ct_core::{ActorId, Stop};

use crate::{Sim, SimBuilder, SimConfig, SimEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// No initial population, no spontaneous spawning, buses always advance.
/// Tests place actors and buses by hand.
fn quiet_config() -> SimConfig {
    SimConfig {
        max_t:                    1_000,
        delta_t:                  5,
        p_inspector:              0.0,
        p_bus_advancement:        1.0,
        initial_actors:           0,
        initial_buses:            0,
        spawn_delay:              u64::MAX,
        commuters_rage_threshold: 10,
        spawn_new_bus_threshold:  5,
        seed:                     Some(42),
    }
}

fn build(config: SimConfig) -> Sim {
    SimBuilder::new(config).build().unwrap()
}

fn add_rider(sim: &mut Sim, stop: Stop, has_ticket: bool) -> ActorId {
    sim.add_actor(|id| Actor::new_rider(id, Sex::Female, "Paola", stop, has_ticket)).unwrap()
}

fn add_inspector(sim: &mut Sim, stop: Stop, p_expel: f64) -> ActorId {
    sim.add_actor(|id| {
        Actor::new_inspector(id, Sex::Male, "Koopa", stop, InspectorTraits::new(p_expel, p_expel))
    })
    .unwrap()
}

fn count_events(sim: &Sim, pred: impl Fn(&SimEvent) -> bool) -> usize {
    sim.events().iter().filter(|&e| pred(e)).count()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ct_core::Route;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = build(SimConfig { seed: Some(1), ..Default::default() });
        assert_eq!(sim.actors().len(), 5);
        assert_eq!(sim.fleet().len(), 2);
        assert!(sim.is_running());
        assert_eq!(sim.clock().0, 0);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn initial_buses_on_distinct_stops() {
        let config = SimConfig { initial_buses: 6, seed: Some(3), ..Default::default() };
        let sim = build(config);
        let mut stops: Vec<Stop> = sim.fleet().iter().map(|b| b.last_stop()).collect();
        stops.sort();
        stops.dedup();
        assert_eq!(stops.len(), 6);
        assert!(sim.fleet().iter().all(|b| b.is_at_stop() && b.is_empty()));
    }

    #[test]
    fn initial_actors_wait_at_their_home() {
        let sim = build(SimConfig { initial_actors: 30, seed: Some(4), ..Default::default() });
        for actor in sim.actors().iter() {
            assert_eq!(actor.location().stop(), Some(actor.home()));
            assert!(!actor.home().is_terminus());
        }
    }

    #[test]
    fn too_many_buses_rejected() {
        let config = SimConfig { initial_buses: 7, ..quiet_config() };
        let result = SimBuilder::new(config).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_delta_rejected() {
        let config = SimConfig { delta_t: 0, ..quiet_config() };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn clock_overflow_rejected() {
        let config = SimConfig {
            max_t: u64::MAX,
            delta_t: u64::MAX / 2 + 1,
            initial_actors: 3,
            ..quiet_config()
        };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));

        let config = SimConfig { max_t: u64::MAX, ..quiet_config() };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));

        // The largest bound the clock can still step past.
        let config = SimConfig { max_t: u64::MAX - 5, delta_t: 5, ..quiet_config() };
        let mut sim = build(config);
        assert!(sim.is_running());
        sim.step_forward();
        assert_eq!(sim.clock().0, 5);
    }

    #[test]
    fn bad_probabilities_rejected() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = SimConfig { p_inspector: p, ..quiet_config() };
            assert!(SimBuilder::new(config).build().is_err(), "p_inspector {p}");
            let config = SimConfig { p_bus_advancement: p, ..quiet_config() };
            assert!(SimBuilder::new(config).build().is_err(), "p_bus_advancement {p}");
        }
    }

    #[test]
    fn custom_route_limits_buses() {
        let route = Route::new(["Hub", "East", "West"]).unwrap();
        let config = SimConfig { initial_buses: 3, ..quiet_config() };
        let sim = SimBuilder::new(config.clone()).route(route.clone()).build().unwrap();
        assert_eq!(sim.route().len(), 3);
        assert_eq!(sim.fleet().len(), 3);

        let config = SimConfig { initial_buses: 4, ..config };
        assert!(SimBuilder::new(config).route(route).build().is_err());
    }

    #[test]
    fn same_seed_same_run() {
        let config = SimConfig { seed: Some(99), initial_actors: 10, ..Default::default() };
        let mut a = build(config.clone());
        let mut b = build(config);
        for _ in 0..30 {
            a.process_turn();
            b.process_turn();
            assert_eq!(a.events(), b.events());
            assert_eq!(a.snapshot(), b.snapshot());
            a.step_forward();
            b.step_forward();
        }
        assert_eq!(a.stop_reason(), b.stop_reason());
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn spawn_waits_for_delay() {
        let mut sim = build(SimConfig {
            spawn_delay: 10,
            initial_actors: 1,
            ..quiet_config()
        });
        let spawned = |sim: &Sim| count_events(sim, |e| matches!(e, SimEvent::ActorSpawned { .. }));

        sim.process_turn(); // t = 0: 0 since last spawn
        assert_eq!(spawned(&sim), 0);
        sim.step_forward();
        sim.process_turn(); // t = 5
        assert_eq!(spawned(&sim), 0);
        sim.step_forward();
        sim.process_turn(); // t = 10
        assert_eq!(spawned(&sim), 1);
        assert_eq!(sim.last_spawn().0, 10);
        sim.step_forward();
        sim.process_turn(); // t = 15
        assert_eq!(spawned(&sim), 0);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut sim = build(SimConfig {
            spawn_delay: 0,
            initial_actors: 3,
            ..quiet_config()
        });
        let mut last = sim.actors().iter().map(|a| a.id()).max().unwrap();
        for _ in 0..20 {
            sim.process_turn();
            for event in sim.events() {
                if let SimEvent::ActorSpawned { actor, .. } = event {
                    assert!(*actor > last);
                    last = *actor;
                }
            }
            sim.step_forward();
        }
        let hand_made = add_rider(&mut sim, Stop(1), true);
        assert!(hand_made > last);
    }

    #[test]
    fn certain_inspector_probability() {
        let sim = build(SimConfig {
            p_inspector: 1.0,
            initial_actors: 20,
            ..quiet_config()
        });
        assert!(sim.actors().iter().all(|a| a.is_inspector()));
    }

    #[test]
    fn add_actor_rejects_foreign_id() {
        let mut sim = build(quiet_config());
        let id = sim.add_actor(|_| Actor::new_rider(ActorId(999), Sex::Male, "Carlo", Stop(1), true));
        assert_eq!(id, None);
        assert!(sim.actors().is_empty());
        assert!(!sim.actors().contains(ActorId(999)));

        // The discarded id stays burnt.
        let next = add_rider(&mut sim, Stop(1), true);
        assert!(sim.actors().contains(next));
    }

    #[test]
    fn bus_ids_strictly_increase() {
        let mut sim = build(SimConfig { initial_buses: 3, ..quiet_config() });
        let max = sim.fleet().iter().map(|b| b.id()).max().unwrap();
        let next = sim.spawn_bus(Stop(2));
        assert!(next > max);
    }
}

// ── process_turn ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod turn_tests {
    use ct_actor::Location;

    use super::*;

    #[test]
    fn waiting_actors_board_at_their_stop() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(3));
        let here = add_rider(&mut sim, Stop(3), true);
        let elsewhere = add_rider(&mut sim, Stop(4), true);

        sim.process_turn();
        assert_eq!(sim.actors().get(here).unwrap().location(), Location::Aboard(bus));
        assert_eq!(sim.actors().get(elsewhere).unwrap().location(), Location::Stop(Stop(4)));
        assert!(sim.events().contains(&SimEvent::PassengersCollected { bus, count: 1 }));
        assert!(sim.events().contains(&SimEvent::BusArrived { bus, stop: Stop(3) }));
    }

    #[test]
    fn bus_in_transit_does_nothing() {
        let mut sim = build(SimConfig { p_bus_advancement: 0.0, ..quiet_config() });
        let bus = sim.spawn_bus(Stop(3));
        add_rider(&mut sim, Stop(4), true);
        sim.process_turn();
        sim.step_forward(); // roll fails: in transit
        assert!(!sim.fleet().get(bus).unwrap().is_at_stop());

        add_rider(&mut sim, Stop(3), true);
        sim.process_turn();
        assert!(sim.fleet().get(bus).unwrap().is_empty());
        assert!(sim.events().is_empty());
    }

    #[test]
    fn terminus_drops_riders_keeps_inspectors() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(5));
        let r1 = add_rider(&mut sim, Stop(5), true);
        let r2 = add_rider(&mut sim, Stop(5), false);
        let inspector = add_inspector(&mut sim, Stop(5), 0.0);

        sim.process_turn(); // everyone boards at Desenzano
        assert_eq!(sim.fleet().get(bus).unwrap().passenger_count(), 3);
        sim.step_forward(); // → Brescia
        assert_eq!(sim.fleet().get(bus).unwrap().last_stop(), Stop::TERMINUS);

        sim.process_turn();
        assert!(!sim.actors().contains(r1));
        assert!(!sim.actors().contains(r2));
        assert!(sim.actors().contains(inspector));
        assert_eq!(sim.fleet().get(bus).unwrap().passengers(), &[inspector]);
        assert!(sim.events().contains(&SimEvent::TerminusReached { bus, had_passengers: true }));
        assert!(sim.events().contains(&SimEvent::RidersDisembarked {
            bus,
            riders: vec![(r1, "Paola"), (r2, "Paola")],
        }));
    }

    #[test]
    fn empty_bus_at_terminus() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop::TERMINUS);
        add_rider(&mut sim, Stop(1), true);
        sim.process_turn();
        assert!(sim.events().contains(&SimEvent::TerminusReached { bus, had_passengers: false }));
        assert_eq!(
            count_events(&sim, |e| matches!(e, SimEvent::RidersDisembarked { .. })),
            0
        );
    }

    #[test]
    fn inspector_expels_first_trickster_only() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(2));
        let inspector = add_inspector(&mut sim, Stop(2), 1.0);
        let first = add_rider(&mut sim, Stop(2), false);
        let second = add_rider(&mut sim, Stop(2), false);
        let honest = add_rider(&mut sim, Stop(2), true);

        sim.process_turn(); // board; the inspector was not aboard yet
        assert_eq!(sim.fleet().get(bus).unwrap().passenger_count(), 4);
        sim.step_forward();

        sim.process_turn();
        assert!(!sim.actors().contains(first));
        assert!(sim.actors().contains(second));
        assert!(sim.actors().contains(honest));
        assert_eq!(count_events(&sim, |e| matches!(e, SimEvent::TricksterExpelled { .. })), 1);
        assert_eq!(count_events(&sim, |e| matches!(e, SimEvent::TricksterGraced { .. })), 0);
        assert_eq!(count_events(&sim, |e| matches!(e, SimEvent::InspectionOutcome { .. })), 0);

        let traits = sim.actors().get(inspector).unwrap().inspector().unwrap().clone();
        assert_eq!(traits.idle_time(), 0, "expulsion resets idle time");
    }

    #[test]
    fn each_inspector_expels_at_most_one() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(1));
        add_inspector(&mut sim, Stop(1), 1.0);
        add_inspector(&mut sim, Stop(1), 1.0);
        for _ in 0..3 {
            add_rider(&mut sim, Stop(1), false);
        }
        sim.process_turn();
        sim.step_forward();
        sim.process_turn();
        assert_eq!(count_events(&sim, |e| matches!(e, SimEvent::TricksterExpelled { .. })), 2);
        let left = sim.fleet().get(bus).unwrap().tricksters(sim.actors());
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn lenient_inspector_graces_everyone() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(1));
        add_inspector(&mut sim, Stop(1), 0.0);
        add_rider(&mut sim, Stop(1), false);
        add_rider(&mut sim, Stop(1), false);
        sim.process_turn();
        sim.step_forward();
        sim.process_turn();
        assert_eq!(count_events(&sim, |e| matches!(e, SimEvent::TricksterGraced { .. })), 2);
        assert!(sim.events().contains(&SimEvent::InspectionOutcome { bus, graced: 2, expelled: 0 }));
        assert_eq!(sim.fleet().get(bus).unwrap().passenger_count(), 3);
    }

    #[test]
    fn expulsion_follows_the_next_draw() {
        let mut sim = build(quiet_config());
        sim.spawn_bus(Stop(1));
        add_inspector(&mut sim, Stop(1), 0.5);
        let trickster = add_rider(&mut sim, Stop(1), false);
        sim.process_turn();
        sim.step_forward();

        let mut peek = sim.rng().clone();
        let draw: f64 = peek.random();
        sim.process_turn();
        assert_eq!(!sim.actors().contains(trickster), draw < 0.5);
    }

    #[test]
    fn tired_passengers_leave_even_when_freshly_boarded() {
        let mut sim = build(quiet_config());
        let bus = sim.spawn_bus(Stop(4));
        let tired = sim.add_actor(|id| {
            let mut a = Actor::new_rider(id, Sex::Male, "Natale", Stop(4), true);
            a.age(ct_actor::RIDER_PATIENCE);
            a
        })
        .unwrap();
        let fresh = add_rider(&mut sim, Stop(4), true);

        sim.process_turn();
        assert!(!sim.actors().contains(tired));
        assert!(sim.actors().contains(fresh));
        assert_eq!(sim.fleet().get(bus).unwrap().passengers(), &[fresh]);
        assert!(sim.events().contains(&SimEvent::PassengersGaveUp { bus, actors: vec![tired] }));
    }

    #[test]
    fn overcrowded_bus_is_destroyed() {
        let mut sim = build(SimConfig { commuters_rage_threshold: 2, ..quiet_config() });
        let bus = sim.spawn_bus(Stop(1));
        let ids: Vec<ActorId> = (0..3).map(|_| add_rider(&mut sim, Stop(1), true)).collect();

        sim.process_turn();
        assert!(sim.fleet().get(bus).is_none());
        for id in ids {
            assert!(!sim.actors().contains(id));
        }
        assert!(sim.events().contains(&SimEvent::BusDestroyed { bus, passengers: 3 }));
    }

    #[test]
    fn bus_at_threshold_survives() {
        let mut sim = build(SimConfig { commuters_rage_threshold: 2, ..quiet_config() });
        let bus = sim.spawn_bus(Stop(1));
        add_rider(&mut sim, Stop(1), true);
        add_rider(&mut sim, Stop(1), true);
        sim.process_turn();
        assert_eq!(sim.fleet().get(bus).unwrap().passenger_count(), 2);
    }

    #[test]
    fn one_new_bus_even_if_many_stops_are_crowded() {
        let mut sim = build(SimConfig { spawn_new_bus_threshold: 1, ..quiet_config() });
        for stop in [Stop(3), Stop(1), Stop(2)] {
            add_rider(&mut sim, stop, true);
            add_rider(&mut sim, stop, true);
        }
        sim.process_turn();
        assert_eq!(sim.fleet().len(), 1);
        let bus = sim.fleet().iter().next().unwrap();
        assert_eq!(bus.last_stop(), Stop::TERMINUS);
        assert!(bus.is_at_stop());
        let dispatched: Vec<&SimEvent> = sim
            .events()
            .iter()
            .filter(|e| matches!(e, SimEvent::BusDispatched { .. }))
            .collect();
        assert_eq!(
            dispatched,
            vec![&SimEvent::BusDispatched { bus: bus.id(), crowded_stop: Stop(1), from: Stop(0) }]
        );
    }

    #[test]
    fn crowd_at_threshold_does_not_dispatch() {
        let mut sim = build(SimConfig { spawn_new_bus_threshold: 2, ..quiet_config() });
        add_rider(&mut sim, Stop(2), true);
        add_rider(&mut sim, Stop(2), true);
        sim.process_turn();
        assert!(sim.fleet().is_empty());
    }

    #[test]
    fn events_reset_every_turn() {
        let mut sim = build(quiet_config());
        sim.spawn_bus(Stop(1));
        add_rider(&mut sim, Stop(2), true);
        sim.process_turn();
        assert!(!sim.events().is_empty());
        // Bus now sits at stop 2 after the step and collects the rider.
        sim.step_forward();
        sim.process_turn();
        assert!(sim
            .events()
            .iter()
            .all(|e| !matches!(e, SimEvent::BusArrived { stop, .. } if *stop == Stop(1))));
    }
}

// ── step_forward and termination ──────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;
    use crate::{NoopObserver, SimObserver, StopReason};
    use ct_core::SimTime;

    #[test]
    fn step_advances_clock_and_ages_actors() {
        let mut sim = build(SimConfig { initial_actors: 4, ..quiet_config() });
        sim.step_forward();
        sim.step_forward();
        assert_eq!(sim.clock(), SimTime(10));
        assert!(sim.actors().iter().all(|a| a.travel_time() == 10));
    }

    #[test]
    fn zero_max_t_stops_after_first_step() {
        let mut sim = build(SimConfig { max_t: 0, seed: Some(5), p_inspector: 0.0, ..Default::default() });
        assert!(sim.is_running());
        sim.process_turn();
        sim.step_forward();
        assert!(!sim.is_running());
        assert_eq!(sim.stop_reason(), Some(StopReason::Timeout));
    }

    #[test]
    fn zero_max_t_stops_whatever_the_population() {
        for p_inspector in [0.0, 0.5, 1.0] {
            let mut sim = build(SimConfig { max_t: 0, p_inspector, seed: Some(6), ..Default::default() });
            sim.step_forward();
            assert!(!sim.is_running());
        }
    }

    #[test]
    fn no_riders_left_stops_the_run() {
        let mut sim = build(quiet_config());
        add_inspector(&mut sim, Stop(1), 0.5);
        sim.step_forward();
        assert!(!sim.is_running());
        assert_eq!(sim.stop_reason(), Some(StopReason::AllRidersArrived));
    }

    #[test]
    fn time_bound_scenario() {
        // Buses never move after the first turn, so riders are never dropped
        // and only the time bound can end the run.
        let config = SimConfig {
            max_t:                    180,
            delta_t:                  5,
            p_inspector:              0.0,
            p_bus_advancement:        0.0,
            initial_actors:           10,
            initial_buses:            2,
            spawn_delay:              10,
            commuters_rage_threshold: 10,
            spawn_new_bus_threshold:  5,
            seed:                     Some(2024),
        };
        let mut sim = build(config);
        assert_eq!(sim.route().len(), 6);

        for _ in 0..36 {
            sim.process_turn();
            sim.step_forward();
            assert!(sim.is_running());
        }
        assert_eq!(sim.clock(), SimTime(180));

        sim.process_turn();
        sim.step_forward();
        assert_eq!(sim.clock(), SimTime(185));
        assert!(!sim.is_running());
        assert_eq!(sim.stop_reason(), Some(StopReason::Timeout));
    }

    #[test]
    fn stopped_sim_ignores_further_turns() {
        let mut sim = build(SimConfig { initial_actors: 3, ..quiet_config() });
        sim.stop();
        assert_eq!(sim.stop_reason(), Some(StopReason::UserStopped));
        sim.process_turn();
        sim.step_forward();
        assert_eq!(sim.clock(), SimTime::ZERO);
        assert!(sim.events().is_empty());
        assert!(!sim.run_turn(&mut NoopObserver));
    }

    #[derive(Default)]
    struct Counting {
        turns: usize,
        steps: usize,
        ends:  Vec<(SimTime, StopReason)>,
    }

    impl SimObserver for Counting {
        fn on_turn_processed(
            &mut self,
            route:    &ct_core::Route,
            snapshot: &crate::SimSnapshot,
            _events:  &[SimEvent],
        ) {
            assert_eq!(route.len(), 6);
            assert!(snapshot.actors.windows(2).all(|w| w[0].id < w[1].id));
            self.turns += 1;
        }

        fn on_step(&mut self, _time: SimTime) {
            self.steps += 1;
        }

        fn on_sim_end(&mut self, time: SimTime, reason: StopReason) {
            self.ends.push((time, reason));
        }
    }

    #[test]
    fn run_reports_every_turn_and_one_end() {
        let mut sim = build(SimConfig { seed: Some(17), ..Default::default() });
        let mut obs = Counting::default();
        sim.run(&mut obs);
        assert!(!sim.is_running());
        assert_eq!(obs.turns, obs.steps);
        assert_eq!(obs.turns as u64 * 5, sim.clock().0);
        assert_eq!(obs.ends.len(), 1);
        assert_eq!(obs.ends[0], (sim.clock(), sim.stop_reason().unwrap()));
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use ct_actor::Location;
    use ct_core::BusId;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    use super::*;

    /// Every active actor is aboard at most one bus, its location agrees with
    /// the bus rosters, and every bus passenger is still active.
    fn check_rosters(sim: &Sim) -> Result<(), TestCaseError> {
        for actor in sim.actors().iter() {
            let carriers = sim.fleet().carrying(actor.id());
            prop_assert!(carriers.len() <= 1, "actor {} on {:?}", actor.id(), carriers);
            match actor.location() {
                Location::Aboard(bus) => prop_assert_eq!(carriers, vec![bus]),
                Location::Stop(_) => prop_assert!(carriers.is_empty()),
            }
        }
        for bus in sim.fleet().iter() {
            let unique: HashSet<ActorId> = bus.passengers().iter().copied().collect();
            prop_assert_eq!(unique.len(), bus.passenger_count());
            for &id in bus.passengers() {
                prop_assert!(sim.actors().contains(id));
            }
        }
        Ok(())
    }

    fn config_strategy() -> impl Strategy<Value = SimConfig> {
        (
            any::<u64>(),
            0.0f64..=1.0,
            0.0f64..=1.0,
            0usize..25,
            0usize..=6,
            0u64..20,
            0usize..12,
            0usize..6,
        )
            .prop_map(
                |(seed, p_inspector, p_bus_advancement, initial_actors, initial_buses, spawn_delay, rage, crowd)| {
                    SimConfig {
                        max_t: 300,
                        delta_t: 5,
                        p_inspector,
                        p_bus_advancement,
                        initial_actors,
                        initial_buses,
                        spawn_delay,
                        commuters_rage_threshold: rage,
                        spawn_new_bus_threshold: crowd,
                        seed: Some(seed),
                    }
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_invariants_hold_every_turn(config in config_strategy()) {
            let rage = config.commuters_rage_threshold;
            let mut sim = SimBuilder::new(config).build().unwrap();
            check_rosters(&sim)?;

            let mut max_actor: Option<ActorId> = sim.actors().iter().map(|a| a.id()).max();
            let mut max_bus: Option<BusId> = sim.fleet().iter().map(|b| b.id()).max();

            while sim.is_running() {
                let known: HashSet<ActorId> = sim.actors().iter().map(|a| a.id()).collect();
                let buses_before: HashSet<BusId> = sim.fleet().iter().map(|b| b.id()).collect();

                sim.process_turn();
                check_rosters(&sim)?;

                // New actors and buses get ids above everything seen so far.
                for actor in sim.actors().iter().filter(|a| !known.contains(&a.id())) {
                    prop_assert!(max_actor.is_none_or(|m| actor.id() > m));
                    max_actor = Some(actor.id());
                }
                let new_buses: Vec<BusId> = sim
                    .fleet()
                    .iter()
                    .map(|b| b.id())
                    .filter(|id| !buses_before.contains(id))
                    .collect();
                prop_assert!(new_buses.len() <= 1, "at most one bus per turn");
                for id in new_buses {
                    prop_assert!(max_bus.is_none_or(|m| id > m));
                    max_bus = Some(id);
                }

                for bus in sim.fleet().iter() {
                    prop_assert!(bus.passenger_count() <= rage, "rage threshold");
                    if bus.is_at_stop() && bus.last_stop().is_terminus() {
                        prop_assert!(bus.riders(sim.actors()).is_empty(), "riders left at terminus");
                    }
                }

                sim.step_forward();
                check_rosters(&sim)?;
            }
            prop_assert!(sim.stop_reason().is_some());
        }
    }
}
