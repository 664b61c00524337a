//! Fluent builder for constructing a [`Sim`].

use ct_actor::ActorRoster;
use ct_core::{IdAllocator, Route, SimRng, SimTime, Stop};
use ct_fleet::Fleet;

use crate::{Sim, SimConfig, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                        |
/// |-----------------|------------------------------------------------|
/// | `.route(r)`     | `Route::default()` (six stops, Brescia hub)    |
/// | `.rng(r)`       | seeded from `config.seed`, else OS entropy     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig { seed: Some(42), ..Default::default() })
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    route:  Option<Route>,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, route: None, rng: None }
    }

    /// Run on `route` instead of the default six-stop ring.
    pub fn route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Use `rng` instead of seeding one from the configuration.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, spawn the initial actors and buses, and
    /// return a running [`Sim`].
    ///
    /// Initial buses go to distinct stops chosen uniformly at random (the
    /// terminus included).
    pub fn build(self) -> SimResult<Sim> {
        let route = self.route.unwrap_or_default();
        self.config.validate(&route)?;

        let rng = match (self.rng, self.config.seed) {
            (Some(rng), _)     => rng,
            (None, Some(seed)) => SimRng::new(seed),
            (None, None)       => SimRng::from_entropy(),
        };

        let mut sim = Sim {
            config:      self.config,
            route,
            clock:       SimTime::ZERO,
            last_spawn:  SimTime::ZERO,
            actors:      ActorRoster::new(),
            fleet:       Fleet::new(),
            events:      Vec::new(),
            running:     true,
            stop_reason: None,
            rng,
            actor_ids:   IdAllocator::new(),
            bus_ids:     IdAllocator::new(),
        };

        for _ in 0..sim.config.initial_actors {
            sim.spawn_actor();
        }

        let starts = sim
            .rng
            .sample_indices(sim.route.len(), sim.config.initial_buses);
        for index in starts {
            sim.spawn_bus(Stop(index as u16));
        }

        tracing::debug!(
            actors = sim.actors.len(),
            buses = sim.fleet.len(),
            stops = sim.route.len(),
            "simulation built"
        );
        Ok(sim)
    }
}
