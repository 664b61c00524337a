//! The cyclic ring of bus stops.
//!
//! Stops are numbered by their position in the route.  Index 0 is the
//! terminus: buses unload every rider there, and new actors never appear
//! there.  The successor of the last stop is the terminus again.
//!
//! ```text
//!   Brescia(0) → Sarezzo(1) → Concesio(2) → Bergamo(3) → Flero(4) → Desenzano(5)
//!      ↑                                                               │
//!      └───────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::{CoreError, CoreResult, SimRng};

/// Stops of the default route, terminus first.
pub const DEFAULT_STOPS: [&str; 6] = [
    "Brescia", "Sarezzo", "Concesio", "Bergamo", "Flero", "Desenzano",
];

/// Minimum number of stops: a terminus plus at least one source stop.
const MIN_STOPS: usize = 2;

// ── Stop ──────────────────────────────────────────────────────────────────────

/// Position of a stop in its [`Route`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop(pub u16);

impl Stop {
    pub const TERMINUS: Stop = Stop(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_terminus(self) -> bool {
        self == Stop::TERMINUS
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A fixed, ordered, cyclic sequence of named stops.
///
/// The route is immutable for the lifetime of a simulation.  Queries never
/// fail: a [`Stop`] that does not belong to this route is treated as the
/// terminus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    names: Vec<String>,
}

impl Route {
    /// Build a route from stop names, terminus first.
    ///
    /// Rejects routes with fewer than two stops and duplicate names.
    pub fn new<I, S>(names: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < MIN_STOPS {
            return Err(CoreError::RouteTooShort { got: names.len(), min: MIN_STOPS });
        }
        if names.len() > u16::MAX as usize {
            return Err(CoreError::Config(format!(
                "route has {} stops, at most {} are supported",
                names.len(),
                u16::MAX
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CoreError::DuplicateStop(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Number of stops, terminus included.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: a route has at least two stops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn terminus(&self) -> Stop {
        Stop::TERMINUS
    }

    /// `true` if `stop` is one of this route's stops.
    #[inline]
    pub fn contains(&self, stop: Stop) -> bool {
        stop.index() < self.names.len()
    }

    /// All stops in route order, terminus first.
    pub fn stops(&self) -> impl Iterator<Item = Stop> + '_ {
        (0..self.names.len()).map(|i| Stop(i as u16))
    }

    /// Display name of `stop`; an unknown stop reports the terminus name.
    pub fn name(&self, stop: Stop) -> &str {
        let stop = self.resolve(stop);
        &self.names[stop.index()]
    }

    /// Stop with the given name; unknown names map to the terminus.
    pub fn lookup(&self, name: &str) -> Stop {
        self.names
            .iter()
            .position(|n| n == name)
            .map_or(Stop::TERMINUS, |i| Stop(i as u16))
    }

    /// The next stop in cyclic order.
    ///
    /// A stop that is not part of this route yields the terminus.
    pub fn successor(&self, stop: Stop) -> Stop {
        if !self.contains(stop) {
            return Stop::TERMINUS;
        }
        Stop(((stop.index() + 1) % self.names.len()) as u16)
    }

    /// A uniformly chosen stop other than the terminus.
    pub fn random_source(&self, rng: &mut SimRng) -> Stop {
        Stop(rng.gen_range(1..self.names.len()) as u16)
    }

    #[inline]
    fn resolve(&self, stop: Stop) -> Stop {
        if self.contains(stop) { stop } else { Stop::TERMINUS }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self { names: DEFAULT_STOPS.iter().map(|s| (*s).to_owned()).collect() }
    }
}
