//! `ActorRoster`: the engine's set of active actors.
//!
//! An actor is in the roster from the moment it is spawned until it is
//! dropped from the simulation.  Iteration is always in ascending id order,
//! which keeps every per-turn scan deterministic for a given seed.

use std::collections::BTreeMap;

use ct_core::{ActorId, Stop};

use crate::{Actor, Location};

/// Active actors keyed by id.
#[derive(Clone, Debug, Default)]
pub struct ActorRoster {
    actors: BTreeMap<ActorId, Actor>,
}

impl ActorRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor.  Returns `false` (and leaves the roster unchanged) if an
    /// actor with the same id is already present.
    pub fn insert(&mut self, actor: Actor) -> bool {
        if self.actors.contains_key(&actor.id()) {
            return false;
        }
        self.actors.insert(actor.id(), actor);
        true
    }

    /// Remove and return an actor.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    /// Remove every listed actor; missing ids are skipped.  Returns the
    /// removed actors in the order given.
    pub fn remove_all(&mut self, ids: &[ActorId]) -> Vec<Actor> {
        ids.iter().filter_map(|id| self.actors.remove(id)).collect()
    }

    #[inline]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// All actors in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Ids of the actors waiting at `stop`, ascending.
    pub fn waiting_at(&self, stop: Stop) -> Vec<ActorId> {
        self.iter()
            .filter(|a| a.location() == Location::Stop(stop))
            .map(Actor::id)
            .collect()
    }

    /// Number of actors waiting at `stop`.
    pub fn waiting_count(&self, stop: Stop) -> usize {
        self.iter().filter(|a| a.location() == Location::Stop(stop)).count()
    }

    /// Number of active actors that are not inspectors.
    pub fn rider_count(&self) -> usize {
        self.iter().filter(|a| a.is_rider()).count()
    }

    /// Age every active actor by `delta`.
    pub fn age_all(&mut self, delta: u64) {
        for actor in self.actors.values_mut() {
            actor.age(delta);
        }
    }
}
