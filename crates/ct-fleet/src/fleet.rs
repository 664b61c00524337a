//! `Fleet`: all active buses.

use std::collections::BTreeMap;

use ct_core::{ActorId, BusId};

use crate::Bus;

/// Active buses keyed by id; iteration is in ascending id order.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    buses: BTreeMap<BusId, Bus>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bus.  Returns `false` if the id is already taken.
    pub fn insert(&mut self, bus: Bus) -> bool {
        if self.buses.contains_key(&bus.id()) {
            return false;
        }
        self.buses.insert(bus.id(), bus);
        true
    }

    pub fn remove(&mut self, id: BusId) -> Option<Bus> {
        self.buses.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: BusId) -> Option<&mut Bus> {
        self.buses.get_mut(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bus> {
        self.buses.values_mut()
    }

    /// Ids of the buses currently standing at a stop.
    pub fn at_stop(&self) -> Vec<BusId> {
        self.iter().filter(|b| b.is_at_stop()).map(Bus::id).collect()
    }

    /// Ids of the buses carrying more than `limit` passengers.
    pub fn overcrowded(&self, limit: usize) -> Vec<BusId> {
        self.iter()
            .filter(|b| b.passenger_count() > limit)
            .map(Bus::id)
            .collect()
    }

    /// Every bus whose roster contains `actor`.  Holds at most one element
    /// while the engine's invariants hold.
    pub fn carrying(&self, actor: ActorId) -> Vec<BusId> {
        self.iter().filter(|b| b.contains(actor)).map(Bus::id).collect()
    }
}
