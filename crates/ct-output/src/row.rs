//! Plain data row types shared by the table and CSV renderers.

use ct_actor::Location;
use ct_core::Route;
use ct_sim::{ActorView, BusView, SimSnapshot};

/// One actor at one moment, with stops resolved to their names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRow {
    pub time:        u64,
    pub id:          u32,
    pub name:        &'static str,
    pub hometown:    String,
    /// A stop name while waiting, `Bus <id>` while aboard.
    pub position:    String,
    pub travel_time: u64,
    pub has_ticket:  bool,
    pub mark:        char,
}

/// One bus at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusRow {
    pub time:       u64,
    pub id:         u32,
    pub last_stop:  String,
    pub at_stop:    bool,
    pub passengers: usize,
    pub tricksters: usize,
    pub inspectors: usize,
}

impl ActorRow {
    pub fn from_view(time: u64, view: &ActorView, route: &Route) -> Self {
        let position = match view.location {
            Location::Stop(stop) => route.name(stop).to_owned(),
            Location::Aboard(bus) => format!("Bus {bus}"),
        };
        Self {
            time,
            id: view.id.get(),
            name: view.name,
            hometown: route.name(view.home).to_owned(),
            position,
            travel_time: view.travel_time,
            has_ticket: view.has_ticket,
            mark: view.mark.as_char(),
        }
    }
}

impl BusRow {
    pub fn from_view(time: u64, view: &BusView, route: &Route) -> Self {
        Self {
            time,
            id:         view.id.get(),
            last_stop:  route.name(view.last_stop).to_owned(),
            at_stop:    view.at_stop,
            passengers: view.passengers,
            tricksters: view.tricksters,
            inspectors: view.inspectors,
        }
    }
}

/// All actor rows of a snapshot, in id order.
pub fn actor_rows(snapshot: &SimSnapshot, route: &Route) -> Vec<ActorRow> {
    snapshot
        .actors
        .iter()
        .map(|a| ActorRow::from_view(snapshot.time.0, a, route))
        .collect()
}

/// All bus rows of a snapshot, in id order.
pub fn bus_rows(snapshot: &SimSnapshot, route: &Route) -> Vec<BusRow> {
    snapshot
        .buses
        .iter()
        .map(|b| BusRow::from_view(snapshot.time.0, b, route))
        .collect()
}
