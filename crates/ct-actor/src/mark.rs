//! Small value types describing who an actor is and where they are.

use std::fmt;

use ct_core::{BusId, Stop};

/// Sex of an actor; selects the rider name pool and pronoun.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    Male,
    Female,
}

/// Role mark shown in status tables.
///
/// Riders are marked by sex, inspectors always carry `T`.  Comparisons are
/// plain value equality on the enum.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    RiderMale,
    RiderFemale,
    Inspector,
}

impl Mark {
    /// Mark for a rider of the given sex.
    #[inline]
    pub fn rider(sex: Sex) -> Mark {
        match sex {
            Sex::Male   => Mark::RiderMale,
            Sex::Female => Mark::RiderFemale,
        }
    }

    /// Single-character label: `M`, `F` or `T`.
    pub fn as_char(self) -> char {
        match self {
            Mark::RiderMale   => 'M',
            Mark::RiderFemale => 'F',
            Mark::Inspector   => 'T',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Where an actor currently is: waiting at a stop, or aboard a bus.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Stop(Stop),
    Aboard(BusId),
}

impl Location {
    /// The stop, if the actor is waiting at one.
    #[inline]
    pub fn stop(self) -> Option<Stop> {
        match self {
            Location::Stop(s)   => Some(s),
            Location::Aboard(_) => None,
        }
    }

    /// The bus, if the actor is aboard one.
    #[inline]
    pub fn bus(self) -> Option<BusId> {
        match self {
            Location::Stop(_)   => None,
            Location::Aboard(b) => Some(b),
        }
    }
}
