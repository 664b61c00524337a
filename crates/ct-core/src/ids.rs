//! Strongly typed identifier wrappers and the allocator that hands them out.
//!
//! Ids are `Copy + Ord + Hash` so they can key ordered maps directly.  Actor
//! and bus ids come from separate [`IdAllocator`]s owned by the simulation
//! engine; an id is never reused within a run.

use std::fmt;
use std::marker::PhantomData;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of a rider or inspector.
    pub struct ActorId(u32);
}

typed_id! {
    /// Identity of a bus.
    pub struct BusId(u32);
}

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Monotonic id source for one entity kind.
///
/// Ids start at 0 and increase by one per allocation.
#[derive(Debug, Clone)]
pub struct IdAllocator<I> {
    next:    u32,
    _marker: PhantomData<fn() -> I>,
}

impl<I: From<u32>> IdAllocator<I> {
    pub fn new() -> Self {
        Self { next: 0, _marker: PhantomData }
    }

    /// Hand out the next id.
    ///
    /// # Panics
    /// Panics in debug mode if more than `u32::MAX` ids are requested.
    #[inline]
    pub fn allocate(&mut self) -> I {
        let id = self.next;
        self.next += 1;
        I::from(id)
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next
    }
}

impl<I: From<u32>> Default for IdAllocator<I> {
    fn default() -> Self {
        Self::new()
    }
}
