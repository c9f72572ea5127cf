//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into dense `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner type's max.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a dense array index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of a request, assigned `[0, N)` at construction.  Used as
    /// the key everywhere: `Ride::requests`, the shareability graph, and
    /// every oracle call.
    pub struct RequestId(u32);
}

typed_id! {
    /// Index of a ride in the append-only ride universe.  Singles occupy
    /// `[0, N)`; pairs and higher degrees are assigned sequentially after,
    /// per phase, in sorted `(base, candidate)` order.
    pub struct RideId(u32);
}

typed_id! {
    /// Opaque identity of a traveller.  Distinct from [`RequestId`] — two
    /// requests may share a `PaxId` (e.g. a round trip) but must never be
    /// combined into the same ride.
    pub struct PaxId(u32);
}

typed_id! {
    /// Opaque identifier for a network point (link or node).  Equality and
    /// hash are all the engine ever needs; no geometric semantics are used
    /// internally.
    pub struct Location(u32);
}
