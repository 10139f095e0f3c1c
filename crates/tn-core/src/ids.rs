//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Unlike arena indices, these values
//! are chosen by the caller when registering an entity; the registry only
//! checks them for uniqueness.  The inner integer is `pub` for callers that
//! mint ids from external data.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u64::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// `true` if this is a real, caller-minted id.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
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

        impl From<u64> for $name {
            #[inline(always)]
            fn from(raw: u64) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Caller-assigned identifier of a station.
    pub struct StationId(u64);
}

typed_id! {
    /// Caller-assigned identifier of a train.
    pub struct TrainId(u64);
}

typed_id! {
    /// Caller-assigned identifier of a region.
    pub struct RegionId(u64);
}
