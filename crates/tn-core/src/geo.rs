//! Planar coordinate type, distances, and the origin-norm index ordering.
//!
//! Coordinates are integer pairs on an abstract plane (not geographic).
//! Distances between stations are Euclidean, truncated toward zero to an
//! integer number of metres — callers round-trip distances through display
//! layers that expect whole metres.

use std::cmp::Ordering;

/// Integer distance in metres.
///
/// Distances are computed in `f64` and truncated, so `i64` comfortably
/// holds any distance between `i32` coordinates (at most ~6.1e9).
pub type Distance = i64;

/// A planar integer coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean norm from the origin.
    ///
    /// `i128`: `(i32::MIN)² + (i32::MIN)²` is exactly `2⁶³`, one past
    /// `i64::MAX`, so the sum needs the wider type.
    #[inline]
    pub fn norm_sq(self) -> i128 {
        let x = self.x as i128;
        let y = self.y as i128;
        x * x + y * y
    }

    /// Euclidean distance to `other`, truncated toward zero.
    ///
    /// Truncation (not rounding) matches the registry's distance
    /// accumulation semantics: route legs sum these integer values.
    pub fn distance_to(self, other: Coord) -> Distance {
        (self.distance_to_f64(other)) as Distance
    }

    /// Exact (f64) Euclidean distance to `other`.  Used for
    /// nearest-neighbour selection, where truncation would merge
    /// genuinely distinct distances.
    pub fn distance_to_f64(self, other: Coord) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── CoordKey ──────────────────────────────────────────────────────────────────

/// Ordering wrapper for the distance-increasing station index.
///
/// The order is: ascending squared norm from the origin, with two special
/// cases checked *first* — coordinates sharing an x compare by y, and
/// coordinates sharing a y compare by x.  Identical coordinates compare
/// equal, so a second station inserted at an occupied coordinate collides
/// with (and replaces) the first in a keyed index.
///
/// This is deliberately not a geometric total order; the tie-break priority
/// is asymmetric and consumers of `stations_distance_increasing` rely on
/// this exact rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordKey(pub Coord);

impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0, other.0);
        if a == b {
            Ordering::Equal
        } else if a.x == b.x {
            a.y.cmp(&b.y)
        } else if a.y == b.y {
            a.x.cmp(&b.x)
        } else {
            a.norm_sq().cmp(&b.norm_sq())
        }
    }
}

impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
