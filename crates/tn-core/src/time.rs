//! Departure clock values.
//!
//! A `Time` is a small non-negative value on a 24-hour-style clock (e.g.
//! `1545` for 15:45).  The registry never does arithmetic on times beyond
//! ordering comparisons, so a plain alias is enough; `u16` covers the whole
//! `HHMM` range with room to spare.

pub type Time = u16;
