//! Host collaborators: time and randomness.
//!
//! The eyes never read a global clock or RNG. Hosts hand in a [`Clock`] and a
//! [`RandomSource`]; tests use [`ManualClock`] and seeded or scripted
//! sources.

mod clock;
mod random;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use random::{RandomSource, RngSource, SequenceRandom};
