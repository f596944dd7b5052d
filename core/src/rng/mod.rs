//! Deterministic random number generation
//!
//! ISAAC generators in two word widths. CRITICAL: same seed MUST produce
//! the same sequence, bit-for-bit with the reference implementation.

mod isaac;
mod isaac64;

pub use isaac::{Isaac, DEFAULT_TABLE_SIZE};
pub use isaac64::Isaac64;
