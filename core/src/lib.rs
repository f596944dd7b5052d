//! ISAAC RNG Core - Rust Engine
//!
//! Deterministic pseudo-random number generation based on the ISAAC
//! algorithm by Bob Jenkins: a word-oriented, array-based generator that
//! rewrites a mixing table in place once per block of output.
//!
//! # Architecture
//!
//! - **error**: Construction-time precondition errors
//! - **traits**: The `Rng` trait (word output plus derived helpers)
//! - **rng**: The ISAAC generators (32-bit and 64-bit variants)
//!
//! # Critical Invariants
//!
//! 1. All mixing arithmetic wraps modulo the word size (never panics)
//! 2. Same seed → same sequence, bit-for-bit with the reference
//! 3. Each generator owns its state; independent streams need independent
//!    instances

pub mod error;
pub mod rng;
pub mod traits;

// Re-exports for convenience
pub use error::GeneratorError;
pub use rng::{Isaac, Isaac64};
pub use traits::Rng;
