//! Construction-time errors
//!
//! The generator core has no recoverable runtime failures: all mixing
//! arithmetic wraps modulo the word size, so overflow is never signaled.
//! The only failure class is a precondition violation while constructing
//! or reseeding a generator, rejected here instead of silently padding or
//! truncating (either would produce a stream that no longer matches the
//! algorithm).

use thiserror::Error;

/// Errors that can occur while constructing or reseeding a generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("table size {size} must be a power of two and at least 8")]
    InvalidTableSize { size: usize },

    #[error("seed length {len} does not match table size {expected}")]
    SeedLengthMismatch { len: usize, expected: usize },
}
