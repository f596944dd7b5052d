//! Random number generator trait
//!
//! Generators produce raw unsigned words; everything else (wider words,
//! floats, bounded ranges) derives from that stream. Consumers should
//! depend on this trait rather than a concrete generator so streams can be
//! swapped without touching call sites.

/// A deterministic source of random words
///
/// # Example
/// ```
/// use isaac_rng_core_rs::{Isaac, Rng};
///
/// let mut rng = Isaac::new_unseeded();
/// let word = rng.next_u32();
/// let wide = rng.next_u64();
/// ```
pub trait Rng {
    /// Return the next 32-bit word from the stream
    fn next_u32(&mut self) -> u32;

    /// Return the next 64-bit value
    ///
    /// Default implementation glues two 32-bit words together, high word
    /// first. Generators with a native 64-bit stream override this.
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Generate a random f64 in [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use isaac_rng_core_rs::{Isaac, Rng};
    ///
    /// let mut rng = Isaac::new_unseeded();
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    fn next_f64(&mut self) -> f64 {
        // 53 significand bits, uniform over [0, 1)
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use isaac_rng_core_rs::{Isaac, Rng};
    ///
    /// let mut rng = Isaac::new_unseeded();
    /// let v = rng.range(10, 100);
    /// assert!(v >= 10 && v < 100);
    /// ```
    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");
        let range_size = (max - min) as u64;
        min + (self.next_u64() % range_size) as i64
    }
}
