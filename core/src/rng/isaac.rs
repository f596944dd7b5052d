//! 32-bit ISAAC random number generator
//!
//! ISAAC (Indirection, Shift, Accumulate, Add, Count) keeps a mixing table
//! of `N` 32-bit words, an output block of the same size, two scalar
//! accumulators and a block counter. One block pass rewrites the whole
//! table and produces `N` output words at once; `next_u32` hands them out
//! one at a time and refills lazily.
//!
//! # Algorithm
//!
//! Each block pass walks the table in two half-array sweeps. Every step
//! XORs accumulator `a` with a shifted copy of itself (the shift cycles
//! through `<<13, >>6, <<2, >>16`), folds in the element from the opposite
//! half, then rewrites the current slot through a data-dependent table
//! lookup. The rewritten value's upper bits drive a second lookup that
//! becomes both the new `b` accumulator and the next output word. The
//! counter `c` bumps once per block so successive blocks differ even if
//! the accumulators briefly cycle.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (verify against reference vectors)
//! - Interoperability (bit-exact with the reference implementation)

use crate::error::GeneratorError;
use crate::traits::Rng;

/// Default mixing-table size in words
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Seeding consumes the table in groups of this many words
pub(crate) const MIX_GROUP: usize = 8;

/// Golden ratio constant that starts the seeding scramble
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// One round of the seeding scramble over eight working scalars
///
/// Pure function: a fixed input octuple always yields the same output
/// octuple. Each update feeds the next, so one round already mixes the
/// whole group.
fn mix(k: &mut [u32; MIX_GROUP]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *k;
    a ^= b << 11;
    d = d.wrapping_add(a);
    b = b.wrapping_add(c);
    b ^= c >> 2;
    e = e.wrapping_add(b);
    c = c.wrapping_add(d);
    c ^= d << 8;
    f = f.wrapping_add(c);
    d = d.wrapping_add(e);
    d ^= e >> 16;
    g = g.wrapping_add(d);
    e = e.wrapping_add(f);
    e ^= f << 10;
    h = h.wrapping_add(e);
    f = f.wrapping_add(g);
    f ^= g >> 4;
    a = a.wrapping_add(f);
    g = g.wrapping_add(h);
    g ^= h << 8;
    b = b.wrapping_add(g);
    h = h.wrapping_add(a);
    h ^= a >> 9;
    c = c.wrapping_add(h);
    a = a.wrapping_add(b);
    *k = [a, b, c, d, e, f, g, h];
}

/// Deterministic random number generator using the 32-bit ISAAC algorithm
///
/// # Example
/// ```
/// use isaac_rng_core_rs::{Isaac, Rng};
///
/// let mut rng = Isaac::new_unseeded();
/// assert_eq!(rng.next_u32(), 0x71d7_1fd2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isaac {
    /// Words of the current block not yet consumed
    cnt: usize,
    /// Current output block
    rsl: Vec<u32>,
    /// Internal mixing table
    mem: Vec<u32>,
    /// Accumulator threaded through every step
    a: u32,
    /// Accumulator that doubles as the previous output word
    b: u32,
    /// Block counter
    c: u32,
}

impl Isaac {
    /// Create a generator with the default table size and no seed
    ///
    /// Seeding uses the golden ratio constant alone, so every unseeded
    /// generator produces the same fixed reference sequence.
    ///
    /// # Example
    /// ```
    /// use isaac_rng_core_rs::Isaac;
    ///
    /// let rng = Isaac::new_unseeded();
    /// assert_eq!(rng.table_size(), 256);
    /// ```
    pub fn new_unseeded() -> Self {
        let mut rng = Self::empty(DEFAULT_TABLE_SIZE);
        rng.init(false);
        rng
    }

    /// Create a generator from a seed of exactly [`DEFAULT_TABLE_SIZE`] words
    ///
    /// # Errors
    /// Returns [`GeneratorError::SeedLengthMismatch`] if the seed is not
    /// exactly one table's worth of words. Short seeds are rejected rather
    /// than padded: padding would produce a stream the reference algorithm
    /// never generates.
    ///
    /// # Example
    /// ```
    /// use isaac_rng_core_rs::{Isaac, Rng};
    ///
    /// let seed: Vec<u32> = (0..256).collect();
    /// let mut rng = Isaac::from_seed(&seed).unwrap();
    /// let value = rng.next_u32();
    /// ```
    pub fn from_seed(seed: &[u32]) -> Result<Self, GeneratorError> {
        Self::seeded_with_size(DEFAULT_TABLE_SIZE, seed)
    }

    /// Create an unseeded generator with a custom table size
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidTableSize`] unless `table_size` is
    /// a power of two of at least 8.
    pub fn unseeded_with_size(table_size: usize) -> Result<Self, GeneratorError> {
        Self::check_size(table_size)?;
        let mut rng = Self::empty(table_size);
        rng.init(false);
        Ok(rng)
    }

    /// Create a seeded generator with a custom table size
    ///
    /// The seed must supply exactly `table_size` words.
    pub fn seeded_with_size(table_size: usize, seed: &[u32]) -> Result<Self, GeneratorError> {
        Self::check_size(table_size)?;
        if seed.len() != table_size {
            return Err(GeneratorError::SeedLengthMismatch {
                len: seed.len(),
                expected: table_size,
            });
        }
        let mut rng = Self::empty(table_size);
        rng.rsl.copy_from_slice(seed);
        rng.init(true);
        Ok(rng)
    }

    /// Re-run initialization in place with a new seed
    ///
    /// Keeps the table size; the seed must match it exactly. After this
    /// call the generator is indistinguishable from a freshly seeded one.
    pub fn reseed(&mut self, seed: &[u32]) -> Result<(), GeneratorError> {
        if seed.len() != self.mem.len() {
            return Err(GeneratorError::SeedLengthMismatch {
                len: seed.len(),
                expected: self.mem.len(),
            });
        }
        self.rsl.copy_from_slice(seed);
        self.init(true);
        Ok(())
    }

    /// Table size in words (the `N` of the algorithm)
    pub fn table_size(&self) -> usize {
        self.mem.len()
    }

    /// Words left in the current output block
    ///
    /// Counts down from `table_size()` to 0, at which point the next call
    /// to `next_u32` mixes a fresh block.
    pub fn remaining(&self) -> usize {
        self.cnt
    }

    fn check_size(table_size: usize) -> Result<(), GeneratorError> {
        if !table_size.is_power_of_two() || table_size < MIX_GROUP {
            return Err(GeneratorError::InvalidTableSize { size: table_size });
        }
        Ok(())
    }

    fn empty(table_size: usize) -> Self {
        Self {
            cnt: 0,
            rsl: vec![0; table_size],
            mem: vec![0; table_size],
            a: 0,
            b: 0,
            c: 0,
        }
    }

    /// One-time state setup
    ///
    /// When `use_seed` is true the current contents of `rsl` are folded
    /// into the mixing table; otherwise the table is filled from the
    /// golden-ratio scramble alone.
    fn init(&mut self, use_seed: bool) {
        let n = self.mem.len();
        self.a = 0;
        self.b = 0;
        self.c = 0;

        let mut k = [GOLDEN_RATIO; MIX_GROUP];
        for _ in 0..4 {
            mix(&mut k);
        }

        if use_seed {
            for i in (0..n).step_by(MIX_GROUP) {
                for j in 0..MIX_GROUP {
                    k[j] = k[j].wrapping_add(self.rsl[i + j]);
                }
                mix(&mut k);
                self.mem[i..i + MIX_GROUP].copy_from_slice(&k);
            }
            // Second pass over the table itself, so seed words contributed
            // late in the first pass still reach every slot.
            for i in (0..n).step_by(MIX_GROUP) {
                for j in 0..MIX_GROUP {
                    k[j] = k[j].wrapping_add(self.mem[i + j]);
                }
                mix(&mut k);
                self.mem[i..i + MIX_GROUP].copy_from_slice(&k);
            }
        } else {
            for i in (0..n).step_by(MIX_GROUP) {
                mix(&mut k);
                self.mem[i..i + MIX_GROUP].copy_from_slice(&k);
            }
        }

        // Fill the first block so the first next_u32() never sees an
        // empty buffer.
        self.generate_block();
    }

    /// Regenerate the whole output block, rewriting the table in place
    ///
    /// The reference implementation walks the two table halves with a pair
    /// of advancing pointers; here that is explicit index arithmetic over
    /// `own + i` and `other + i`.
    fn generate_block(&mut self) {
        let n = self.mem.len();
        let mask = n - 1;
        let size_len = n.trailing_zeros();
        let mid = n / 2;

        self.c = self.c.wrapping_add(1);
        let mut a = self.a;
        let mut b = self.b.wrapping_add(self.c);

        for (own, other) in [(0, mid), (mid, 0)] {
            for i in 0..mid {
                let shifted = match i & 3 {
                    0 => a << 13,
                    1 => a >> 6,
                    2 => a << 2,
                    _ => a >> 16,
                };
                let x = self.mem[own + i];
                a = (a ^ shifted).wrapping_add(self.mem[other + i]);
                let y = self.mem[(x as usize >> 2) & mask]
                    .wrapping_add(a)
                    .wrapping_add(b);
                self.mem[own + i] = y;
                b = self.mem[((y >> size_len) as usize >> 2) & mask].wrapping_add(x);
                self.rsl[own + i] = b;
            }
        }

        self.a = a;
        self.b = b;
        self.cnt = n;
    }
}

impl Rng for Isaac {
    fn next_u32(&mut self) -> u32 {
        if self.cnt == 0 {
            // Current block exhausted; mix the next one.
            self.generate_block();
        }
        self.cnt -= 1;
        self.rsl[self.cnt]
    }
}
