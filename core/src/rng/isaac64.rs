//! 64-bit ISAAC random number generator
//!
//! Same block structure as the 32-bit variant with 64-bit words: its own
//! seeding scramble (a subtract/XOR-shift ladder), `(x >> 3)` table
//! indexing, and an accumulator shift cycle of `<<21, >>5, <<12, >>33`
//! with the first step complemented.

use crate::error::GeneratorError;
use crate::traits::Rng;

use super::isaac::{DEFAULT_TABLE_SIZE, MIX_GROUP};

/// Golden ratio constant, 64-bit flavor
const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c13;

/// One round of the 64-bit seeding scramble (pure function)
fn mix(k: &mut [u64; MIX_GROUP]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *k;
    a = a.wrapping_sub(e);
    f ^= h >> 9;
    h = h.wrapping_add(a);
    b = b.wrapping_sub(f);
    g ^= a << 9;
    a = a.wrapping_add(b);
    c = c.wrapping_sub(g);
    h ^= b >> 23;
    b = b.wrapping_add(c);
    d = d.wrapping_sub(h);
    a ^= c << 15;
    c = c.wrapping_add(d);
    e = e.wrapping_sub(a);
    b ^= d >> 14;
    d = d.wrapping_add(e);
    f = f.wrapping_sub(b);
    c ^= e << 20;
    e = e.wrapping_add(f);
    g = g.wrapping_sub(c);
    d ^= f >> 17;
    f = f.wrapping_add(g);
    h = h.wrapping_sub(d);
    e ^= g << 14;
    g = g.wrapping_add(h);
    *k = [a, b, c, d, e, f, g, h];
}

/// Deterministic random number generator using the 64-bit ISAAC algorithm
///
/// # Example
/// ```
/// use isaac_rng_core_rs::{Isaac64, Rng};
///
/// let mut rng = Isaac64::new_unseeded();
/// let value = rng.next_u64();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isaac64 {
    cnt: usize,
    rsl: Vec<u64>,
    mem: Vec<u64>,
    a: u64,
    b: u64,
    c: u64,
}

impl Isaac64 {
    /// Create a generator with the default table size and no seed
    pub fn new_unseeded() -> Self {
        let mut rng = Self::empty(DEFAULT_TABLE_SIZE);
        rng.init(false);
        rng
    }

    /// Create a generator from a seed of exactly [`DEFAULT_TABLE_SIZE`] words
    ///
    /// # Errors
    /// Returns [`GeneratorError::SeedLengthMismatch`] if the seed is not
    /// exactly one table's worth of words.
    pub fn from_seed(seed: &[u64]) -> Result<Self, GeneratorError> {
        Self::seeded_with_size(DEFAULT_TABLE_SIZE, seed)
    }

    /// Create an unseeded generator with a custom table size
    pub fn unseeded_with_size(table_size: usize) -> Result<Self, GeneratorError> {
        Self::check_size(table_size)?;
        let mut rng = Self::empty(table_size);
        rng.init(false);
        Ok(rng)
    }

    /// Create a seeded generator with a custom table size
    pub fn seeded_with_size(table_size: usize, seed: &[u64]) -> Result<Self, GeneratorError> {
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
    pub fn reseed(&mut self, seed: &[u64]) -> Result<(), GeneratorError> {
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

    /// Table size in words
    pub fn table_size(&self) -> usize {
        self.mem.len()
    }

    /// Words left in the current output block
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
            // Second pass spreads every seed word across the whole table.
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

        self.generate_block();
    }

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
                let mixed = match i & 3 {
                    0 => !(a ^ (a << 21)),
                    1 => a ^ (a >> 5),
                    2 => a ^ (a << 12),
                    _ => a ^ (a >> 33),
                };
                let x = self.mem[own + i];
                a = mixed.wrapping_add(self.mem[other + i]);
                let y = self.mem[(x as usize >> 3) & mask]
                    .wrapping_add(a)
                    .wrapping_add(b);
                self.mem[own + i] = y;
                b = self.mem[((y >> size_len) as usize >> 3) & mask].wrapping_add(x);
                self.rsl[own + i] = b;
            }
        }

        self.a = a;
        self.b = b;
        self.cnt = n;
    }
}

impl Rng for Isaac64 {
    /// Truncates one full 64-bit word per call
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.cnt == 0 {
            self.generate_block();
        }
        self.cnt -= 1;
        self.rsl[self.cnt]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_is_pure() {
        let input: [u64; MIX_GROUP] = [1, 2, 3, 4, 5, 6, 7, GOLDEN_RATIO];
        let mut first = input;
        let mut second = input;
        mix(&mut first);
        mix(&mut second);
        assert_eq!(first, second);
        assert_ne!(first, input);
    }

    #[test]
    fn test_block_output_order_is_reversed() {
        let mut rng = Isaac64::new_unseeded();
        let block = rng.rsl.clone();
        for i in 0..block.len() {
            assert_eq!(rng.next_u64(), block[block.len() - 1 - i]);
        }
    }

    #[test]
    fn test_next_u32_consumes_whole_words() {
        let mut truncated = Isaac64::new_unseeded();
        let mut full = Isaac64::new_unseeded();
        for _ in 0..512 {
            assert_eq!(truncated.next_u32(), full.next_u64() as u32);
        }
    }
}
