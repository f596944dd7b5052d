//! Tests for deterministic generation
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use isaac_rng_core_rs::{Isaac, Isaac64, Rng};

fn test_seed() -> Vec<u32> {
    (0..256u32).map(|i| i.wrapping_mul(0x9e3779b9) ^ 0xdeadbeef).collect()
}

#[test]
fn test_same_seed_same_sequence() {
    let seed = test_seed();
    let mut rng1 = Isaac::from_seed(&seed).unwrap();
    let mut rng2 = Isaac::from_seed(&seed).unwrap();

    // First 1000 words cross three block refills.
    for i in 0..1000 {
        assert_eq!(
            rng1.next_u32(),
            rng2.next_u32(),
            "determinism broken at output {}",
            i
        );
    }
}

#[test]
fn test_unseeded_generators_agree() {
    let mut rng1 = Isaac::new_unseeded();
    let mut rng2 = Isaac::new_unseeded();

    for i in 0..1000 {
        assert_eq!(
            rng1.next_u32(),
            rng2.next_u32(),
            "unseeded determinism broken at output {}",
            i
        );
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut seed2 = test_seed();
    seed2[0] ^= 1;

    let mut rng1 = Isaac::from_seed(&test_seed()).unwrap();
    let mut rng2 = Isaac::from_seed(&seed2).unwrap();

    // A single flipped seed bit must perturb the very first block.
    let first: Vec<u32> = (0..16).map(|_| rng1.next_u32()).collect();
    let second: Vec<u32> = (0..16).map(|_| rng2.next_u32()).collect();
    assert_ne!(first, second, "one-bit seed change should alter the stream");
}

#[test]
fn test_state_isolation() {
    // Identically seeded generators advanced by different amounts must
    // disagree afterwards: state truly mutates per call.
    let seed = test_seed();
    let mut rng1 = Isaac::from_seed(&seed).unwrap();
    let mut rng2 = Isaac::from_seed(&seed).unwrap();

    for _ in 0..3 {
        rng1.next_u32();
    }
    for _ in 0..7 {
        rng2.next_u32();
    }

    assert_ne!(rng1.next_u32(), rng2.next_u32());
}

#[test]
fn test_clone_forks_the_stream() {
    let mut rng1 = Isaac::from_seed(&test_seed()).unwrap();
    for _ in 0..100 {
        rng1.next_u32();
    }

    let mut rng2 = rng1.clone();
    for i in 0..500 {
        assert_eq!(
            rng1.next_u32(),
            rng2.next_u32(),
            "cloned stream diverged at output {}",
            i
        );
    }
}

#[test]
fn test_produces_diverse_values() {
    let mut rng = Isaac::new_unseeded();
    let values: std::collections::HashSet<u32> = (0..1000).map(|_| rng.next_u32()).collect();

    // 32-bit collisions in 1000 draws are possible but vanishingly rare.
    assert!(
        values.len() > 990,
        "stream not diverse enough: {} unique values out of 1000",
        values.len()
    );
}

#[test]
fn test_isaac64_same_seed_same_sequence() {
    let seed: Vec<u64> = (0..256u64).map(|i| i.wrapping_mul(0x9e3779b97f4a7c13)).collect();
    let mut rng1 = Isaac64::from_seed(&seed).unwrap();
    let mut rng2 = Isaac64::from_seed(&seed).unwrap();

    for i in 0..1000 {
        assert_eq!(
            rng1.next_u64(),
            rng2.next_u64(),
            "determinism broken at output {}",
            i
        );
    }
}
