use proptest::prelude::*;
use xorshift::rand_core::{RngCore, SeedableRng};
use xorshift::{
    Prng, Seed1024, SplitMix64, StateError, XoroShiro128Plus, XoroShiro128StarStar,
    XoroShiro256Plus, XoroShiro256PlusPlus, XoroShiro256StarStar, XoroShiro512StarStar,
    XorShift1024Star, XorShift1024StarPhi, XorShift128Plus, XorShift4096Star, XorShift64Star,
};

const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, u64::MAX];

fn assert_deterministic<R: Prng>(seed: u64, calls: usize) {
    let mut a = R::seed_from_u64(seed);
    let mut b = R::seed_from_u64(seed);
    for i in 0..calls {
        assert_eq!(a.next_u64(), b.next_u64(), "diverged at call {i}");
    }
}

fn assert_i63_in_range<R: Prng>(seed: u64) {
    let mut rng = R::seed_from_u64(seed);
    for _ in 0..100_000 {
        let v = rng.next_i63();
        assert!(v >= 0, "{v} is negative");
    }
}

fn assert_never_zero<R: Prng, const N: usize>(state: impl Fn(&R) -> [u64; N]) {
    for seed in SEEDS {
        let mut rng = R::seed_from_u64(seed);
        for step in 0..10_000 {
            assert!(
                state(&rng).iter().any(|&w| w != 0),
                "all-zero state after {step} steps from seed {seed}"
            );
            rng.next_u64();
        }
    }
}

macro_rules! for_each_generator {
    ($f:ident $(, $arg:expr)*) => {
        $f::<SplitMix64>($($arg),*);
        $f::<XorShift64Star>($($arg),*);
        $f::<XorShift128Plus>($($arg),*);
        $f::<XorShift1024Star>($($arg),*);
        $f::<XorShift1024StarPhi>($($arg),*);
        $f::<XorShift4096Star>($($arg),*);
        $f::<XoroShiro128Plus>($($arg),*);
        $f::<XoroShiro128StarStar>($($arg),*);
        $f::<XoroShiro256Plus>($($arg),*);
        $f::<XoroShiro256PlusPlus>($($arg),*);
        $f::<XoroShiro256StarStar>($($arg),*);
        $f::<XoroShiro512StarStar>($($arg),*);
    };
}

#[test]
fn same_seed_same_sequence() {
    for seed in SEEDS {
        for_each_generator!(assert_deterministic, seed, 10_000);
    }
}

#[test]
fn next_i63_is_never_negative() {
    for_each_generator!(assert_i63_in_range, 0x5eed);
}

#[test]
fn seeded_states_never_degenerate() {
    assert_never_zero::<XorShift64Star, 1>(|r| [r.state()]);
    assert_never_zero::<XorShift128Plus, 2>(XorShift128Plus::state);
    assert_never_zero::<XorShift1024Star, 16>(XorShift1024Star::state);
    assert_never_zero::<XorShift1024StarPhi, 16>(XorShift1024StarPhi::state);
    assert_never_zero::<XorShift4096Star, 64>(XorShift4096Star::state);
    assert_never_zero::<XoroShiro128Plus, 2>(XoroShiro128Plus::state);
    assert_never_zero::<XoroShiro128StarStar, 2>(XoroShiro128StarStar::state);
    assert_never_zero::<XoroShiro256Plus, 4>(XoroShiro256Plus::state);
    assert_never_zero::<XoroShiro256PlusPlus, 4>(XoroShiro256PlusPlus::state);
    assert_never_zero::<XoroShiro256StarStar, 4>(XoroShiro256StarStar::state);
    assert_never_zero::<XoroShiro512StarStar, 8>(XoroShiro512StarStar::state);
}

#[test]
fn all_zero_byte_seed_is_remapped() {
    let mut rng = XorShift1024Star::from_seed(Seed1024::default());
    assert_eq!(rng, XorShift1024Star::seed_from_u64(0));
    assert_ne!(rng.next_u64(), 0);

    let rng = XoroShiro128Plus::from_seed([0; 16]);
    assert_eq!(rng, XoroShiro128Plus::seed_from_u64(0));
}

#[test]
fn fill_bytes_is_little_endian_next_u64() {
    let mut a = XoroShiro256StarStar::seed_from_u64(11);
    let mut b = a.clone();
    let mut bytes = [0u8; 24];
    a.fill_bytes(&mut bytes);
    for chunk in bytes.chunks(8) {
        assert_eq!(chunk, b.next_u64().to_le_bytes());
    }
}

#[test]
fn reseeding_rewinds_rotating_generators() {
    let mut rng = XorShift4096Star::seed_from_u64(77);
    let first: Vec<u64> = (0..100).map(|_| rng.next_u64()).collect();
    rng.seed(77);
    assert_eq!(rng.cursor(), 0);
    let again: Vec<u64> = (0..100).map(|_| rng.next_u64()).collect();
    assert_eq!(first, again);
}

#[test]
fn restoring_an_all_zero_state_fails() {
    assert_eq!(XorShift64Star::from_state(0), Err(StateError::AllZero));
    assert_eq!(XoroShiro256Plus::from_state([0; 4]), Err(StateError::AllZero));
    assert_eq!(XorShift4096Star::from_state([0; 64], 0), Err(StateError::AllZero));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn arbitrary_seeds_are_deterministic(seed: u64) {
        for_each_generator!(assert_deterministic, seed, 10_000);
    }

    #[test]
    fn signed_seed_is_bit_reinterpreted(seed: i64) {
        let mut a = XoroShiro512StarStar::seed_from_u64(0);
        a.seed(seed);
        let mut b = XoroShiro512StarStar::seed_from_u64(seed as u64);
        prop_assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn state_round_trips(seed: u64, steps in 0usize..100) {
        let mut rng = XorShift1024StarPhi::seed_from_u64(seed);
        for _ in 0..steps {
            rng.next_u64();
        }
        let mut restored = XorShift1024StarPhi::from_state(rng.state(), rng.cursor()).unwrap();
        for _ in 0..32 {
            prop_assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }
}
