use rand_core::{RngCore, SeedableRng};

const I63_MASK: u64 = (1 << 63) - 1;

/// The capability every generator in this crate provides: seeding from a single 64-bit value and
/// producing an endless deterministic stream of `u64`s.
///
/// `next_u64` itself comes from [`RngCore`], construction from [`SeedableRng`]. Two generators of
/// the same type seeded with the same value always produce the same sequence.
pub trait Prng: RngCore + SeedableRng + Clone {
    /// Re-seed the generator in place. The bits of `seed` are reinterpreted as a `u64` and expanded
    /// with `SplitMix64` exactly as [`SeedableRng::seed_from_u64`] does; rotating-buffer generators
    /// also reset their cursor.
    #[inline]
    fn seed(&mut self, seed: i64) {
        *self = Self::seed_from_u64(seed as u64);
    }

    /// Return a non-negative pseudo-random 63-bit integer, the next `u64` with its top bit cleared.
    #[inline]
    fn next_i63(&mut self) -> i64 {
        (self.next_u64() & I63_MASK) as i64
    }
}

/// Generators that can skip a large, fixed number of steps in constant time, which is how
/// non-overlapping streams for parallel use are carved out of one sequence.
///
/// Both jumps consume outputs internally; there is no continuity between the values returned
/// before and after a jump.
pub trait JumpablePrng: Prng {
    /// Advance the state as if `next_u64` had been called 2^(bits/2) times, where `bits` is the
    /// size of the state (2^512 for the 1024-bit generators, 2^2048 for the 4096-bit one).
    fn jump(&mut self);

    /// Advance the state by 2^(3·bits/4) steps. Each long jump starts a region from which
    /// 2^(bits/4) ordinary jumps can be made without overlapping the next region.
    fn long_jump(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SplitMix64, XoroShiro128Plus};

    #[test]
    fn seed_matches_seed_from_u64() {
        let mut a = XoroShiro128Plus::seed_from_u64(1);
        a.seed(-1);
        let mut b = XoroShiro128Plus::seed_from_u64(u64::MAX);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn next_i63_clears_top_bit_only() {
        let mut a = SplitMix64::seed_from_u64(7);
        let mut b = a.clone();
        for _ in 0..1000 {
            let wide = a.next_u64();
            let narrow = b.next_i63();
            assert!(narrow >= 0);
            assert_eq!(narrow as u64, wide & I63_MASK);
        }
    }
}
