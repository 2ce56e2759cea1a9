use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xoroshiro128+ random number generator.
///
/// The xoroshiro128+ algorithm is not suitable for cryptographic purposes, but
/// is very fast and has good statistical properties, besides a low linear
/// complexity in the lowest bits. It is the successor to xorshift128+ and the
/// fastest generator here for producing floating-point numbers.
///
/// This is the original 2016 parameterization (rotations 55 and 36, shift 14)
/// from David Blackman and Sebastiano Vigna's `xoroshiro128plus.c`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro128Plus {
    s: [u64; 2],
}

impl XoroShiro128Plus {
    const JUMP: [u64; 2] = [0xbeac0467eba5facb, 0xd86b048b86aa9922];
    const LONG_JUMP: [u64; 2] = [0x18f7c399ccebda8d, 0xf2deac28bef3bb07];

    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations.
    ///
    /// ```
    /// use xorshift::rand_core::SeedableRng;
    /// use xorshift::XoroShiro128Plus;
    ///
    /// let rng1 = XoroShiro128Plus::seed_from_u64(0);
    /// let mut rng2 = rng1.clone();
    /// rng2.jump();
    /// let mut rng3 = rng2.clone();
    /// rng3.jump();
    /// ```
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^96 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^32 starting points, from each of which
    /// `jump()` will generate 2^32 non-overlapping subsequences for parallel
    /// distributed computations.
    pub fn long_jump(&mut self) {
        self.apply_jump(&Self::LONG_JUMP);
    }

    fn apply_jump(&mut self, poly: &[u64]) {
        impl_jump!(self, poly);
    }

    /// The raw state words, in the order `from_state` expects them.
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    /// Restore a generator from words previously returned by [`Self::state`].
    pub fn from_state(s: [u64; 2]) -> StateResult<XoroShiro128Plus> {
        reject_zero_state!(s);
        Ok(XoroShiro128Plus { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl RngCore for XoroShiro128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The two lowest bits have some linear dependencies, so we use the
        // upper bits instead.
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let [s0, mut s1] = self.s;
        let r = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s[0] = crate::rotl(s0, 55) ^ s1 ^ (s1 << 14);
        self.s[1] = crate::rotl(s1, 36);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XoroShiro128Plus {
    type Seed = [u8; 16];

    /// Create a new `XoroShiro128Plus`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    fn from_seed(seed: [u8; 16]) -> XoroShiro128Plus {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 2];
        read_u64_into(&seed, &mut s);
        XoroShiro128Plus { s }
    }

    /// Seed a `XoroShiro128Plus` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro128Plus {
        from_splitmix!(seed)
    }
}

impl_prng!(XoroShiro128Plus, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro128Plus);
