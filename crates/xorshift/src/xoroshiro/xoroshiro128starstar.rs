use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xoroshiro128** random number generator.
///
/// The xoroshiro128** algorithm is not suitable for cryptographic purposes, but
/// is very fast and has excellent statistical properties.
///
/// The algorithm used here is translated from [the `xoroshiro128starstar.c`
/// reference source code](http://xoshiro.di.unimi.it/xoroshiro128starstar.c) by
/// David Blackman and Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro128StarStar {
    s: [u64; 2],
}

impl XoroShiro128StarStar {
    const JUMP: [u64; 2] = [0xdf900294d8f554a5, 0x170865df4b3201fc];
    const LONG_JUMP: [u64; 2] = [0xd2a98b26625eee7b, 0xdddf9b1090aa7ac1];

    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations.
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

    /// The raw state words.
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    /// Restore a generator from words previously returned by [`Self::state`].
    pub fn from_state(s: [u64; 2]) -> StateResult<XoroShiro128StarStar> {
        reject_zero_state!(s);
        Ok(XoroShiro128StarStar { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl RngCore for XoroShiro128StarStar {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let [s0, mut s1] = self.s;
        let r = starstar_u64!(s0);
        s1 ^= s0;
        self.s[0] = crate::rotl(s0, 24) ^ s1 ^ (s1 << 16);
        self.s[1] = crate::rotl(s1, 37);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XoroShiro128StarStar {
    type Seed = [u8; 16];

    /// Create a new `XoroShiro128StarStar`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    fn from_seed(seed: [u8; 16]) -> XoroShiro128StarStar {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 2];
        read_u64_into(&seed, &mut s);
        XoroShiro128StarStar { s }
    }

    /// Seed a `XoroShiro128StarStar` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro128StarStar {
        from_splitmix!(seed)
    }
}

impl_prng!(XoroShiro128StarStar, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro128StarStar);
