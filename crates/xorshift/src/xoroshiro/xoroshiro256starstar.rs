use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xoroshiro256** random number generator.
///
/// The xoroshiro256** algorithm is not suitable for cryptographic purposes, but
/// is very fast and has excellent statistical properties. It is the
/// recommended all-purpose generator of this crate.
///
/// The algorithm used here is translated from [the `xoshiro256starstar.c`
/// reference source code](http://xoshiro.di.unimi.it/xoshiro256starstar.c) by
/// David Blackman and Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro256StarStar {
    s: [u64; 4],
}

impl XoroShiro256StarStar {
    const JUMP: [u64; 4] = [
        0x180ec6d33cfd0aba,
        0xd5a61266f0c9392c,
        0xa9582618e03fc9aa,
        0x39abdc4529b1661c,
    ];
    const LONG_JUMP: [u64; 4] = [
        0x76e15d3efefdcbbf,
        0xc5004e441c522fb3,
        0x77710069854ee241,
        0x39109bb02acbe635,
    ];

    /// Jump forward, equivalently to 2^128 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^128 non-overlapping subsequences for
    /// parallel computations.
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^192 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 starting points, from each of which
    /// `jump()` will generate 2^64 non-overlapping subsequences for parallel
    /// distributed computations.
    pub fn long_jump(&mut self) {
        self.apply_jump(&Self::LONG_JUMP);
    }

    fn apply_jump(&mut self, poly: &[u64]) {
        impl_jump!(self, poly);
    }

    /// The raw state words.
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Restore a generator from words previously returned by [`Self::state`].
    pub fn from_state(s: [u64; 4]) -> StateResult<XoroShiro256StarStar> {
        reject_zero_state!(s);
        Ok(XoroShiro256StarStar { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl SeedableRng for XoroShiro256StarStar {
    type Seed = [u8; 32];

    /// Create a new `XoroShiro256StarStar`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    #[inline]
    fn from_seed(seed: [u8; 32]) -> XoroShiro256StarStar {
        deal_with_zero_seed!(seed, Self);
        let mut state = [0; 4];
        read_u64_into(&seed, &mut state);
        XoroShiro256StarStar { s: state }
    }

    /// Seed a `XoroShiro256StarStar` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro256StarStar {
        from_splitmix!(seed)
    }
}

impl RngCore for XoroShiro256StarStar {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result_starstar = starstar_u64!(self.s[1]);
        impl_xoroshiro256!(self);
        result_starstar
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl_prng!(XoroShiro256StarStar, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro256StarStar);
