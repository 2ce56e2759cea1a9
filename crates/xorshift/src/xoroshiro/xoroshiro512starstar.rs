use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::{Seed512, StateResult};

/// A xoroshiro512** random number generator.
///
/// The xoroshiro512** algorithm is not suitable for cryptographic purposes, but
/// is very fast and has excellent statistical properties. It has twice the state
/// of [`XoroShiro256StarStar`](crate::XoroShiro256StarStar) at the same speed.
///
/// The algorithm used here is translated from [the `xoshiro512starstar.c`
/// reference source code](http://xoshiro.di.unimi.it/xoshiro512starstar.c) by
/// David Blackman and Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro512StarStar {
    s: [u64; 8],
}

impl XoroShiro512StarStar {
    const JUMP: [u64; 8] = [
        0x33ed89b6e7a353f9,
        0x760083d7955323be,
        0x2837f2fbb5f22fae,
        0x4b8c5674d309511c,
        0xb11ac47a7ba28c25,
        0xf1be7667092bcc1c,
        0x53851efdb6df0aaf,
        0x1ebbc8b23eaf25db,
    ];
    const LONG_JUMP: [u64; 8] = [
        0x11467fef8f921d28,
        0xa2a819f2e79c8ea8,
        0xa8299fc284b3959a,
        0xb4d347340ca63ee1,
        0x1cb0940bedbff6ce,
        0xd956c5c4fa1f8e17,
        0x915e38fd4eda93bc,
        0x5b3ccdfa5d7daca5,
    ];

    /// Jump forward, equivalently to 2^256 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^256 non-overlapping subsequences for
    /// parallel computations.
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^384 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^128 starting points, from each of which
    /// `jump()` will generate 2^128 non-overlapping subsequences for parallel
    /// distributed computations.
    pub fn long_jump(&mut self) {
        self.apply_jump(&Self::LONG_JUMP);
    }

    fn apply_jump(&mut self, poly: &[u64]) {
        impl_jump!(self, poly);
    }

    /// The raw state words.
    pub fn state(&self) -> [u64; 8] {
        self.s
    }

    /// Restore a generator from words previously returned by [`Self::state`].
    pub fn from_state(s: [u64; 8]) -> StateResult<XoroShiro512StarStar> {
        reject_zero_state!(s);
        Ok(XoroShiro512StarStar { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl SeedableRng for XoroShiro512StarStar {
    type Seed = Seed512;

    /// Create a new `XoroShiro512StarStar`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    #[inline]
    fn from_seed(seed: Seed512) -> XoroShiro512StarStar {
        deal_with_zero_seed!(seed, Self);
        let mut state = [0; 8];
        read_u64_into(&seed.0, &mut state);
        XoroShiro512StarStar { s: state }
    }

    /// Seed a `XoroShiro512StarStar` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro512StarStar {
        from_splitmix!(seed)
    }
}

impl RngCore for XoroShiro512StarStar {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result_starstar = starstar_u64!(self.s[1]);
        impl_xoroshiro512!(self);
        result_starstar
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl_prng!(XoroShiro512StarStar, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro512StarStar);
