use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xoroshiro256+ random number generator.
///
/// The xoroshiro256+ algorithm is not suitable for cryptographic purposes, but
/// is very fast and has good statistical properties, besides a low linear
/// complexity in the lowest bits.
///
/// The algorithm used here is translated from [the `xoshiro256plus.c`
/// reference source code](http://xoshiro.di.unimi.it/xoshiro256plus.c) by
/// David Blackman and Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro256Plus {
    s: [u64; 4],
}

impl XoroShiro256Plus {
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
    ///
    /// ```
    /// use xorshift::rand_core::SeedableRng;
    /// use xorshift::XoroShiro256Plus;
    ///
    /// let rng1 = XoroShiro256Plus::seed_from_u64(0);
    /// let mut rng2 = rng1.clone();
    /// rng2.jump();
    /// let mut rng3 = rng2.clone();
    /// rng3.jump();
    /// ```
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
    pub fn from_state(s: [u64; 4]) -> StateResult<XoroShiro256Plus> {
        reject_zero_state!(s);
        Ok(XoroShiro256Plus { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl SeedableRng for XoroShiro256Plus {
    type Seed = [u8; 32];

    /// Create a new `XoroShiro256Plus`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    #[inline]
    fn from_seed(seed: [u8; 32]) -> XoroShiro256Plus {
        deal_with_zero_seed!(seed, Self);
        let mut state = [0; 4];
        read_u64_into(&seed, &mut state);
        XoroShiro256Plus { s: state }
    }

    /// Seed a `XoroShiro256Plus` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro256Plus {
        from_splitmix!(seed)
    }
}

impl RngCore for XoroShiro256Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The lowest bits have some linear dependencies, so we use the
        // upper bits instead.
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result_plus = self.s[0].wrapping_add(self.s[3]);
        impl_xoroshiro256!(self);
        result_plus
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl_prng!(XoroShiro256Plus, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro256Plus);
