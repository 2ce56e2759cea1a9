use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xorshift128+ random number generator.
///
/// A 64-bit version of Saito and Matsumoto's XSadd generator with a 128-bit state and a period
/// of 2^128 − 1. Not suitable for cryptographic purposes; superseded by
/// [`XoroShiro128Plus`](crate::XoroShiro128Plus), which is faster and statistically better.
///
/// This uses the final published shift triple (23, 18, 5). The earlier (23, 17, 26) triple
/// produces a different sequence and is not provided.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XorShift128Plus {
    s: [u64; 2],
}

impl XorShift128Plus {
    const JUMP: [u64; 2] = [0x8a5cd789635d2dff, 0x121fd2155c472f96];
    const LONG_JUMP: [u64; 2] = [0xea61c9f1f13962ae, 0xa1fe50ef79cfafb2];

    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations.
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^96 calls to `next_u64()`.
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
    pub fn from_state(s: [u64; 2]) -> StateResult<XorShift128Plus> {
        reject_zero_state!(s);
        Ok(XorShift128Plus { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl RngCore for XorShift128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let [mut s1, s0] = self.s;
        s1 ^= s1 << 23;
        s1 = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);
        self.s = [s0, s1];
        s1.wrapping_add(s0)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 16];

    /// Create a new `XorShift128Plus`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    fn from_seed(seed: [u8; 16]) -> XorShift128Plus {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 2];
        read_u64_into(&seed, &mut s);
        XorShift128Plus { s }
    }

    /// Seed a `XorShift128Plus` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XorShift128Plus {
        from_splitmix!(seed)
    }
}

impl_prng!(XorShift128Plus, jumpable);

#[cfg(test)]
jump_engine_tests!(XorShift128Plus);
