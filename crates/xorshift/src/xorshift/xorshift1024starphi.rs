use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::{Seed1024, StateResult};

/// The golden-ratio multiplier, 2^64 / φ rounded to odd.
const MULTIPLIER: u64 = 0x9e3779b97f4a7c13;

/// A xorshift1024*φ random number generator.
///
/// The same linear engine as [`XorShift1024Star`](crate::XorShift1024Star) with the output
/// multiplier replaced by the golden-ratio constant, which improves the lowest bits. It is a
/// separate type with its own jump tables: a buffer seeded for one of the two generators can
/// never be driven by the other.
///
/// ```compile_fail
/// use xorshift::rand_core::SeedableRng;
/// use xorshift::{XorShift1024Star, XorShift1024StarPhi};
///
/// let rng: XorShift1024Star = XorShift1024StarPhi::seed_from_u64(7);
/// ```
///
/// Not suitable for cryptographic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XorShift1024StarPhi {
    s: [u64; 16],
    p: usize,
}

impl XorShift1024StarPhi {
    const JUMP: [u64; 16] = [
        0x84242f96eca9c41d,
        0xa3c65b8776f96855,
        0x5b34a39f070b5837,
        0x4489affce4f31a1e,
        0x2ffeeb0a48316f40,
        0xdc2d9891fe68c022,
        0x3659132bb12fea70,
        0xaac17d8efa43cab8,
        0xc4cb815590989b13,
        0x5ee975283d71c93b,
        0x691548c86c1bd540,
        0x7910c41d10a1e6a5,
        0x0b5fc64563b3e2a8,
        0x047f7684e9fc949d,
        0xb99181f2d8f685ca,
        0x284600e3f30e38c3,
    ];

    const LONG_JUMP: [u64; 16] = [
        0x1db6ba0415e68f80,
        0x1f09c81ae9ac14e7,
        0x1f6719a6ee34e7f3,
        0xc120593b38a9b5ea,
        0x3c412a1d4223ae9a,
        0x8048b2a10ba2f726,
        0x88e5362f50f7f650,
        0x891fa8984bfc0276,
        0xa19d44b0dd77a638,
        0xac0ab6e69c4da928,
        0x46719fb5c5c827b7,
        0x05dd7bf153461782,
        0x56a51dd185004647,
        0x59b2257befdad3d3,
        0xd5d8a614c24b08b3,
        0xd0159f547fca0a39,
    ];

    /// Jump forward, equivalently to 2^512 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^512 non-overlapping subsequences for
    /// parallel computations. The cursor is left where it was.
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^768 calls to `next_u64()`.
    pub fn long_jump(&mut self) {
        self.apply_jump(&Self::LONG_JUMP);
    }

    fn apply_jump(&mut self, poly: &[u64]) {
        impl_jump_rotating!(self, poly);
    }

    /// The raw buffer words.
    pub fn state(&self) -> [u64; 16] {
        self.s
    }

    /// Index of the most recently written buffer word.
    pub fn cursor(&self) -> usize {
        self.p
    }

    /// Restore a generator from a buffer and cursor previously returned by [`Self::state`] and
    /// [`Self::cursor`].
    pub fn from_state(s: [u64; 16], cursor: usize) -> StateResult<XorShift1024StarPhi> {
        check_cursor!(s, cursor);
        reject_zero_state!(s);
        Ok(XorShift1024StarPhi { s, p: cursor })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        (0..16).map(|j| self.s[(j + self.p) & 15]).collect()
    }
}

impl RngCore for XorShift1024StarPhi {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impl_xorshift1024!(self).wrapping_mul(MULTIPLIER)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XorShift1024StarPhi {
    type Seed = Seed1024;

    /// Create a new `XorShift1024StarPhi` with its cursor at zero.  If `seed` is entirely 0,
    /// it will be mapped to a different seed.
    fn from_seed(seed: Seed1024) -> XorShift1024StarPhi {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 16];
        read_u64_into(&seed.0, &mut s);
        XorShift1024StarPhi { s, p: 0 }
    }

    /// Seed a `XorShift1024StarPhi` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XorShift1024StarPhi {
        from_splitmix!(seed)
    }
}

impl_prng!(XorShift1024StarPhi, jumpable);

#[cfg(test)]
jump_engine_tests!(XorShift1024StarPhi);
