use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::{Seed4096, StateResult};

const MULTIPLIER: u64 = 8372773778140471301;

/// A xorshift4096* random number generator.
///
/// Sixty-four words in a circular buffer with a cursor, giving a period of 2^4096 − 1. Use it
/// when a very long period matters more than cache footprint; otherwise prefer
/// [`XorShift1024Star`](crate::XorShift1024Star) or the xoroshiro family. Not suitable for
/// cryptographic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XorShift4096Star {
    s: [u64; 64],
    p: usize,
}

impl XorShift4096Star {
    const JUMP: [u64; 64] = [
        0x81726c183e1f2b32,
        0x1d14b4ca1ccb4f83,
        0xc4fa8e4804b07141,
        0xd60ff82970b55da5,
        0x9a66c0cf60970c40,
        0x743a1c8ffe415090,
        0x486fc0088093ca47,
        0xac4220169ceca91a,
        0xffffb0134c4d0de8,
        0xfe862370f7398db9,
        0x1e0c12f97aaa6997,
        0xf11c70d04ae83b48,
        0x06f6bdd08f1e98e3,
        0xf5610872b815d50f,
        0x8de6347c69d88e81,
        0x441c4656de824551,
        0xc1a6c2754d439778,
        0xcd0c0878900e4e61,
        0xcf0264f0fbac2e9a,
        0x13752b3872e399ad,
        0x0bfe48c5219e45a8,
        0xdedeb2ad0c1cbb6a,
        0xf602f5014fa0d762,
        0xbe21bc9e563ba41c,
        0x5ba36a81cf13e5bb,
        0x36e7abdade6c5a4d,
        0x9f7c353f36074299,
        0xf48dcd69b5e2b892,
        0x60d18c48ecc102bb,
        0xf2159d8829b21e90,
        0xf90858dc22888710,
        0xe934b0fac841a566,
        0x4261af95d0a3c787,
        0x48fed20489249b2a,
        0x38b3fb92a702dd5b,
        0x962d3343413d5df9,
        0x1c4a15e89b820d07,
        0x86c62fe67125cd85,
        0x15f5959b07478428,
        0xce428e6f7f34a2c8,
        0xfdcf54a260a1e30d,
        0x89ae2298b4a68c64,
        0x9e9b475801a2ba16,
        0x84f76e9650413be1,
        0xf01414094d5c8e5a,
        0xbe503690c568da11,
        0xc79a989b5018b1d6,
        0x9fcbdaf2f8e4a9a9,
        0x527301ba68a003d1,
        0x077629e226eb6930,
        0x8944b588ead2e0da,
        0x3f4a47805130d14d,
        0x5ab4260d606d5101,
        0xce4fd11cefd2b498,
        0xb77a820a4f03c3cf,
        0x8a865d2da2f294ec,
        0xef2f24022e77070c,
        0x86b58c3752d6892c,
        0xced214f46381e6aa,
        0xe1d937ab2f8e8565,
        0xd98e325ac21b919c,
        0xea32c337e8f0a56a,
        0x79eab3f0eaf1a242,
        0xd0bbbeeae8920e6c,
    ];

    const LONG_JUMP: [u64; 64] = [
        0x643540010f69cb04,
        0x0be04201545542b1,
        0x2c7f5b99b1c32e51,
        0x1773cc83288804c9,
        0x8d18257a15507aea,
        0x5f587c0d9693c1cb,
        0xe4e5e9f8a52dd1a4,
        0x3ec26e9a52b7f9c8,
        0xa4db1761124d805a,
        0x064f5fe4d333ba8e,
        0x064e0768f398d0bc,
        0x67fdf8c2b351bd74,
        0x10486a4f82f65b1f,
        0xe8659d8715ee0bd0,
        0x30f6596f2adc78b4,
        0xb719d4a0b017d712,
        0xf14ebf7a99a505a7,
        0xde397eae37debc41,
        0x03af135a78ae5d33,
        0x989f907dc92e8786,
        0xad801810c997a813,
        0x6d0ad052f62fcd57,
        0x0f35fa0e73312399,
        0x71b7101b354c22dd,
        0x35cf3d8a813b41b9,
        0x563c957d7c603ac7,
        0xa33cc627c49b5711,
        0x20ff9a8b37be57ee,
        0x48e29edb036c3f03,
        0xa0d45af488f4aa69,
        0xdd9f02507aee6bfe,
        0x95105f61ac9db2f4,
        0x958c7e762068f33f,
        0xcb2818eff8eae368,
        0xb3cd7453056b2da7,
        0x10eaefd6b26c99bd,
        0x278e1c80928782fe,
        0x53aa2a00133c5963,
        0x2aa9ad55d8974c58,
        0xfcd956c7e88dfbca,
        0x2c30ef94895a87ed,
        0x69acb18423b5b9dd,
        0x67a9daadc24dcebb,
        0x8e5710cdf27d9297,
        0x53e2a259f5fcaf07,
        0x2f8091e1e4137af4,
        0xc694626242520eb3,
        0x787e1e9e4d08aa20,
        0x949980e3e8fc40c4,
        0x3835e29f216bbc49,
        0x406ed5a30e4243ab,
        0x46308b5853f071a1,
        0xa207d2fe1e303733,
        0xe41bf480d04e06ea,
        0xf2a83e68488bf7e9,
        0xa6a371e1ca1a3c01,
        0x74077de82697541c,
        0xb4f987a62db88fc6,
        0xeee904239a37d470,
        0x4885e64cb02b35ec,
        0xf33a03ce166d2e7e,
        0x2c0bef8cbc9147a0,
        0x9f4be78571ef4d23,
        0xd007e7d0b11ab3d4,
    ];

    /// Jump forward, equivalently to 2^2048 calls to `next_u64()`.
    ///
    /// The cursor is left where it was.
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^3072 calls to `next_u64()`.
    pub fn long_jump(&mut self) {
        self.apply_jump(&Self::LONG_JUMP);
    }

    fn apply_jump(&mut self, poly: &[u64]) {
        impl_jump_rotating!(self, poly);
    }

    /// The raw buffer words.
    pub fn state(&self) -> [u64; 64] {
        self.s
    }

    /// Index of the most recently written buffer word.
    pub fn cursor(&self) -> usize {
        self.p
    }

    /// Restore a generator from a buffer and cursor previously returned by [`Self::state`] and
    /// [`Self::cursor`].
    pub fn from_state(s: [u64; 64], cursor: usize) -> StateResult<XorShift4096Star> {
        check_cursor!(s, cursor);
        reject_zero_state!(s);
        Ok(XorShift4096Star { s, p: cursor })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        (0..64).map(|j| self.s[(j + self.p) & 63]).collect()
    }
}

impl RngCore for XorShift4096Star {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let q = (self.p + 1) & 63;
        let mut s0 = self.s[self.p];
        let mut s1 = self.s[q];

        s1 ^= s1 << 25;
        s1 ^= s1 >> 3;
        s0 ^= s0 >> 49;
        let t = s0 ^ s1;

        self.s[q] = t;
        self.p = q;
        t.wrapping_mul(MULTIPLIER)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XorShift4096Star {
    type Seed = Seed4096;

    /// Create a new `XorShift4096Star` with its cursor at zero.  If `seed` is entirely 0, it
    /// will be mapped to a different seed.
    fn from_seed(seed: Seed4096) -> XorShift4096Star {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 64];
        read_u64_into(&seed.0, &mut s);
        XorShift4096Star { s, p: 0 }
    }

    /// Seed a `XorShift4096Star` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XorShift4096Star {
        from_splitmix!(seed)
    }
}

impl_prng!(XorShift4096Star, jumpable);

#[cfg(test)]
jump_engine_tests!(XorShift4096Star);
