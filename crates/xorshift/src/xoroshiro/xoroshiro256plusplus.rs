use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

/// A xoroshiro256++ random number generator.
///
/// The xoroshiro256++ algorithm is not suitable for cryptographic purposes, but
/// is very fast and has excellent statistical properties.
///
/// The algorithm used here is translated from [the `xoshiro256plusplus.c`
/// reference source code](http://xoshiro.di.unimi.it/xoshiro256plusplus.c) by
/// David Blackman and Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XoroShiro256PlusPlus {
    s: [u64; 4],
}

impl XoroShiro256PlusPlus {
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
    pub fn jump(&mut self) {
        self.apply_jump(&Self::JUMP);
    }

    /// Jump forward, equivalently to 2^192 calls to `next_u64()`.
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
    pub fn from_state(s: [u64; 4]) -> StateResult<XoroShiro256PlusPlus> {
        reject_zero_state!(s);
        Ok(XoroShiro256PlusPlus { s })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        self.s.to_vec()
    }
}

impl SeedableRng for XoroShiro256PlusPlus {
    type Seed = [u8; 32];

    /// Create a new `XoroShiro256PlusPlus`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    #[inline]
    fn from_seed(seed: [u8; 32]) -> XoroShiro256PlusPlus {
        deal_with_zero_seed!(seed, Self);
        let mut state = [0; 4];
        read_u64_into(&seed, &mut state);
        XoroShiro256PlusPlus { s: state }
    }

    /// Seed a `XoroShiro256PlusPlus` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XoroShiro256PlusPlus {
        from_splitmix!(seed)
    }
}

impl RngCore for XoroShiro256PlusPlus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result_plusplus = plusplus_u64!(self.s[0], self.s[3], 23);
        impl_xoroshiro256!(self);
        result_plusplus
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl_prng!(XoroShiro256PlusPlus, jumpable);

#[cfg(test)]
jump_engine_tests!(XoroShiro256PlusPlus);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_outputs;

    #[test]
    fn reference() {
        let mut rng = XoroShiro256PlusPlus::from_seed([
            1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0,
            0, 0, 0,
        ]);
        // These values were produced with the reference implementation:
        // http://xoshiro.di.unimi.it/xoshiro256plusplus.c
        let expected = [
            41943041,
            58720359,
            3588806011781223,
            3591011842654386,
            9228616714210784205,
            9973669472204895162,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn seeded() {
        let mut rng = XoroShiro256PlusPlus::seed_from_u64(43433241441424);
        let expected = [
            12442702140612802882,
            11838766166281800835,
            17448458881874757759,
            9283467508711513587,
            16229716040262670015,
            4446314539284865266,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn jumps() {
        let mut rng = XoroShiro256PlusPlus::seed_from_u64(43433241441424);
        rng.jump();
        assert_eq!(rng.next_u64(), 12847547800080389218);
        assert_eq!(rng.next_u64(), 11973595203752404187);

        let mut rng = XoroShiro256PlusPlus::seed_from_u64(43433241441424);
        rng.long_jump();
        assert_eq!(rng.next_u64(), 16631032517309309270);
        assert_eq!(rng.next_u64(), 726843675269422195);
    }
}
