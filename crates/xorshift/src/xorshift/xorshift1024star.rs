use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::{Seed1024, StateResult};

/// A xorshift1024* random number generator.
///
/// A Marsaglia xorshift generator over a circular buffer of sixteen words, scrambled by a
/// 64-bit multiplication, with a period of 2^1024 − 1. The buffer and its cursor form a
/// single state; they are always copied, restored and jumped together. Not suitable for
/// cryptographic purposes.
///
/// Based on `xorshift1024star.c` by Sebastiano Vigna.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XorShift1024Star {
    s: [u64; 16],
    p: usize,
}

impl XorShift1024Star {
    const MULTIPLIER: u64 = 1181783497276652981;

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
    ///
    /// ```
    /// use xorshift::rand_core::SeedableRng;
    /// use xorshift::XorShift1024Star;
    ///
    /// let mut rng = XorShift1024Star::seed_from_u64(0);
    /// let cursor = rng.cursor();
    /// rng.jump();
    /// assert_eq!(rng.cursor(), cursor);
    /// ```
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

    /// The raw buffer words. The word the cursor points to is `state()[cursor()]`.
    pub fn state(&self) -> [u64; 16] {
        self.s
    }

    /// Index of the most recently written buffer word.
    pub fn cursor(&self) -> usize {
        self.p
    }

    /// Restore a generator from a buffer and cursor previously returned by [`Self::state`] and
    /// [`Self::cursor`].
    pub fn from_state(s: [u64; 16], cursor: usize) -> StateResult<XorShift1024Star> {
        check_cursor!(s, cursor);
        reject_zero_state!(s);
        Ok(XorShift1024Star { s, p: cursor })
    }

    #[cfg(test)]
    fn logical_state(&self) -> Vec<u64> {
        (0..16).map(|j| self.s[(j + self.p) & 15]).collect()
    }
}

impl RngCore for XorShift1024Star {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impl_xorshift1024!(self).wrapping_mul(Self::MULTIPLIER)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XorShift1024Star {
    type Seed = Seed1024;

    /// Create a new `XorShift1024Star` with its cursor at zero.  If `seed` is entirely 0, it
    /// will be mapped to a different seed.
    fn from_seed(seed: Seed1024) -> XorShift1024Star {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 16];
        read_u64_into(&seed.0, &mut s);
        XorShift1024Star { s, p: 0 }
    }

    /// Seed a `XorShift1024Star` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XorShift1024Star {
        from_splitmix!(seed)
    }
}

impl_prng!(XorShift1024Star, jumpable);

#[cfg(test)]
jump_engine_tests!(XorShift1024Star);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_outputs;
    use crate::{Prng, StateError};

    #[test]
    fn reference() {
        let mut s = [0; 16];
        for (i, w) in s.iter_mut().enumerate() {
            *w = i as u64 + 1;
        }
        let mut rng = XorShift1024Star::from_state(s, 0).unwrap();
        let expected = [
            13859315694294268191,
            660744553483990740,
            478363890149751658,
            15363185464596488753,
            7048025930017007303,
            14380354638086930432,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn seeded() {
        let mut rng = XorShift1024Star::seed_from_u64(43433241441424);
        let expected = [
            10026512178551324413,
            5219852433425905228,
            4468655860274550441,
            6381422866024577580,
            13506167639876593504,
            6110333047519774752,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn jumps() {
        let mut rng = XorShift1024Star::seed_from_u64(43433241441424);
        rng.jump();
        assert_eq!(rng.cursor(), 0);
        assert_eq!(rng.next_u64(), 5924200144026343303);
        assert_eq!(rng.next_u64(), 17664852625271336373);

        let mut rng = XorShift1024Star::seed_from_u64(43433241441424);
        for _ in 0..5 {
            rng.next_u64();
        }
        rng.jump();
        assert_eq!(rng.cursor(), 5);
        assert_eq!(rng.next_u64(), 1307873598559575903);
        assert_eq!(rng.next_u64(), 17125483982321571289);

        let mut rng = XorShift1024Star::seed_from_u64(43433241441424);
        rng.long_jump();
        assert_eq!(rng.next_u64(), 12378911435213866310);
        assert_eq!(rng.next_u64(), 12456275216055895920);
    }

    #[test]
    fn cursor_wraps_and_reseed_resets_it() {
        let mut rng = XorShift1024Star::seed_from_u64(1);
        for i in 1..=40 {
            rng.next_u64();
            assert_eq!(rng.cursor(), i % 16);
        }
        rng.seed(1);
        assert_eq!(rng.cursor(), 0);
    }

    #[test]
    fn state_round_trip_keeps_cursor() {
        let mut rng = XorShift1024Star::seed_from_u64(9);
        for _ in 0..7 {
            rng.next_u64();
        }
        let mut restored = XorShift1024Star::from_state(rng.state(), rng.cursor()).unwrap();
        assert_eq!(restored, rng);
        for _ in 0..32 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }

    #[test]
    fn rejects_bad_state() {
        assert_eq!(
            XorShift1024Star::from_state([1; 16], 16),
            Err(StateError::CursorOutOfRange { cursor: 16, len: 16 })
        );
        assert_eq!(XorShift1024Star::from_state([0; 16], 3), Err(StateError::AllZero));
    }
}
