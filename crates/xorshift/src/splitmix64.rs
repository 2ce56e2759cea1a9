use rand_core::impls::fill_bytes_via_next;
use rand_core::{RngCore, SeedableRng};

/// Weyl sequence increment, 2^64 / φ rounded to odd.
const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Stafford's variant 13 of the MurmurHash3 64-bit finalizer.
#[inline(always)]
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Stafford's "Mix4" finalizer, cheaper than [`mix64`] when only the upper 32 bits are used.
#[inline(always)]
const fn mix4_upper(mut z: u64) -> u32 {
    z = (z ^ (z >> 33)).wrapping_mul(0x62a9d9ed799705f5);
    z = (z ^ (z >> 28)).wrapping_mul(0xcb24d0a5c88c35b3);
    (z >> 32) as u32
}

/// A splitmix64 random number generator.
///
/// A fixed-increment version of Java 8's `SplittableRandom`: a Weyl sequence with a 64-bit
/// state, passed through a strong finalizer. Every 64-bit value is a valid state, so the seed
/// is used verbatim. Every other generator in this crate expands a single `u64` seed into its
/// full state by drawing consecutive outputs from a `SplitMix64` seeded with it.
///
/// `next_u64` follows [`splitmix64.c`](http://xoshiro.di.unimi.it/splitmix64.c) by Sebastiano
/// Vigna; `next_u32` uses the Mix4 finalizer from [`dsiutils`](http://dsiutils.di.unimi.it/).
/// Not suitable for cryptographic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct SplitMix64 {
    x: u64,
}

impl SplitMix64 {
    /// The raw state word.
    pub fn state(&self) -> u64 {
        self.x
    }

    /// Restore a generator from a state previously returned by [`Self::state`]. Every value,
    /// including zero, is a valid state.
    pub fn from_state(x: u64) -> SplitMix64 {
        SplitMix64 { x }
    }

    #[inline]
    fn advance(&mut self) -> u64 {
        self.x = self.x.wrapping_add(GOLDEN_GAMMA);
        self.x
    }
}

impl RngCore for SplitMix64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        mix4_upper(self.advance())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        mix64(self.advance())
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    /// Create a new `SplitMix64` whose state is the little-endian seed.
    fn from_seed(seed: [u8; 8]) -> SplitMix64 {
        SplitMix64::from_state(u64::from_le_bytes(seed))
    }

    /// Seed a `SplitMix64` from a `u64`, which becomes the state without any mixing.
    fn seed_from_u64(seed: u64) -> SplitMix64 {
        SplitMix64::from_state(seed)
    }
}

impl_prng!(SplitMix64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_outputs;
    use crate::Prng;

    #[test]
    fn reference() {
        // splitmix64.c seeded with 1477776061723855037
        let mut rng = SplitMix64::from_state(1477776061723855037);
        assert_outputs(
            &mut rng,
            &[
                1985237415132408290,
                2979275885539914483,
                13511426838097143398,
                8488337342461049707,
                15141737807933549159,
                17093170987380407015,
                16389528042912955399,
                13177319091862933652,
                10841969400225389492,
                17094824097954834098,
                3336622647361835228,
                9678412372263018368,
            ],
        );
    }

    #[test]
    fn expansion_of_fixed_seed() {
        let mut rng = SplitMix64::seed_from_u64(43433241441424);
        assert_outputs(
            &mut rng,
            &[
                17194183795887958845,
                18378278498163075296,
                18267894086814669085,
                2701606085646830732,
                4845195379448825551,
            ],
        );
    }

    #[test]
    fn byte_seed_is_little_endian() {
        let rng = SplitMix64::from_seed([0x01, 0x02, 0, 0, 0, 0, 0, 0x80]);
        assert_eq!(rng.state(), 0x8000_0000_0000_0201);
    }

    #[test]
    fn signed_seed_is_reinterpreted() {
        let mut rng = SplitMix64::seed_from_u64(0);
        rng.seed(-1);
        assert_eq!(rng.state(), u64::MAX);
        rng.next_u64();
        assert_eq!(rng.state(), GOLDEN_GAMMA.wrapping_sub(1));
    }

    #[test]
    fn next_u32_uses_mix4() {
        // dsiutils SplitMix64RandomGenerator seeded with 10
        let mut rng = SplitMix64::seed_from_u64(10);
        let expected = [
            3930361779, 4016923089, 4113052479, 925926767, 1755287528, 802865554, 954171070,
            3724185978, 173676273, 1414488795, 12664133, 1784889697, 1303817078, 261610523,
        ];
        for (i, &e) in expected.iter().enumerate() {
            assert_eq!(rng.next_u32(), e, "output {i}");
        }
    }
}
