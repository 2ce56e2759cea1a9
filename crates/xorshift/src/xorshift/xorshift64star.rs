use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::StateResult;

const MULTIPLIER: u64 = 2685821657736338717;

/// A xorshift64* random number generator.
///
/// A Marsaglia xorshift generator on a single 64-bit word whose output is scrambled by an
/// invertible multiplication. The period is 2^64 − 1. Not suitable for cryptographic purposes,
/// and its small state makes it a poor fit for parallel streams; it has no jump function.
///
/// The output is the *current* state times the multiplier, taken before the state is
/// updated. Implementations that update first and multiply the new state produce the same
/// sequence shifted by one step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct XorShift64Star {
    s: u64,
}

impl XorShift64Star {
    /// The raw state word.
    pub fn state(&self) -> u64 {
        self.s
    }

    /// Restore a generator from a word previously returned by [`Self::state`].
    pub fn from_state(s: u64) -> StateResult<XorShift64Star> {
        reject_zero_state!([s]);
        Ok(XorShift64Star { s })
    }
}

impl RngCore for XorShift64Star {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = self.s.wrapping_mul(MULTIPLIER);
        self.s ^= self.s >> 12;
        self.s ^= self.s << 25;
        self.s ^= self.s >> 27;
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for XorShift64Star {
    type Seed = [u8; 8];

    /// Create a new `XorShift64Star`.  If `seed` is entirely 0, it will be
    /// mapped to a different seed.
    fn from_seed(seed: [u8; 8]) -> XorShift64Star {
        deal_with_zero_seed!(seed, Self);
        let mut s = [0; 1];
        read_u64_into(&seed, &mut s);
        XorShift64Star { s: s[0] }
    }

    /// Seed a `XorShift64Star` from a `u64` using `SplitMix64`.
    fn seed_from_u64(seed: u64) -> XorShift64Star {
        from_splitmix!(seed)
    }
}

impl_prng!(XorShift64Star);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_outputs;

    #[test]
    fn reference() {
        let mut rng = XorShift64Star::from_state(1).unwrap();
        let expected = [
            2685821657736338717,
            5180492295206395165,
            12380297144915551517,
            13389498078930870103,
            5599127315341312413,
            1036278371763004928,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn seeded() {
        let mut rng = XorShift64Star::seed_from_u64(43433241441424);
        // the state is the first SplitMix64 output for this seed
        assert_eq!(rng.state(), 17194183795887958845);
        let expected = [
            3332331185950117609,
            2186850078794649540,
            11646625786804318753,
            5536399179444158538,
        ];
        assert_outputs(&mut rng, &expected);
    }

    #[test]
    fn zero_seed_still_produces_numbers() {
        let mut rng = XorShift64Star::seed_from_u64(0);
        assert_ne!(rng.state(), 0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }
}
