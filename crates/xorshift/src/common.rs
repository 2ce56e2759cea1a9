/// Rotate `x` left by `k` bits.
///
/// `k` must be in `1..64`; every rotation constant used by the generators in this crate is.
#[inline(always)]
pub const fn rotl(x: u64, k: u32) -> u64 {
    debug_assert!(k > 0 && k < 64);
    (x << k) | (x >> (64 - k))
}

/// Initialize a RNG from a `u64` seed using `SplitMix64`.
macro_rules! from_splitmix {
    ($seed:expr) => {{
        let mut rng = crate::SplitMix64::seed_from_u64($seed);
        Self::from_rng(&mut rng)
    }};
}

/// Apply the ** scrambler used by some RNGs from the xoroshiro family.
macro_rules! starstar_u64 {
    ($x:expr) => {
        crate::rotl($x.wrapping_mul(5), 7).wrapping_mul(9)
    };
}

/// Apply the ++ scrambler used by some RNGs from the xoroshiro family.
macro_rules! plusplus_u64 {
    ($x:expr, $y:expr, $rot:expr) => {
        crate::rotl($x.wrapping_add($y), $rot).wrapping_add($x)
    };
}

/// Implement the 256-bit xoroshiro iteration.
macro_rules! impl_xoroshiro256 {
    ($self:expr) => {
        let t = $self.s[1] << 17;

        $self.s[2] ^= $self.s[0];
        $self.s[3] ^= $self.s[1];
        $self.s[1] ^= $self.s[2];
        $self.s[0] ^= $self.s[3];

        $self.s[2] ^= t;

        $self.s[3] = crate::rotl($self.s[3], 45);
    };
}

/// Implement the 512-bit xoroshiro iteration.
macro_rules! impl_xoroshiro512 {
    ($self:expr) => {
        let t = $self.s[1] << 11;

        $self.s[2] ^= $self.s[0];
        $self.s[5] ^= $self.s[1];
        $self.s[1] ^= $self.s[2];
        $self.s[7] ^= $self.s[3];
        $self.s[3] ^= $self.s[4];
        $self.s[4] ^= $self.s[5];
        $self.s[0] ^= $self.s[6];
        $self.s[6] ^= $self.s[7];

        $self.s[6] ^= t;

        $self.s[7] = crate::rotl($self.s[7], 21);
    };
}

/// Implement the xorshift1024 iteration, evaluating to the new word before scrambling.
macro_rules! impl_xorshift1024 {
    ($self:expr) => {{
        let q = ($self.p + 1) & 15;
        let s0 = $self.s[$self.p];
        let mut s1 = $self.s[q];

        s1 ^= s1 << 31;
        let t = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);

        $self.s[q] = t;
        $self.p = q;
        t
    }};
}

/// Check the cursor of a rotating-buffer state before restoring it.
macro_rules! check_cursor {
    ($state:expr, $cursor:expr) => {
        if $cursor >= $state.len() {
            tracing::debug!(
                generator = core::any::type_name::<Self>(),
                cursor = $cursor,
                len = $state.len(),
                "rejecting state restore, cursor out of range"
            );
            return Err(crate::StateError::CursorOutOfRange {
                cursor: $cursor,
                len: $state.len(),
            });
        }
    };
}

/// Implement the jump loop for a generator whose whole state is the flat array `s`.
///
/// For every set bit of the polynomial the current state is xored into an accumulator, and the
/// generator is stepped once per bit regardless. The accumulator becomes the new state.
macro_rules! impl_jump {
    ($self:expr, $poly:expr) => {{
        let mut acc = $self.s.map(|_| 0u64);
        for &word in $poly.iter() {
            for b in 0..64 {
                if word & (1u64 << b) != 0 {
                    for (a, s) in acc.iter_mut().zip($self.s.iter()) {
                        *a ^= *s;
                    }
                }
                $self.next_u64();
            }
        }
        $self.s = acc;
    }};
}

/// Implement the jump loop for a rotating-buffer generator (`s` plus cursor `p`).
///
/// Words are read and written relative to the cursor, which is left untouched.
macro_rules! impl_jump_rotating {
    ($self:expr, $poly:expr) => {{
        let mask = $self.s.len() - 1;
        let mut acc = $self.s.map(|_| 0u64);
        for &word in $poly.iter() {
            for b in 0..64 {
                if word & (1u64 << b) != 0 {
                    for (j, a) in acc.iter_mut().enumerate() {
                        *a ^= $self.s[(j + $self.p) & mask];
                    }
                }
                $self.next_u64();
            }
        }
        for (j, a) in acc.iter().enumerate() {
            $self.s[(j + $self.p) & mask] = *a;
        }
    }};
}

/// Map an all-zero seed to a different one.
macro_rules! deal_with_zero_seed {
    ($seed:expr, $Self:ident) => {
        if $seed.iter().all(|&x| x == 0) {
            tracing::trace!(
                generator = core::any::type_name::<$Self>(),
                "all-zero seed, falling back to seed_from_u64(0)"
            );
            return $Self::seed_from_u64(0);
        }
    };
}

/// Reject an all-zero word array when restoring state.
macro_rules! reject_zero_state {
    ($state:expr) => {
        if $state.iter().all(|&w| w == 0) {
            tracing::debug!(
                generator = core::any::type_name::<Self>(),
                "rejecting state restore, all words are zero"
            );
            return Err(crate::StateError::AllZero);
        }
    };
}

/// Implement the capability traits, optionally including [`JumpablePrng`](crate::JumpablePrng)
/// in terms of the inherent `jump` and `long_jump` methods.
macro_rules! impl_prng {
    ($ty:ty) => {
        impl crate::Prng for $ty {}
    };
    ($ty:ty, jumpable) => {
        impl crate::Prng for $ty {}

        impl crate::JumpablePrng for $ty {
            #[inline]
            fn jump(&mut self) {
                <$ty>::jump(self)
            }

            #[inline]
            fn long_jump(&mut self) {
                <$ty>::long_jump(self)
            }
        }
    };
}

/// Seed of `N` bytes for the wide-state generators.
///
/// This wrapper is necessary, because some traits required for a seed are not
/// implemented on large arrays.
#[derive(Clone)]
pub struct WideSeed<const N: usize>(pub [u8; N]);

/// 512-bit seed for [`XoroShiro512StarStar`](crate::XoroShiro512StarStar).
pub type Seed512 = WideSeed<64>;
/// 1024-bit seed for the xorshift1024 generators.
pub type Seed1024 = WideSeed<128>;
/// 4096-bit seed for [`XorShift4096Star`](crate::XorShift4096Star).
pub type Seed4096 = WideSeed<512>;

impl<const N: usize> WideSeed<N> {
    /// Return an iterator over the seed.
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.0.iter()
    }
}

impl<const N: usize> core::fmt::Debug for WideSeed<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.0[..].fmt(f)
    }
}

impl<const N: usize> Default for WideSeed<N> {
    fn default() -> Self {
        WideSeed([0; N])
    }
}

impl<const N: usize> AsMut<[u8]> for WideSeed<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u8]> for WideSeed<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}


/// Tests shared by every jumpable generator. The type must provide `apply_jump(&mut self, &[u64])`
/// and `logical_state(&self) -> Vec<u64>` (the state words as seen from the cursor).
#[cfg(test)]
macro_rules! jump_engine_tests {
    ($ty:ty) => {
        mod jump_engine {
            use super::*;
            use crate::common::testing::{
                advance, assert_same_stream, berlekamp_massey, monomial, polynomial, ModPoly,
            };

            fn start() -> $ty {
                let mut rng = <$ty>::seed_from_u64(0x5eed_cafe);
                // leave the cursor of rotating variants somewhere other than zero
                advance(&mut rng, 5);
                rng
            }

            #[test]
            fn monomial_jump_matches_sequential_steps() {
                for k in [0, 1, 2, 63, 64, 65, 129, 1000] {
                    let mut jumped = start();
                    let mut stepped = jumped.clone();
                    jumped.apply_jump(&monomial(k));
                    advance(&mut stepped, k);
                    assert_same_stream(&mut jumped, &mut stepped);
                }
            }

            #[test]
            fn jump_by_2_16_matches_65536_steps() {
                let mut jumped = start();
                let mut stepped = jumped.clone();
                jumped.apply_jump(&monomial(1 << 16));
                advance(&mut stepped, 1 << 16);
                assert_eq!(jumped.logical_state(), stepped.logical_state());
                assert_same_stream(&mut jumped, &mut stepped);
            }

            #[test]
            fn polynomial_jump_is_xor_of_monomial_jumps() {
                let exponents = [3, 70, 200];
                let mut jumped = start();
                let mut expected = vec![0u64; jumped.logical_state().len()];
                for &k in &exponents {
                    let mut rng = jumped.clone();
                    advance(&mut rng, k);
                    for (e, w) in expected.iter_mut().zip(rng.logical_state()) {
                        *e ^= w;
                    }
                }
                jumped.apply_jump(&polynomial(&exponents));
                assert_eq!(jumped.logical_state(), expected);
            }

            #[test]
            fn jump_commutes_with_stepping() {
                let mut a = start();
                let mut b = a.clone();
                advance(&mut a, 77);
                a.jump();
                b.jump();
                advance(&mut b, 77);
                assert_same_stream(&mut a, &mut b);
            }

            #[test]
            fn long_jump_commutes_with_jump() {
                let mut a = start();
                let mut b = a.clone();
                a.jump();
                a.long_jump();
                b.long_jump();
                b.jump();
                assert_same_stream(&mut a, &mut b);
            }

            #[test]
            fn jump_moves_to_a_new_nonzero_state() {
                let mut rng = start();
                let before = rng.logical_state();
                rng.jump();
                let after = rng.logical_state();
                assert_ne!(before, after);
                assert!(after.iter().any(|&w| w != 0));
            }

            #[test]
            fn jump_tables_are_powers_of_x_modulo_the_characteristic_polynomial() {
                let degree = <$ty>::JUMP.len() * 64;
                let mut rng = start();
                let low_bits: Vec<bool> = (0..2 * degree + 16)
                    .map(|_| {
                        let low = (rng.logical_state()[0] & 1) == 1;
                        rng.next_u64();
                        low
                    })
                    .collect();
                let (connection, len) = berlekamp_massey(&low_bits);
                assert_eq!(len, degree, "linear complexity of the low state bit");

                let modulus = ModPoly::from_connection(&connection, degree);
                let jump = modulus.x_pow_2k(degree / 2);
                assert_eq!(jump, <$ty>::JUMP, "JUMP is not x^(2^{}) mod P", degree / 2);
                let long_jump = modulus.square_times(jump, degree / 4);
                assert_eq!(
                    long_jump,
                    <$ty>::LONG_JUMP,
                    "LONG_JUMP is not x^(2^{}) mod P",
                    3 * degree / 4
                );
            }
        }
    };
}
