//! Independent streams carved out of a single seeded sequence.
//!
//! Stream `i` is the generator seeded from `seed` and then jumped `i` times, so as long as no
//! stream draws more numbers than one jump covers (2^64 for the 128-bit generators, 2^128 for
//! the 256-bit ones, and so on), no two streams overlap.
//!
//! ```
//! use xorshift::rand_core::RngCore;
//! use xorshift::streams::jump_streams;
//! use xorshift::XoroShiro256PlusPlus;
//!
//! let mut streams = jump_streams::<XoroShiro256PlusPlus>(7, 4);
//! let firsts: Vec<u64> = streams.iter_mut().map(|rng| rng.next_u64()).collect();
//! assert_eq!(firsts.len(), 4);
//! ```

use tracing::debug;

use crate::JumpablePrng;

/// How far apart consecutive streams start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stride {
    /// One [`JumpablePrng::jump`] between streams.
    #[default]
    Jump,
    /// One [`JumpablePrng::long_jump`] between streams, for a coarser first level of a two-level
    /// partition.
    LongJump,
}

/// An endless iterator of generators, each one stride further along the sequence than the
/// previous one.
#[derive(Debug, Clone)]
pub struct JumpStreams<R> {
    next: R,
    stride: Stride,
}

impl<R: JumpablePrng> JumpStreams<R> {
    /// Streams starting from `R::seed_from_u64(seed)`, one jump apart.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(R::seed_from_u64(seed), Stride::Jump)
    }

    /// Streams starting from an already positioned generator.
    pub fn from_rng(rng: R, stride: Stride) -> Self {
        Self { next: rng, stride }
    }
}

impl<R: JumpablePrng> Iterator for JumpStreams<R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let current = self.next.clone();
        match self.stride {
            Stride::Jump => self.next.jump(),
            Stride::LongJump => self.next.long_jump(),
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Initializes `count` generators such that each one is offset in the main sequence by one jump
/// from the previous one. Every state is independent from the others as long as no state
/// requests more numbers than a jump skips.
pub fn jump_streams<R: JumpablePrng>(seed: u64, count: usize) -> Vec<R> {
    debug!(
        generator = core::any::type_name::<R>(),
        seed, count, "deriving jump streams"
    );
    JumpStreams::new(seed).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{XoroShiro128StarStar, XorShift1024Star};
    use rand_core::{RngCore, SeedableRng};

    #[test]
    fn stream_i_is_seed_jumped_i_times() {
        let streams = jump_streams::<XoroShiro128StarStar>(99, 5);
        assert_eq!(streams.len(), 5);

        let mut expected = XoroShiro128StarStar::seed_from_u64(99);
        for stream in &streams {
            assert_eq!(stream, &expected);
            expected.jump();
        }
    }

    #[test]
    fn zero_streams() {
        assert!(jump_streams::<XoroShiro128StarStar>(1, 0).is_empty());
    }

    #[test]
    fn long_jump_stride() {
        let mut streams =
            JumpStreams::from_rng(XorShift1024Star::seed_from_u64(3), Stride::LongJump);
        let first = streams.next().unwrap();
        let mut second = streams.next().unwrap();

        let mut expected = first.clone();
        expected.long_jump();
        assert_eq!(second, expected);
        assert_eq!(second.cursor(), first.cursor());
        assert_ne!(second.next_u64(), first.clone().next_u64());
    }
}
