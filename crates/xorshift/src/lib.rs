//! Fast, non-cryptographic pseudorandom generators from the xorshift and xoroshiro families,
//! plus the SplitMix64 generator used to expand a single `u64` seed into a full state.
//!
//! Every generator implements [`rand_core::RngCore`] and [`rand_core::SeedableRng`], along with
//! this crate's [`Prng`] trait. All except [`SplitMix64`] and [`XorShift64Star`] implement
//! [`JumpablePrng`], which advances a generator by a huge fixed number of steps in constant
//! time. That is how non-overlapping streams for parallel work are made, see [`streams`].
//!
//! The following generators are implemented:
//!
//! - [`SplitMix64`]: seed expander, 64-bit state.
//! - [`XorShift64Star`], [`XorShift128Plus`], [`XorShift1024Star`], [`XorShift1024StarPhi`],
//!   [`XorShift4096Star`]: see [`xorshift`].
//! - [`XoroShiro128Plus`], [`XoroShiro128StarStar`], [`XoroShiro256Plus`],
//!   [`XoroShiro256PlusPlus`], [`XoroShiro256StarStar`], [`XoroShiro512StarStar`]: see
//!   [`xoroshiro`].
//!
//! ```
//! use xorshift::rand_core::{RngCore, SeedableRng};
//! use xorshift::{Prng, XoroShiro256StarStar};
//!
//! let mut rng = XoroShiro256StarStar::seed_from_u64(42);
//! let a = rng.next_u64();
//! rng.seed(42);
//! assert_eq!(a, rng.next_u64());
//! ```
//!
//! A lot of the initial code is taken from the [rust-random project](https://github.com/rust-random).
//! None of the generators are suitable for cryptographic purposes.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod common;

pub mod error;
mod prng;
mod splitmix64;
pub mod streams;
pub mod xoroshiro;
pub mod xorshift;

pub use rand_core;

pub use common::{rotl, Seed1024, Seed4096, Seed512, WideSeed};
pub use error::{StateError, StateResult};
pub use prng::{JumpablePrng, Prng};
pub use splitmix64::SplitMix64;
pub use xoroshiro::{
    XoroShiro128Plus, XoroShiro128StarStar, XoroShiro256Plus, XoroShiro256PlusPlus,
    XoroShiro256StarStar, XoroShiro512StarStar,
};
pub use xorshift::{
    XorShift1024Star, XorShift1024StarPhi, XorShift128Plus, XorShift4096Star, XorShift64Star,
};
