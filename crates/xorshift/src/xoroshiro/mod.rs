//! Xoroshiro (XOR/rotate/shift/rotate) pseudorandom generators. Fast, fairly random, and small-state.
//!
//! - [`XoroShiro256StarStar`]: Recommended for all purposes. Excellent speed and
//!   a state space (256 bits) large enough for any parallel application.
//! - [`XoroShiro256PlusPlus`]: Recommended for all purposes. Excellent speed and
//!   a state space (256 bits) large enough for any parallel application.
//! - [`XoroShiro256Plus`]: Recommended for generating 64-bit floating-point
//!   numbers. About 15% faster than `XoroShiro256StarStar`, but has a [low linear
//!   complexity] in the lowest bits (which are discarded when generating
//!   floats), making it fail linearity tests.
//! - [`XoroShiro128StarStar`]: An alternative to `XoroShiro256StarStar`, having
//!   the same speed but using half the state. Only suited for low-scale parallel
//!   applications.
//! - [`XoroShiro128Plus`]: The original xoroshiro generator and successor to
//!   xorshift128+. Has a [low linear complexity] in the lowest bits.
//! - [`XoroShiro512StarStar`]: An alternative to `XoroShiro256StarStar` with more
//!   state and the same speed.
//!
//! The `*PlusPlus` generators perform similarily to the `*StarStar` generators.
//! See the [xoshiro paper], where the differences are discussed in detail.
//!
//! [xoshiro paper]: http://vigna.di.unimi.it/ftp/papers/ScrambledLinear.pdf
//! [low linear complexity]: http://xoshiro.di.unimi.it/lowcomp.php

mod xoroshiro128plus;
mod xoroshiro128starstar;
mod xoroshiro256plus;
mod xoroshiro256plusplus;
mod xoroshiro256starstar;
mod xoroshiro512starstar;

pub use xoroshiro128plus::XoroShiro128Plus;
pub use xoroshiro128starstar::XoroShiro128StarStar;
pub use xoroshiro256plus::XoroShiro256Plus;
pub use xoroshiro256plusplus::XoroShiro256PlusPlus;
pub use xoroshiro256starstar::XoroShiro256StarStar;
pub use xoroshiro512starstar::XoroShiro512StarStar;
