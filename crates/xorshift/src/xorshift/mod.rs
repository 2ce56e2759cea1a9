//! Marsaglia xorshift generators with multiplicative or additive output scramblers.
//!
//! - [`XorShift64Star`]: A single word of state. Fine for quick tests; too small for
//!   parallel streams and without a jump function.
//! - [`XorShift128Plus`]: Two words, very fast, fails linearity tests in the lowest bit.
//!   Superseded by [`XoroShiro128Plus`](crate::XoroShiro128Plus).
//! - [`XorShift1024Star`]: Sixteen words in a circular buffer. A long period for massively
//!   parallel simulations.
//! - [`XorShift1024StarPhi`]: As `XorShift1024Star`, with a golden-ratio multiplier that
//!   gives slightly better low bits.
//! - [`XorShift4096Star`]: Sixty-four words in a circular buffer.
//!
//! The circular-buffer generators carry a cursor alongside their words; [`XorShift1024Star::state`]
//! alone does not describe where the generator is, [`XorShift1024Star::cursor`] is needed too.

mod xorshift1024star;
mod xorshift1024starphi;
mod xorshift128plus;
mod xorshift4096star;
mod xorshift64star;

pub use xorshift1024star::XorShift1024Star;
pub use xorshift1024starphi::XorShift1024StarPhi;
pub use xorshift128plus::XorShift128Plus;
pub use xorshift4096star::XorShift4096Star;
pub use xorshift64star::XorShift64Star;
