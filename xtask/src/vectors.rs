//! Prints reference output vectors for one generator, for pinning in tests or comparing
//! against another implementation.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::info;
use xorshift::rand_core::RngCore;
use xorshift::{
    JumpablePrng, Prng, SplitMix64, XoroShiro128Plus, XoroShiro128StarStar, XoroShiro256Plus,
    XoroShiro256PlusPlus, XoroShiro256StarStar, XoroShiro512StarStar, XorShift1024Star,
    XorShift1024StarPhi, XorShift128Plus, XorShift4096Star, XorShift64Star,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GeneratorKind {
    SplitMix64,
    XorShift64Star,
    XorShift128Plus,
    XorShift1024Star,
    XorShift1024StarPhi,
    XorShift4096Star,
    XoroShiro128Plus,
    XoroShiro128StarStar,
    XoroShiro256Plus,
    XoroShiro256PlusPlus,
    XoroShiro256StarStar,
    XoroShiro512StarStar,
}

impl GeneratorKind {
    fn is_jumpable(self) -> bool {
        !matches!(self, GeneratorKind::SplitMix64 | GeneratorKind::XorShift64Star)
    }
}

#[derive(Debug)]
pub(crate) struct UnknownGenerator(String);

impl fmt::Display for UnknownGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown generator `{}`", self.0)
    }
}

impl Error for UnknownGenerator {}

impl FromStr for GeneratorKind {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(match name.as_str() {
            "splitmix64" => GeneratorKind::SplitMix64,
            "xorshift64star" => GeneratorKind::XorShift64Star,
            "xorshift128plus" => GeneratorKind::XorShift128Plus,
            "xorshift1024star" => GeneratorKind::XorShift1024Star,
            "xorshift1024starphi" => GeneratorKind::XorShift1024StarPhi,
            "xorshift4096star" => GeneratorKind::XorShift4096Star,
            "xoroshiro128plus" => GeneratorKind::XoroShiro128Plus,
            "xoroshiro128starstar" => GeneratorKind::XoroShiro128StarStar,
            "xoroshiro256plus" => GeneratorKind::XoroShiro256Plus,
            "xoroshiro256plusplus" => GeneratorKind::XoroShiro256PlusPlus,
            "xoroshiro256starstar" => GeneratorKind::XoroShiro256StarStar,
            "xoroshiro512starstar" => GeneratorKind::XoroShiro512StarStar,
            _ => return Err(UnknownGenerator(s.to_owned())),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct VectorOptions {
    pub(crate) seed: u64,
    pub(crate) count: usize,
    pub(crate) jump: bool,
    pub(crate) long_jump: bool,
}

pub(crate) fn print_vectors(
    kind: GeneratorKind,
    options: &VectorOptions,
) -> Result<(), Box<dyn Error>> {
    if (options.jump || options.long_jump) && !kind.is_jumpable() {
        return Err(format!("{kind:?} has no jump function").into());
    }
    info!(?kind, seed = options.seed, count = options.count, "printing vectors");

    let mut out = io::stdout().lock();
    match kind {
        GeneratorKind::SplitMix64 => write_outputs::<SplitMix64>(&mut out, options)?,
        GeneratorKind::XorShift64Star => write_outputs::<XorShift64Star>(&mut out, options)?,
        GeneratorKind::XorShift128Plus => write_jumped::<XorShift128Plus>(&mut out, options)?,
        GeneratorKind::XorShift1024Star => write_jumped::<XorShift1024Star>(&mut out, options)?,
        GeneratorKind::XorShift1024StarPhi => {
            write_jumped::<XorShift1024StarPhi>(&mut out, options)?
        }
        GeneratorKind::XorShift4096Star => write_jumped::<XorShift4096Star>(&mut out, options)?,
        GeneratorKind::XoroShiro128Plus => write_jumped::<XoroShiro128Plus>(&mut out, options)?,
        GeneratorKind::XoroShiro128StarStar => {
            write_jumped::<XoroShiro128StarStar>(&mut out, options)?
        }
        GeneratorKind::XoroShiro256Plus => write_jumped::<XoroShiro256Plus>(&mut out, options)?,
        GeneratorKind::XoroShiro256PlusPlus => {
            write_jumped::<XoroShiro256PlusPlus>(&mut out, options)?
        }
        GeneratorKind::XoroShiro256StarStar => {
            write_jumped::<XoroShiro256StarStar>(&mut out, options)?
        }
        GeneratorKind::XoroShiro512StarStar => {
            write_jumped::<XoroShiro512StarStar>(&mut out, options)?
        }
    }
    Ok(())
}

fn write_outputs<R: Prng>(out: &mut impl Write, options: &VectorOptions) -> io::Result<()> {
    let rng = R::seed_from_u64(options.seed);
    write_stream(out, rng, options.count)
}

fn write_jumped<R: JumpablePrng>(out: &mut impl Write, options: &VectorOptions) -> io::Result<()> {
    let mut rng = R::seed_from_u64(options.seed);
    if options.jump {
        rng.jump();
    }
    if options.long_jump {
        rng.long_jump();
    }
    write_stream(out, rng, options.count)
}

fn write_stream<R: RngCore>(out: &mut impl Write, mut rng: R, count: usize) -> io::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", rng.next_u64())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_loosely() {
        assert_eq!(
            "xorshift1024starphi".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::XorShift1024StarPhi
        );
        assert_eq!(
            "XoroShiro256PlusPlus".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::XoroShiro256PlusPlus
        );
        assert_eq!(
            "split-mix_64".parse::<GeneratorKind>().unwrap(),
            GeneratorKind::SplitMix64
        );
        assert!("mt19937".parse::<GeneratorKind>().is_err());
    }

    #[test]
    fn writes_one_decimal_per_line() {
        let options = VectorOptions {
            seed: 43433241441424,
            count: 2,
            jump: false,
            long_jump: false,
        };
        let mut buf = Vec::new();
        write_outputs::<SplitMix64>(&mut buf, &options).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "17194183795887958845\n18378278498163075296\n"
        );
    }

    #[test]
    fn only_jumpable_generators_take_jump_flags() {
        assert!(!GeneratorKind::XorShift64Star.is_jumpable());
        assert!(GeneratorKind::XorShift4096Star.is_jumpable());
        let options = VectorOptions {
            seed: 1,
            count: 1,
            jump: true,
            long_jump: false,
        };
        assert!(print_vectors(GeneratorKind::SplitMix64, &options).is_err());
    }
}
