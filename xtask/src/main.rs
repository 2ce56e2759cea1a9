mod vectors;

use pico_args::Arguments;
use std::error::Error;

use crate::vectors::{print_vectors, GeneratorKind, VectorOptions};

const USAGE: &str = "\
Usage: cargo xtask vectors <generator> [--seed N] [--count N] [--jump] [--long-jump]

Generators: splitmix64, xorshift64star, xorshift128plus, xorshift1024star,
xorshift1024starphi, xorshift4096star, xoroshiro128plus, xoroshiro128starstar,
xoroshiro256plus, xoroshiro256plusplus, xoroshiro256starstar, xoroshiro512starstar";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::from_env("XORSHIFT_LOG");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = Arguments::from_env();
    let sub = args.subcommand()?.unwrap_or_default();

    match sub.as_str() {
        "vectors" => {
            let options = VectorOptions {
                seed: args.opt_value_from_str("--seed")?.unwrap_or(0),
                count: args.opt_value_from_str("--count")?.unwrap_or(8),
                jump: args.contains("--jump"),
                long_jump: args.contains("--long-jump"),
            };
            let kind: GeneratorKind = args.free_from_str()?;
            let rest = args.finish();
            if !rest.is_empty() {
                return Err(format!("unexpected arguments: {rest:?}\n\n{USAGE}").into());
            }
            print_vectors(kind, &options)?;
            Ok(())
        }
        _ => Err(format!("unknown command `{sub}`, available: `vectors`\n\n{USAGE}").into()),
    }
}
