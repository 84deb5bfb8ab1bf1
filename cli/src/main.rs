//! Print a big random number in any base as a C string literal.

#![warn(clippy::all, clippy::pedantic)]

extern crate randlit_common;
use randlit_common::base_convert::{parse_base, to_base};
use randlit_common::chunk_format::to_c_literal;
use randlit_common::magnitude::random_magnitude;
use randlit_common::{DEFAULT_BASE, LITERAL_CHUNK_SIZE, MAGNITUDE_BITS, VERSION};

use anyhow::Context;
use clap::Parser;
use log::debug;
use malachite::natural::Natural;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The base to print the number in, from 2 to 36
    #[arg(
        default_value_t = DEFAULT_BASE,
        value_parser = parse_base,
        allow_negative_numbers = true
    )]
    base: u32,
}

/// Convert a number to the requested base and wrap it up as a literal.
/// Nothing is printed here so a failure never leaves partial output behind.
fn render(num: &Natural, base: u32) -> anyhow::Result<String> {
    let digits = to_base(num, base).context("Failed to convert number")?;
    debug!("Rendered {} digits in base {base}", digits.len());
    to_c_literal(&digits, LITERAL_CHUNK_SIZE).context("Failed to format literal")
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up logger
    env_logger::init();
    debug!("randlit v{VERSION}, CLI Inputs: {cli:?}");

    let num = random_magnitude(MAGNITUDE_BITS, &mut rand::rng());
    let literal = render(&num, cli.base)?;
    println!("{literal}");

    Ok(())
}
