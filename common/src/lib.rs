//! A library with common utilities for rendering big random numbers as C string literals.

#![warn(clippy::all, clippy::pedantic)]

pub mod base_convert;
pub mod chunk_format;
pub mod magnitude;

use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbols for digit values 0 through 35, indexed by value.
pub const DIGIT_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The smallest base we can render in.
pub const MIN_BASE: u32 = 2;

/// The largest base we can render in, limited by the size of the alphabet.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_BASE: u32 = DIGIT_ALPHABET.len() as u32;

/// The base used when none is given on the command line.
pub const DEFAULT_BASE: u32 = 10;

/// Bit width of the generated magnitude.
pub const MAGNITUDE_BITS: u64 = 2048;

/// Number of digits per line in the generated literal.
pub const LITERAL_CHUNK_SIZE: usize = 80;

/// Everything a caller can get wrong when handing us arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("base must be between 2 and 36, got {0}")]
    BaseOutOfRange(i64),
    #[error("base must be an integer, got {0:?}")]
    MalformedBase(String),
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("digit string is empty")]
    EmptyDigits,
    #[error("{digit:?} is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
}
