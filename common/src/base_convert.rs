//! A module for converting arbitrarily large numbers to and from digit strings.
//!
//! Digits are drawn from [`DIGIT_ALPHABET`] so any base from 2 through 36 works.
//! All arithmetic is done on malachite naturals with exact integer division, so
//! the digits stay correct no matter how large the number gets.

use crate::{DIGIT_ALPHABET, InvalidArgument, MAX_BASE, MIN_BASE};
use log::trace;
use malachite::base::num::arithmetic::traits::DivAssignRem;
use malachite::base::num::basic::traits::Zero;
use malachite::natural::Natural;

/// Check that a base can be rendered with our alphabet.
///
/// # Errors
/// Returns [`InvalidArgument::BaseOutOfRange`] if the base is outside 2..=36.
pub fn validate_base(base: u32) -> Result<u32, InvalidArgument> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(InvalidArgument::BaseOutOfRange(i64::from(base)))
    }
}

/// Parse a base from a command line argument.
/// Negative numbers are reported as out of range, not as malformed.
///
/// # Errors
/// Returns [`InvalidArgument::MalformedBase`] if the argument is not an integer,
/// or [`InvalidArgument::BaseOutOfRange`] if it is outside 2..=36.
pub fn parse_base(arg: &str) -> Result<u32, InvalidArgument> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| InvalidArgument::MalformedBase(arg.to_string()))?;
    let base = u32::try_from(value).map_err(|_| InvalidArgument::BaseOutOfRange(value))?;
    validate_base(base)
}

/// Convert a number into its digit string in some base, most significant digit first.
/// Zero is rendered as a single `0`.
///
/// # Errors
/// Returns [`InvalidArgument::BaseOutOfRange`] if the base is outside 2..=36.
///
/// # Panics
/// Panics if a remainder does not fit in usize, which cannot happen for bases <= 36.
pub fn to_base(num: &Natural, base: u32) -> Result<String, InvalidArgument> {
    let base = validate_base(base)?;
    if *num == Natural::ZERO {
        return Ok("0".to_string());
    }

    let base_natural = Natural::from(base);
    let mut n = num.clone();
    let mut digits: Vec<u8> = Vec::new();

    // Peel off the least significant digit until nothing is left
    while n > 0u32 {
        let remainder = usize::try_from(&(n.div_assign_rem(&base_natural)))
            .expect("Failed to convert remainder to usize");
        digits.push(DIGIT_ALPHABET[remainder]);
    }

    trace!("Converted to {} digits in base {base}", digits.len());

    // Digits came out backwards
    Ok(digits.iter().rev().map(|&d| char::from(d)).collect())
}

/// Parse a digit string in some base back into a number.
/// Letters are accepted in either case.
///
/// # Errors
/// Returns [`InvalidArgument::BaseOutOfRange`] for a bad base,
/// [`InvalidArgument::EmptyDigits`] for an empty string, and
/// [`InvalidArgument::InvalidDigit`] for any symbol that is not a digit in that base.
pub fn from_base(digits: &str, base: u32) -> Result<Natural, InvalidArgument> {
    let base = validate_base(base)?;
    if digits.is_empty() {
        return Err(InvalidArgument::EmptyDigits);
    }

    let base_natural = Natural::from(base);
    let mut num = Natural::ZERO;
    for digit in digits.chars() {
        // to_digit(36) maps 0-9 and a-z/A-Z onto the same values as the alphabet
        let value = digit
            .to_digit(MAX_BASE)
            .filter(|v| *v < base)
            .ok_or(InvalidArgument::InvalidDigit { digit, base })?;
        num *= &base_natural;
        num += Natural::from(value);
    }
    Ok(num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::random_magnitude;
    use malachite::base::num::arithmetic::traits::Pow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    #[test]
    fn test_to_base_known_values() {
        assert_eq!(to_base(&Natural::from(255u32), 16), Ok("ff".to_string()));
        assert_eq!(to_base(&Natural::from(10u32), 2), Ok("1010".to_string()));
        assert_eq!(to_base(&Natural::from(35u32), 36), Ok("z".to_string()));
        assert_eq!(to_base(&Natural::from(36u32), 36), Ok("10".to_string()));
        assert_eq!(
            to_base(&Natural::from(1_000_000u32), 10),
            Ok("1000000".to_string())
        );
        assert_eq!(to_base(&Natural::from(511u32), 8), Ok("777".to_string()));
    }

    #[test]
    fn test_to_base_zero() {
        for base in MIN_BASE..=MAX_BASE {
            assert_eq!(to_base(&Natural::ZERO, base), Ok("0".to_string()));
        }
    }

    #[test]
    fn test_to_base_beyond_u128() {
        // 2^2048 - 1 is all ones in binary and all f's in hex
        let num = Natural::from(2u32).pow(2048) - Natural::from(1u32);
        assert_eq!(to_base(&num, 2), Ok("1".repeat(2048)));
        assert_eq!(to_base(&num, 16), Ok("f".repeat(512)));

        // 10^100 in base ten
        let googol = Natural::from(10u32).pow(100);
        assert_eq!(to_base(&googol, 10), Ok(format!("1{}", "0".repeat(100))));

        // matches malachite's own decimal rendering
        let big =
            Natural::from_str("629054252428281994977829225250454807300460884868936239424485875727138")
                .unwrap();
        assert_eq!(to_base(&big, 10), Ok(big.to_string()));
    }

    #[test]
    fn test_to_base_rejects_bad_base() {
        let num = Natural::from(100u32);
        assert_eq!(to_base(&num, 0), Err(InvalidArgument::BaseOutOfRange(0)));
        assert_eq!(to_base(&num, 1), Err(InvalidArgument::BaseOutOfRange(1)));
        assert_eq!(to_base(&num, 37), Err(InvalidArgument::BaseOutOfRange(37)));
    }

    #[test_log::test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for base in MIN_BASE..=MAX_BASE {
            for bits in [1, 63, 64, 65, 500, 2048] {
                let num = random_magnitude(bits, &mut rng);
                let digits = to_base(&num, base).unwrap();
                assert_eq!(from_base(&digits, base), Ok(num.clone()));

                // no spurious leading zero
                if num > 0u32 {
                    assert!(!digits.starts_with('0'), "{digits} in base {base}");
                }

                // every symbol is a digit of this base
                assert!(
                    digits
                        .bytes()
                        .all(|d| DIGIT_ALPHABET[..base as usize].contains(&d))
                );
            }
        }
    }

    #[test]
    fn test_from_base_known_values() {
        assert_eq!(from_base("ff", 16), Ok(Natural::from(255u32)));
        assert_eq!(from_base("FF", 16), Ok(Natural::from(255u32)));
        assert_eq!(from_base("1010", 2), Ok(Natural::from(10u32)));
        assert_eq!(from_base("0", 7), Ok(Natural::ZERO));
        assert_eq!(from_base("000", 7), Ok(Natural::ZERO));
        assert_eq!(from_base("zz", 36), Ok(Natural::from(1295u32)));
    }

    #[test]
    fn test_from_base_rejects_bad_input() {
        assert_eq!(from_base("", 10), Err(InvalidArgument::EmptyDigits));
        assert_eq!(
            from_base("12", 2),
            Err(InvalidArgument::InvalidDigit {
                digit: '2',
                base: 2
            })
        );
        assert_eq!(
            from_base("fg", 16),
            Err(InvalidArgument::InvalidDigit {
                digit: 'g',
                base: 16
            })
        );
        assert_eq!(
            from_base("1-2", 10),
            Err(InvalidArgument::InvalidDigit {
                digit: '-',
                base: 10
            })
        );
        assert_eq!(from_base("1", 37), Err(InvalidArgument::BaseOutOfRange(37)));
    }

    #[test]
    fn test_parse_base() {
        assert_eq!(parse_base("10"), Ok(10));
        assert_eq!(parse_base("2"), Ok(2));
        assert_eq!(parse_base("36"), Ok(36));
        assert_eq!(parse_base(" 16 "), Ok(16));
        assert_eq!(parse_base("1"), Err(InvalidArgument::BaseOutOfRange(1)));
        assert_eq!(parse_base("37"), Err(InvalidArgument::BaseOutOfRange(37)));
        assert_eq!(parse_base("-3"), Err(InvalidArgument::BaseOutOfRange(-3)));
        assert_eq!(
            parse_base("99999999999"),
            Err(InvalidArgument::BaseOutOfRange(99_999_999_999))
        );
        assert_eq!(
            parse_base("hex"),
            Err(InvalidArgument::MalformedBase("hex".to_string()))
        );
        assert_eq!(
            parse_base("2.5"),
            Err(InvalidArgument::MalformedBase("2.5".to_string()))
        );
        assert_eq!(
            parse_base(""),
            Err(InvalidArgument::MalformedBase(String::new()))
        );
    }
}
