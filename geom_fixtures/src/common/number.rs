// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numbers as they appear in fixture directives.
//!
//! The downstream renderer scans numbers as a run of digits, `.` and `-`, so a
//! [`Number`] is always printed in positional notation. Decimals are printed in the
//! shortest form that round-trips, and always carry a fractional digit (`1.0`, not
//! `1`). Integers (point indices, the alpha channel) are printed as-is.

use std::fmt::{Display, Formatter, Result, Write as _};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Decimal(f64),
}

impl Number {
    /// Round `value` to `places` decimal places and wrap it as a [`Number::Decimal`].
    #[must_use]
    pub fn rounded(value: f64, places: u8) -> Self {
        Self::Decimal(round_to_places(value, places))
    }
}

/// Round half to even at the given number of decimal places.
///
/// The result is `k / 10^places` for an integral `k`, which is the closest `f64` to
/// that decimal, so its shortest representation has at most `places` fractional
/// digits.
#[must_use]
pub fn round_to_places(value: f64, places: u8) -> f64 {
    let scale = 10_f64.powi(i32::from(places));
    (value * scale).round_ties_even() / scale
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Number::Int(it) => write!(f, "{it}"),
            Number::Decimal(it) => {
                // `f64` Display never switches to exponent notation.
                let mut acc = String::with_capacity(12);
                _ = write!(acc, "{it}");
                if !acc.contains('.') {
                    acc.push_str(".0");
                }
                f.write_str(&acc)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0.1, 3, "0.1")]
    #[test_case(1.0, 2, "1.0")]
    #[test_case(0.0, 2, "0.0")]
    #[test_case(0.123_456, 5, "0.12346")]
    #[test_case(0.000_01, 5, "0.00001")]
    #[test_case(0.000_004, 5, "0.0")]
    #[test_case(0.009_999_9, 5, "0.01")]
    #[test_case(1.0 - 0.7, 3, "0.3"; "one minus point seven")]
    #[test_case(1.0 - 0.1, 3, "0.9"; "one minus point one")]
    #[test_case(0.125, 2, "0.12")]
    fn test_rounded_display(value: f64, places: u8, expected: &str) {
        assert_eq!(Number::rounded(value, places).to_string(), expected);
    }

    #[test]
    fn test_int_display() {
        assert_eq!(Number::Int(1).to_string(), "1");
        assert_eq!(Number::Int(80).to_string(), "80");
    }

    #[test]
    fn test_literal_decimal_display() {
        assert_eq!(Number::Decimal(0.015).to_string(), "0.015");
        assert_eq!(Number::Decimal(0.002).to_string(), "0.002");
    }

    #[test]
    fn test_round_to_places_bounds_fraction_digits() {
        let mut value = 0.0;
        while value <= 1.0 {
            let it = Number::rounded(value, 5).to_string();
            let fraction = it.split('.').nth(1).unwrap();
            assert!(fraction.len() <= 5, "{it}");
            value += 0.000_137;
        }
    }
}
