/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Unit symbols: a `(prefix, base, exponent)` triple plus the prefix's
//! numeric multiplier, decomposed from and recomposed into the plain
//! string form callers pass around.

use std::fmt;

use nom::character::complete::{char as nchar, satisfy};
use nom::combinator::{all_consuming, opt, recognize};
use nom::multi::many1;
use nom::sequence::pair;
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::error::MeasureError;
use crate::prefix;

/// A materialised unit: the letters of a symbol, its optional exponent,
/// and the prefix (if any) under which it was registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub prefix: String,
    pub base: String,
    pub exponent: i32,
    pub prefix_multiplier: f64,
}

impl Unit {
    pub fn derived(base: impl Into<String>, exponent: i32) -> Self {
        Self {
            prefix: String::new(),
            base: base.into(),
            exponent,
            prefix_multiplier: 1.0,
        }
    }

    pub fn prefixed(prefix: impl Into<String>, base: impl Into<String>, exponent: i32, prefix_multiplier: f64) -> Self {
        Self {
            prefix: prefix.into(),
            base: base.into(),
            exponent,
            prefix_multiplier,
        }
    }

    /// `base` plus exponent suffix, with no prefix: the form the search
    /// graph is keyed on.
    pub fn derived_symbol(&self) -> String {
        compose("", &self.base, self.exponent)
    }

    /// The full key this unit is stored under (prefix + derived form).
    pub fn symbol(&self) -> String {
        compose(&self.prefix, &self.base, self.exponent)
    }

    /// `prefixMultiplier ^ exponent`.
    pub fn multiplier(&self) -> f64 {
        self.prefix_multiplier.powi(self.exponent)
    }

    /// Human-facing rendering: `u` becomes `μ`, exponents become
    /// Unicode superscripts.
    pub fn display_symbol(&self) -> String {
        let prefix = prefix::display_prefix(&self.prefix);
        let mut out = format!("{prefix}{}", self.base);
        if self.exponent != 1 {
            out.push_str(&superscript(self.exponent));
        }
        out
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

fn compose(prefix: &str, base: &str, exponent: i32) -> String {
    if exponent == 1 {
        format!("{prefix}{base}")
    } else {
        format!("{prefix}{base}{exponent}")
    }
}

fn superscript(exponent: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut s = String::new();
    if exponent < 0 {
        s.push('⁻');
    }
    for ch in exponent.unsigned_abs().to_string().chars() {
        let digit = ch.to_digit(10).unwrap() as usize;
        s.push(DIGITS[digit]);
    }
    s
}

/// A decomposed, not-yet-materialised derived symbol: `base` plus an
/// optional exponent, parsed out of a plain string per the grammar
/// `^\p{L}+(-?\d)?$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSymbol {
    pub base: String,
    pub exponent: i32,
}

/// Parses a derived (unprefixed) unit symbol string, validating the
/// exponent falls in `{-9..-2, 2..9}` when present.
pub fn parse_derived_symbol(input: &str) -> Result<DerivedSymbol, MeasureError> {
    let (_, (base, exponent)) = all_consuming(pair(letters, opt(signed_digit)))(input)
        .map_err(|_| MeasureError::Value(format!("invalid unit symbol: {input}")))?;
    let exponent = match exponent {
        None => 1,
        Some(e) if e == 0 || e == 1 || !(-9..=9).contains(&e) => {
            return Err(MeasureError::Value(format!(
                "invalid exponent in unit symbol: {input}"
            )))
        }
        Some(e) => e,
    };
    Ok(DerivedSymbol {
        base: base.to_string(),
        exponent,
    })
}

fn letters(input: &str) -> IResult<&str, &str> {
    recognize(many1(satisfy(|c: char| c.is_alphabetic())))(input)
}

fn signed_digit(input: &str) -> IResult<&str, i32> {
    let (rest, (sign, digit)) = pair(
        opt(nchar('-')),
        satisfy(|c: char| c.is_ascii_digit()),
    )(input)?;
    let magnitude = digit.to_digit(10).unwrap() as i32;
    Ok((rest, if sign.is_some() { -magnitude } else { magnitude }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_base() {
        let s = parse_derived_symbol("m").unwrap();
        assert_eq!(s.base, "m");
        assert_eq!(s.exponent, 1);
    }

    #[test]
    fn parses_exponent() {
        let s = parse_derived_symbol("m2").unwrap();
        assert_eq!(s.exponent, 2);
        let s = parse_derived_symbol("s-1").unwrap();
        assert_eq!(s.exponent, -1);
    }

    #[test]
    fn rejects_exponent_one_and_zero() {
        assert!(parse_derived_symbol("m1").is_err());
        assert!(parse_derived_symbol("m0").is_err());
    }

    #[test]
    fn rejects_empty_and_non_letter_start() {
        assert!(parse_derived_symbol("").is_err());
        assert!(parse_derived_symbol("2m").is_err());
    }

    #[test]
    fn multiplier_raises_to_exponent() {
        let u = Unit::prefixed("k", "m", 2, 1e3);
        assert_eq!(u.multiplier(), 1e6);
    }

    #[test]
    fn display_uses_micro_glyph_and_superscript() {
        let u = Unit::prefixed("u", "m", 2, 1e-6);
        assert_eq!(u.display_symbol(), "μm²");
    }
}
