/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The generic measurement facade: a value tagged with a unit symbol,
//! parameterised over its [`Kind`] so that mixing measurements of
//! different kinds is a compile-time type error rather than a runtime
//! check.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char as nchar, multispace0};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::number::complete::recognize_float;
use nom::sequence::tuple;
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::error::MeasureError;
use crate::kind::Kind;

/// A value of kind `K`, tagged with one of `K`'s unit symbols.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Measurement<K> {
    value: f64,
    unit: String,
    #[serde(skip)]
    _kind: PhantomData<K>,
}

impl<K> fmt::Debug for Measurement<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measurement")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .finish()
    }
}

/// Numeric rendering style for [`Measurement::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpecifier {
    /// `f`/`F`: fixed-point.
    Fixed,
    /// `e`/`E`: scientific.
    Exp,
    /// `g`/`G`: shortest round-tripping form.
    General,
}

impl<K> Clone for Measurement<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            unit: self.unit.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Measurement<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

impl<K: Kind> Measurement<K> {
    pub fn new(value: f64, unit: impl Into<String>) -> Result<Self, MeasureError> {
        if !value.is_finite() {
            return Err(MeasureError::Value(format!("measurement value must be finite, got {value}")));
        }
        let unit = unit.into();
        K::converter().get_unit(&unit)?;
        Ok(Self {
            value,
            unit,
            _kind: PhantomData,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Parses `"<signed decimal><ws?><unit symbol>"`.
    pub fn parse(input: &str) -> Result<Self, MeasureError> {
        let symbols = K::converter().get_unit_symbols();
        let mut symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
        symbols.sort_by_key(|s| std::cmp::Reverse(s.len()));

        // nom::branch::alt takes a fixed-size tuple of parsers, so a
        // dynamically-sized symbol list is matched by folding `tag` over
        // the longest-first candidates by hand.
        fn unit_parser<'a>(symbols: &[&str], i: &'a str) -> IResult<&'a str, &'a str> {
            for symbol in symbols {
                if let Ok(r) = tag::<_, _, nom::error::Error<&str>>(*symbol)(i) {
                    return Ok(r);
                }
            }
            Err(nom::Err::Error(nom::error::Error::new(i, nom::error::ErrorKind::Tag)))
        }

        let parsed: IResult<&str, (&str, &str, &str)> = all_consuming(tuple((
            recognize_float,
            multispace0,
            |i| unit_parser(&symbols, i),
        )))(input.trim());

        let (_, (num, _, unit)) = parsed.map_err(|_| MeasureError::Value(format!("cannot parse measurement: {input}")))?;
        let value: f64 = num
            .parse()
            .map_err(|_| MeasureError::Value(format!("invalid number in measurement: {input}")))?;
        Self::new(value, unit)
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    pub fn to(&self, unit: &str) -> Result<Self, MeasureError> {
        let converted = K::converter().convert(self.value, &self.unit, unit)?;
        Self::new(converted, unit)
    }

    pub fn add(&self, other: &Self) -> Result<Self, MeasureError> {
        let other_in_self_unit = K::converter().convert(other.value, &other.unit, &self.unit)?;
        Self::new(self.value + other_in_self_unit, self.unit.clone())
    }

    pub fn sub(&self, other: &Self) -> Result<Self, MeasureError> {
        let other_in_self_unit = K::converter().convert(other.value, &other.unit, &self.unit)?;
        Self::new(self.value - other_in_self_unit, self.unit.clone())
    }

    pub fn neg(&self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit.clone(),
            _kind: PhantomData,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit.clone(),
            _kind: PhantomData,
        }
    }

    pub fn mul(&self, scalar: f64) -> Result<Self, MeasureError> {
        Self::new(self.value * scalar, self.unit.clone())
    }

    pub fn div(&self, scalar: f64) -> Result<Self, MeasureError> {
        if scalar == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        Self::new(self.value / scalar, self.unit.clone())
    }

    pub fn compare(&self, other: &Self) -> Result<Ordering, MeasureError> {
        let other_in_self_unit = K::converter().convert(other.value, &other.unit, &self.unit)?;
        self.value
            .partial_cmp(&other_in_self_unit)
            .ok_or_else(|| MeasureError::Value("cannot compare non-finite measurement".to_string()))
    }

    /// Returns `false` (never errors) on any conversion failure, since
    /// this is a boolean predicate.
    pub fn approx_equal(&self, other: &Self, rel_tol: f64, abs_tol: f64) -> bool {
        match K::converter().convert(other.value, &other.unit, &self.unit) {
            Ok(other_value) => {
                let diff = (self.value - other_value).abs();
                diff <= abs_tol.max(rel_tol * self.value.abs().max(other_value.abs()))
            }
            Err(_) => false,
        }
    }

    pub fn format(&self, spec: FormatSpecifier, precision: Option<usize>, trim_zeros: bool, include_space: bool) -> String {
        let mut number = match (spec, precision) {
            (FormatSpecifier::Fixed, Some(p)) => format!("{:.*}", p, self.value),
            (FormatSpecifier::Fixed, None) => format!("{}", self.value),
            (FormatSpecifier::Exp, Some(p)) => format!("{:.*e}", p, self.value),
            (FormatSpecifier::Exp, None) => format!("{:e}", self.value),
            (FormatSpecifier::General, Some(p)) => format!("{:.*}", p, self.value),
            (FormatSpecifier::General, None) => format!("{}", self.value),
        };
        if trim_zeros && number.contains('.') && !number.contains('e') {
            while number.ends_with('0') {
                number.pop();
            }
            if number.ends_with('.') {
                number.pop();
            }
        }
        let separator = if include_space { " " } else { "" };
        format!("{number}{separator}{}", K::format_unit(&self.unit))
    }
}

impl<K: Kind> fmt::Display for Measurement<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{value}{}", K::format_unit(&self.unit))
    }
}

impl<K: Kind> Add for Measurement<K> {
    type Output = Result<Measurement<K>, MeasureError>;
    fn add(self, rhs: Self) -> Self::Output {
        Measurement::add(&self, &rhs)
    }
}

impl<K: Kind> Sub for Measurement<K> {
    type Output = Result<Measurement<K>, MeasureError>;
    fn sub(self, rhs: Self) -> Self::Output {
        Measurement::sub(&self, &rhs)
    }
}

impl<K: Kind> Neg for Measurement<K> {
    type Output = Measurement<K>;
    fn neg(self) -> Self::Output {
        Measurement::neg(&self)
    }
}

impl<K: Kind> Mul<f64> for Measurement<K> {
    type Output = Result<Measurement<K>, MeasureError>;
    fn mul(self, rhs: f64) -> Self::Output {
        Measurement::mul(&self, rhs)
    }
}

impl<K: Kind> Div<f64> for Measurement<K> {
    type Output = Result<Measurement<K>, MeasureError>;
    fn div(self, rhs: f64) -> Self::Output {
        Measurement::div(&self, rhs)
    }
}

/// Parses a decimal literal possibly prefixed with `+`/`-`, used by
/// kinds that recognise their own surface syntax (DMS, ISO durations)
/// before delegating to [`Measurement::parse`].
pub fn signed_decimal(input: &str) -> IResult<&str, f64> {
    map(
        recognize(tuple((opt(alt((nchar('+'), nchar('-')))), recognize_float))),
        |s: &str| s.parse().unwrap_or(0.0),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::length::Length;

    #[test]
    fn parse_and_format_round_trip() {
        let m = Measurement::<Length>::parse("1.5 km").unwrap();
        assert_eq!(m.value(), 1.5);
        assert_eq!(m.unit(), "km");
    }

    #[test]
    fn rejects_unknown_unit_text() {
        assert!(Measurement::<Length>::parse("1 bananas").is_err());
        assert!(Measurement::<Length>::parse("").is_err());
    }

    #[test]
    fn add_converts_operand() {
        let a = Measurement::<Length>::new(1.0, "m").unwrap();
        let b = Measurement::<Length>::new(100.0, "cm").unwrap();
        let sum = Measurement::add(&a, &b).unwrap();
        assert!((sum.value() - 2.0).abs() < 1e-9);
        assert_eq!(sum.unit(), "m");
    }

    #[test]
    fn div_by_zero_errors() {
        let a = Measurement::<Length>::new(1.0, "m").unwrap();
        assert!(matches!(a.div(0.0), Err(MeasureError::DivisionByZero)));
    }
}
