/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! A floating-point value paired with a propagated absolute error.
//!
//! The conversion engine uses [`ErrTracked`] as the currency of its
//! best-first search: every multiplier and offset carries an error
//! estimate so that two algebraically-equivalent paths between the same
//! pair of units can be told apart by how much numerical noise they
//! accumulate.

use serde::{Deserialize, Serialize};

use crate::error::MeasureError;

/// A value with a tracked worst-case absolute error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrTracked {
    value: f64,
    abs_err: f64,
}

impl ErrTracked {
    /// Builds a value with an explicit absolute error.
    pub fn new(value: f64, abs_err: f64) -> Self {
        Self {
            value,
            abs_err: abs_err.abs(),
        }
    }

    /// Builds a value assumed exact unless it is not representable as an
    /// exact integer, in which case it picks up a half-ULP error.
    pub fn exact(value: f64) -> Self {
        let abs_err = if value.fract() == 0.0 { 0.0 } else { half_ulp(value) };
        Self { value, abs_err }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn abs_err(&self) -> f64 {
        self.abs_err
    }

    /// Relative error, with the conventions `0/0 = 0` and `x/0 = inf`.
    pub fn rel_err(&self) -> f64 {
        if self.abs_err == 0.0 {
            0.0
        } else if self.value == 0.0 {
            f64::INFINITY
        } else {
            (self.abs_err / self.value).abs()
        }
    }

    /// Number of significant digits implied by the relative error.
    pub fn significant_digits(&self) -> Option<u32> {
        if self.abs_err == 0.0 {
            return None;
        }
        let rel = self.rel_err();
        if !rel.is_finite() {
            return Some(0);
        }
        Some((-rel.log10()).floor().max(0.0) as u32)
    }

    pub fn neg(self) -> Self {
        Self {
            value: -self.value,
            abs_err: self.abs_err,
        }
    }

    pub fn add(self, other: Self) -> Self {
        inflate(self.value + other.value, self.abs_err + other.abs_err)
    }

    pub fn sub(self, other: Self) -> Self {
        self.add(other.neg())
    }

    pub fn mul(self, other: Self) -> Self {
        let value = self.value * other.value;
        let rel = self.rel_err() + other.rel_err();
        inflate(value, (value * rel).abs())
    }

    pub fn div(self, other: Self) -> Result<Self, MeasureError> {
        if other.value == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let value = self.value / other.value;
        let rel = self.rel_err() + other.rel_err();
        let abs_err = (value * rel).abs();
        let needs_ulp = abs_err > 0.0 || value.fract() != 0.0;
        Ok(if needs_ulp {
            Self {
                value,
                abs_err: abs_err + half_ulp(value),
            }
        } else {
            Self { value, abs_err }
        })
    }

    pub fn inv(self) -> Result<Self, MeasureError> {
        Self::exact(1.0).div(self)
    }
}

/// Adds a half-ULP of rounding noise whenever some error is already
/// present, modelling one floating-point rounding step.
fn inflate(value: f64, abs_err: f64) -> ErrTracked {
    let abs_err = if abs_err > 0.0 {
        abs_err + half_ulp(value)
    } else {
        abs_err
    };
    ErrTracked { value, abs_err }
}

fn half_ulp(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let bits = value.abs().to_bits();
    let next = f64::from_bits(bits.wrapping_add(1));
    (next - value.abs()).abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_integers_have_no_error() {
        assert_eq!(ErrTracked::exact(12.0).abs_err(), 0.0);
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = ErrTracked::exact(3.0);
        let b = ErrTracked::exact(4.5);
        let c = a.add(b).sub(b);
        assert!((c.value() - a.value()).abs() < 1e-9);
        assert!(c.abs_err() >= a.abs_err());
    }

    #[test]
    fn mul_then_div_round_trips() {
        let a = ErrTracked::exact(2.0);
        let b = ErrTracked::exact(7.0);
        let c = a.mul(b).div(b).unwrap();
        assert!((c.value() - a.value()).abs() < 1e-9);
    }

    #[test]
    fn double_inverse_round_trips() {
        let a = ErrTracked::exact(5.0);
        let c = a.inv().unwrap().inv().unwrap();
        assert!((c.value() - a.value()).abs() < 1e-9);
    }

    #[test]
    fn div_by_zero_errors() {
        let a = ErrTracked::exact(1.0);
        let z = ErrTracked::exact(0.0);
        assert!(matches!(a.div(z), Err(MeasureError::DivisionByZero)));
    }
}
