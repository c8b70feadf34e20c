/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Affine conversions (`y = m*x + k`) and the algebra used to combine
//! them when searching for a path between two units that share no
//! direct declared edge.

use crate::err_tracked::ErrTracked;
use crate::error::MeasureError;

/// An affine map between two unit symbols, with error-tracked
/// coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub multiplier: ErrTracked,
    pub offset: ErrTracked,
}

impl Conversion {
    pub fn new(multiplier: f64, offset: f64) -> Result<Self, MeasureError> {
        if multiplier == 0.0 || !multiplier.is_finite() {
            return Err(MeasureError::Configuration(format!(
                "conversion multiplier must be finite and non-zero, got {multiplier}"
            )));
        }
        if !offset.is_finite() {
            return Err(MeasureError::Configuration(format!(
                "conversion offset must be finite, got {offset}"
            )));
        }
        Ok(Self {
            multiplier: ErrTracked::exact(multiplier),
            offset: ErrTracked::exact(offset),
        })
    }

    pub fn from_tracked(multiplier: ErrTracked, offset: ErrTracked) -> Self {
        Self { multiplier, offset }
    }

    pub fn identity() -> Self {
        Self {
            multiplier: ErrTracked::exact(1.0),
            offset: ErrTracked::exact(0.0),
        }
    }

    /// Total absolute error accumulated by this conversion; the search
    /// heuristic's sole quality metric.
    pub fn total_abs_err(&self) -> f64 {
        self.multiplier.abs_err() + self.offset.abs_err()
    }

    pub fn apply(&self, x: f64) -> ErrTracked {
        self.multiplier.mul(ErrTracked::exact(x)).add(self.offset)
    }

    /// `B->A` from `A->B`.
    pub fn invert(&self) -> Result<Self, MeasureError> {
        let m = self.multiplier.inv()?;
        let k = self.offset.neg().div(self.multiplier)?;
        Ok(Self::from_tracked(m, k))
    }

    /// `A->C` from `A->B` (self) and `B->C` (other).
    pub fn sequential(&self, other: &Self) -> Self {
        let m = self.multiplier.mul(other.multiplier);
        let k = self.offset.mul(other.multiplier).add(other.offset);
        Self::from_tracked(m, k)
    }

    /// `A->B` from `A->C` (self) and `B->C` (other).
    pub fn convergent(&self, other: &Self) -> Result<Self, MeasureError> {
        let m = self.multiplier.div(other.multiplier)?;
        let k = self.offset.sub(other.offset).div(other.multiplier)?;
        Ok(Self::from_tracked(m, k))
    }

    /// `A->B` from `C->A` (self) and `C->B` (other).
    pub fn divergent(&self, other: &Self) -> Result<Self, MeasureError> {
        let m = other.multiplier.div(self.multiplier)?;
        let k = other.offset.sub(self.offset.mul(m));
        Ok(Self::from_tracked(m, k))
    }

    /// `A->B` from `C->A` (self) and `B->C` (other).
    pub fn opposite(&self, other: &Self) -> Result<Self, MeasureError> {
        let m = self.multiplier.mul(other.multiplier).inv()?;
        let k = other
            .offset
            .neg()
            .sub(self.offset.div(self.multiplier)?)
            .div(other.multiplier)?;
        Ok(Self::from_tracked(m, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_noop() {
        let c = Conversion::identity();
        assert_eq!(c.apply(42.0).value(), 42.0);
    }

    #[test]
    fn invert_round_trips() {
        let c = Conversion::new(2.0, 3.0).unwrap();
        let inv = c.invert().unwrap();
        let y = c.apply(5.0).value();
        let x = inv.apply(y).value();
        assert!((x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn sequential_composes() {
        let a_to_b = Conversion::new(2.0, 0.0).unwrap();
        let b_to_c = Conversion::new(3.0, 1.0).unwrap();
        let a_to_c = a_to_b.sequential(&b_to_c);
        assert_eq!(a_to_c.apply(1.0).value(), 7.0);
    }

    #[test]
    fn convergent_composes() {
        let a_to_c = Conversion::new(4.0, 0.0).unwrap();
        let b_to_c = Conversion::new(2.0, 0.0).unwrap();
        let a_to_b = a_to_c.convergent(&b_to_c).unwrap();
        assert_eq!(a_to_b.apply(1.0).value(), 2.0);
    }

    #[test]
    fn divergent_composes() {
        let c_to_a = Conversion::new(2.0, 0.0).unwrap();
        let c_to_b = Conversion::new(4.0, 0.0).unwrap();
        let a_to_b = c_to_a.divergent(&c_to_b).unwrap();
        assert_eq!(a_to_b.apply(1.0).value(), 2.0);
    }

    #[test]
    fn opposite_composes() {
        let c_to_a = Conversion::new(2.0, 0.0).unwrap();
        let b_to_c = Conversion::new(3.0, 0.0).unwrap();
        let a_to_b = c_to_a.opposite(&b_to_c).unwrap();
        let expect = 1.0 / (2.0 * 3.0);
        assert!((a_to_b.apply(1.0).value() - expect).abs() < 1e-9);
    }
}
