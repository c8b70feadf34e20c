/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;

use crate::error::MeasureError;
use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::measurement::Measurement;
use crate::parts::{self, PartsBreakdown};
use crate::prefix::PrefixSet;

/// Angle, with degrees/minutes/seconds decomposition and trigonometric
/// helpers layered on top of the generic engine.
pub struct Angle;

impl Kind for Angle {
    const NAME: &'static str = "Angle";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[
            ("deg", PrefixSet::NONE),
            ("rad", PrefixSet::NONE),
            ("grad", PrefixSet::NONE),
            ("arcmin", PrefixSet::NONE),
            ("arcsec", PrefixSet::NONE),
        ]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("deg", "rad", PI / 180.0),
            ConversionDef::new("grad", "deg", 0.9),
            ConversionDef::new("arcmin", "deg", 1.0 / 60.0),
            ConversionDef::new("arcsec", "arcmin", 1.0 / 60.0),
        ];
        CONVERSIONS
    }

    fn part_units() -> &'static [&'static str] {
        &["deg", "arcmin", "arcsec"]
    }

    fn format_unit(symbol: &str) -> String {
        match symbol {
            "deg" => "°".to_string(),
            "arcmin" => "′".to_string(),
            "arcsec" => "″".to_string(),
            other => other.to_string(),
        }
    }

    kind_converter!();
}

impl Angle {
    pub fn sin(m: &Measurement<Angle>) -> Result<f64, MeasureError> {
        Ok(m.to("rad")?.value().sin())
    }

    pub fn cos(m: &Measurement<Angle>) -> Result<f64, MeasureError> {
        Ok(m.to("rad")?.value().cos())
    }

    pub fn tan(m: &Measurement<Angle>) -> Result<f64, MeasureError> {
        Ok(m.to("rad")?.value().tan())
    }

    pub fn asin(x: f64) -> Result<Measurement<Angle>, MeasureError> {
        Measurement::new(x.asin(), "rad")
    }

    pub fn acos(x: f64) -> Result<Measurement<Angle>, MeasureError> {
        Measurement::new(x.acos(), "rad")
    }

    pub fn atan(x: f64) -> Result<Measurement<Angle>, MeasureError> {
        Measurement::new(x.atan(), "rad")
    }

    /// Normalises into `[0, 360)` degrees-equivalent, preserving the
    /// original unit.
    pub fn wrap(m: &Measurement<Angle>) -> Result<Measurement<Angle>, MeasureError> {
        let degrees = m.to("deg")?.value();
        let wrapped = degrees.rem_euclid(360.0);
        Measurement::new(wrapped, "deg")?.to(m.unit())
    }

    /// Compares two angles after converting both to radians, rather
    /// than through the generic unit-of-self comparison.
    pub fn approx_equal(a: &Measurement<Angle>, b: &Measurement<Angle>, rel_tol: f64, abs_tol: f64) -> Result<bool, MeasureError> {
        let ra = a.to("rad")?.value();
        let rb = b.to("rad")?.value();
        let diff = (ra - rb).abs();
        Ok(diff <= abs_tol.max(rel_tol * ra.abs().max(rb.abs())))
    }

    pub fn to_parts(m: &Measurement<Angle>, smallest: &str, precision: Option<u32>) -> Result<PartsBreakdown, MeasureError> {
        parts::to_parts_array(m, smallest, precision)
    }

    pub fn format_parts(breakdown: &PartsBreakdown, precision: Option<u32>, show_zeros: bool) -> String {
        parts::format_parts::<Angle>(breakdown, precision, show_zeros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_to_rad() {
        let m = Measurement::<Angle>::new(180.0, "deg").unwrap();
        assert!((m.to("rad").unwrap().value() - PI).abs() < 1e-12);
    }

    #[test]
    fn dms_decomposition_formats() {
        let m = Measurement::<Angle>::new(45.5042, "deg").unwrap();
        let breakdown = Angle::to_parts(&m, "arcsec", Some(1)).unwrap();
        let text = Angle::format_parts(&breakdown, Some(1), false);
        assert_eq!(text, "45° 30′ 15.1″");
    }

    #[test]
    fn dms_carries_on_rounding() {
        let m = Measurement::<Angle>::new(29.0 + 59.0 / 60.0 + 59.9999 / 3600.0, "deg").unwrap();
        let breakdown = Angle::to_parts(&m, "arcsec", Some(0)).unwrap();
        let text = Angle::format_parts(&breakdown, Some(0), false);
        assert_eq!(text, "30° 0′ 0″");
    }

    #[test]
    fn negative_angle_carries_sign_to_all_parts() {
        let m = Measurement::<Angle>::new(-45.5042, "deg").unwrap();
        let breakdown = Angle::to_parts(&m, "arcsec", Some(1)).unwrap();
        assert_eq!(breakdown.sign, -1);
        let text = Angle::format_parts(&breakdown, Some(1), false);
        assert!(text.starts_with('-'));
    }

    #[test]
    fn wrap_normalizes_into_0_360() {
        let m = Measurement::<Angle>::new(-30.0, "deg").unwrap();
        let wrapped = Angle::wrap(&m).unwrap();
        assert!((wrapped.value() - 330.0).abs() < 1e-9);
    }
}
