/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Length, anchored on the metre.
pub struct Length;

impl Kind for Length {
    const NAME: &'static str = "Length";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[
            ("m", PrefixSet::METRIC),
            ("in", PrefixSet::NONE),
            ("ft", PrefixSet::NONE),
            ("yd", PrefixSet::NONE),
            ("mi", PrefixSet::NONE),
        ]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("in", "mm", 25.4),
            ConversionDef::new("ft", "in", 12.0),
            ConversionDef::new("yd", "ft", 3.0),
            ConversionDef::new("mi", "ft", 5280.0),
        ];
        CONVERSIONS
    }

    kind_converter!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn km_to_in() {
        let m = Measurement::<Length>::new(1.0, "km").unwrap();
        let converted = m.to("in").unwrap();
        assert!((converted.value() - 39370.0787).abs() < 1e-3);
    }

    #[test]
    fn round_trip_km_in() {
        let m = Measurement::<Length>::new(1.0, "km").unwrap();
        let back = m.to("in").unwrap().to("km").unwrap();
        assert!((back.value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mile_to_yard_via_foot_pivot() {
        let m = Measurement::<Length>::new(1.0, "mi").unwrap();
        let converted = m.to("yd").unwrap();
        assert!((converted.value() - 1760.0).abs() < 1e-6);
    }
}
