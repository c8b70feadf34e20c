/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Area, anchored on the square metre. `m2`'s prefix multiplier is
/// raised to the unit's exponent (2), so `km2 -> m2` scales by 1e6, not
/// 1e3.
pub struct Area;

impl Kind for Area {
    const NAME: &'static str = "Area";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[("m2", PrefixSet::METRIC), ("ha", PrefixSet::NONE), ("acre", PrefixSet::NONE)]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("ha", "m2", 10000.0),
            ConversionDef::new("acre", "m2", 4046.8564224),
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
    fn square_kilometre_to_square_metre() {
        let m = Measurement::<Area>::new(1.0, "km2").unwrap();
        let converted = m.to("m2").unwrap();
        assert!((converted.value() - 1e6).abs() < 1e-3);
    }

    #[test]
    fn square_centimetre_to_square_metre() {
        let m = Measurement::<Area>::new(1.0, "cm2").unwrap();
        let converted = m.to("m2").unwrap();
        assert!((converted.value() - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn hectare_to_acre_via_pivot() {
        let m = Measurement::<Area>::new(1.0, "ha").unwrap();
        let converted = m.to("acre").unwrap();
        assert!((converted.value() - 2.4710538).abs() < 1e-5);
    }
}
