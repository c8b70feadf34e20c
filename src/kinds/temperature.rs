/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Temperature. `K` is the pivot the other two scales are declared
/// against; converting `C <-> F` is discovered by the search (a
/// convergent combination through `K`), not declared directly.
pub struct Temperature;

impl Kind for Temperature {
    const NAME: &'static str = "Temperature";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[("K", PrefixSet::NONE), ("C", PrefixSet::NONE), ("F", PrefixSet::NONE)]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::with_offset("C", "K", 1.0, 273.15),
            ConversionDef::with_offset("C", "F", 1.8, 32.0),
        ];
        CONVERSIONS
    }

    fn format_unit(symbol: &str) -> String {
        match symbol {
            "C" => "°C".to_string(),
            "F" => "°F".to_string(),
            other => other.to_string(),
        }
    }

    kind_converter!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn celsius_to_fahrenheit_fixed_points() {
        let c0 = Measurement::<Temperature>::new(0.0, "C").unwrap();
        assert!((c0.to("F").unwrap().value() - 32.0).abs() < 1e-9);
        let c100 = Measurement::<Temperature>::new(100.0, "C").unwrap();
        assert!((c100.to("F").unwrap().value() - 212.0).abs() < 1e-9);
        let cneg40 = Measurement::<Temperature>::new(-40.0, "C").unwrap();
        assert!((cneg40.to("F").unwrap().value() - (-40.0)).abs() < 1e-9);
    }

    #[test]
    fn kelvin_to_fahrenheit_via_pivot() {
        let k0 = Measurement::<Temperature>::new(0.0, "K").unwrap();
        assert!((k0.to("F").unwrap().value() - (-459.67)).abs() < 1e-6);
    }

    #[test]
    fn display_uses_degree_glyph() {
        use crate::measurement::FormatSpecifier;
        let c = Measurement::<Temperature>::new(20.0, "C").unwrap();
        assert_eq!(c.format(FormatSpecifier::Fixed, None, true, true), "20 °C");
    }
}
