/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Digital information, in bytes and bits. Both accept metric (`kB`,
/// `MB`) and binary (`KiB`, `MiB`) prefixes.
pub struct Memory;

impl Kind for Memory {
    const NAME: &'static str = "Memory";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[("B", PrefixSet::ALL), ("b", PrefixSet::ALL)]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[ConversionDef::new("B", "b", 8.0)];
        CONVERSIONS
    }

    kind_converter!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn gibibyte_to_byte() {
        let m = Measurement::<Memory>::new(1.0, "GiB").unwrap();
        let converted = m.to("B").unwrap();
        assert_eq!(converted.value(), 2f64.powi(30));
    }

    #[test]
    fn gigabyte_to_byte() {
        let m = Measurement::<Memory>::new(1.0, "GB").unwrap();
        let converted = m.to("B").unwrap();
        assert_eq!(converted.value(), 1e9);
    }

    #[test]
    fn gigabit_to_megabyte() {
        let m = Measurement::<Memory>::new(1.0, "Gb").unwrap();
        let converted = m.to("MB").unwrap();
        assert!((converted.value() - 125.0).abs() < 1e-6);
    }
}
