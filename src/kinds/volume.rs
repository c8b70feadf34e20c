/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Volume, anchored on the cubic metre.
pub struct Volume;

impl Kind for Volume {
    const NAME: &'static str = "Volume";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[("m3", PrefixSet::METRIC), ("l", PrefixSet::METRIC), ("gal", PrefixSet::NONE)]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("l", "m3", 0.001),
            ConversionDef::new("gal", "l", 3.785411784),
        ];
        CONVERSIONS
    }

    kind_converter!();
}
