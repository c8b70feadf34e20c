/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::prefix::PrefixSet;

/// Mass, anchored on the gram.
pub struct Mass;

impl Kind for Mass {
    const NAME: &'static str = "Mass";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[
            ("g", PrefixSet::METRIC),
            ("lb", PrefixSet::NONE),
            ("oz", PrefixSet::NONE),
            ("st", PrefixSet::NONE),
        ]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("lb", "g", 453.59237),
            ConversionDef::new("oz", "lb", 1.0 / 16.0),
            ConversionDef::new("st", "lb", 14.0),
        ];
        CONVERSIONS
    }

    kind_converter!();
}
