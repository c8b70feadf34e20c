/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::error::MeasureError;
use crate::kind::{ConversionDef, Kind};
use crate::kind_converter;
use crate::measurement::Measurement;
use crate::parts;
use crate::prefix::PrefixSet;

/// Time, anchored on the second. `month` (30 days) and `year` (365
/// days) are fixed-length approximations, not calendar-aware; this
/// keeps every part ratio a plain numeric conversion rather than
/// requiring calendar arithmetic the engine doesn't model.
pub struct Time;

impl Kind for Time {
    const NAME: &'static str = "Time";

    fn units() -> &'static [(&'static str, PrefixSet)] {
        &[
            ("s", PrefixSet::METRIC),
            ("min", PrefixSet::NONE),
            ("h", PrefixSet::NONE),
            ("day", PrefixSet::NONE),
            ("week", PrefixSet::NONE),
            ("month", PrefixSet::NONE),
            ("year", PrefixSet::NONE),
        ]
    }

    fn conversions() -> &'static [ConversionDef] {
        const CONVERSIONS: &[ConversionDef] = &[
            ConversionDef::new("min", "s", 60.0),
            ConversionDef::new("h", "min", 60.0),
            ConversionDef::new("day", "h", 24.0),
            ConversionDef::new("week", "day", 7.0),
            ConversionDef::new("month", "day", 30.0),
            ConversionDef::new("year", "day", 365.0),
        ];
        CONVERSIONS
    }

    fn part_units() -> &'static [&'static str] {
        &["year", "month", "day", "h", "min", "s"]
    }

    kind_converter!();
}

impl Time {
    /// Builds a duration from named components; any omitted component
    /// defaults to zero.
    pub fn from_parts(year: f64, month: f64, day: f64, h: f64, min: f64, s: f64) -> Result<Measurement<Time>, MeasureError> {
        parts::from_parts_array(
            &[("year", year), ("month", month), ("day", day), ("h", h), ("min", min), ("s", s)],
            1,
        )
    }

    /// Renders an ISO-8601 duration (`PnYnMnDTnHnMnS`), down to second
    /// resolution.
    pub fn to_date_interval_specifier(m: &Measurement<Time>) -> Result<String, MeasureError> {
        let breakdown = parts::to_parts_array(m, "s", None)?;
        let mut date_part = String::new();
        let mut time_part = String::new();
        for (unit, n) in &breakdown.parts {
            match unit.as_str() {
                "year" if *n != 0 => date_part.push_str(&format!("{n}Y")),
                "month" if *n != 0 => date_part.push_str(&format!("{n}M")),
                "day" if *n != 0 => date_part.push_str(&format!("{n}D")),
                "h" if *n != 0 => time_part.push_str(&format!("{n}H")),
                "min" if *n != 0 => time_part.push_str(&format!("{n}M")),
                _ => {}
            }
        }
        let seconds = breakdown.smallest_value.round() as i64;
        if seconds != 0 {
            time_part.push_str(&format!("{seconds}S"));
        }

        let mut out = String::from("P");
        out.push_str(&date_part);
        if !time_part.is_empty() {
            out.push('T');
            out.push_str(&time_part);
        }
        if date_part.is_empty() && time_part.is_empty() {
            out.push_str("0D");
        }
        Ok(if breakdown.sign < 0 { format!("-{out}") } else { out })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_sums_in_seconds() {
        let m = Time::from_parts(0.0, 0.0, 1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(m.value(), 93784.0);
        assert_eq!(m.unit(), "s");
    }

    #[test]
    fn date_interval_round_trip() {
        let m = Time::from_parts(0.0, 0.0, 1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(Time::to_date_interval_specifier(&m).unwrap(), "P1DT2H3M4S");
    }

    #[test]
    fn zero_duration_is_p0d() {
        let m = Measurement::<Time>::new(0.0, "s").unwrap();
        assert_eq!(Time::to_date_interval_specifier(&m).unwrap(), "P0D");
    }

    #[test]
    fn week_converts_to_days() {
        let m = Measurement::<Time>::new(1.0, "week").unwrap();
        assert_eq!(m.to("day").unwrap().value(), 7.0);
    }
}
