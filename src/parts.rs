/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Generic largest-to-smallest parts decomposition (DMS angles,
//! date-interval-style durations), built on a kind's declared
//! [`Kind::part_units`] and its own conversions.

use crate::error::MeasureError;
use crate::kind::Kind;
use crate::measurement::Measurement;

/// The result of decomposing a measurement into parts: integer counts
/// for every unit above `smallest_unit`, plus a fractional remainder in
/// `smallest_unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartsBreakdown {
    pub sign: i32,
    pub parts: Vec<(String, i64)>,
    pub smallest_unit: String,
    pub smallest_value: f64,
}

/// Builds a measurement in the smallest declared part unit from a set
/// of named, non-negative part values plus a sign.
pub fn from_parts_array<K: Kind>(values: &[(&str, f64)], sign: i32) -> Result<Measurement<K>, MeasureError> {
    let units = K::part_units();
    if units.is_empty() {
        return Err(MeasureError::Configuration(format!(
            "{} does not declare part units",
            K::NAME
        )));
    }
    if sign != 1 && sign != -1 {
        return Err(MeasureError::Value(format!("sign must be 1 or -1, got {sign}")));
    }
    let smallest = *units.last().unwrap();
    let mut total = 0.0;
    for (name, value) in values {
        if !units.contains(name) {
            return Err(MeasureError::Value(format!("unknown part unit: {name}")));
        }
        if !value.is_finite() || *value < 0.0 {
            return Err(MeasureError::Value(format!("part value must be finite and non-negative, got {value}")));
        }
        total += K::converter().convert(*value, name, smallest)?;
    }
    Measurement::new(total * sign as f64, smallest)
}

/// Decomposes `measurement` greedily from the largest part unit down to
/// `smallest`, using the kind's own conversions as integer divisors.
pub fn to_parts_array<K: Kind>(
    measurement: &Measurement<K>,
    smallest: &str,
    precision: Option<u32>,
) -> Result<PartsBreakdown, MeasureError> {
    let units = K::part_units();
    let idx = units
        .iter()
        .position(|u| *u == smallest)
        .ok_or_else(|| MeasureError::Value(format!("unknown part unit: {smallest}")))?;
    let chain = &units[..=idx];

    let sign = if measurement.value() < 0.0 { -1 } else { 1 };
    let mut remainder = K::converter().convert(measurement.value().abs(), measurement.unit(), chain[0])?;

    let mut parts = Vec::with_capacity(chain.len().saturating_sub(1));
    let mut ratios = Vec::with_capacity(chain.len().saturating_sub(1));
    for window in chain.windows(2) {
        let ratio = K::converter().convert(1.0, window[0], window[1])?;
        let whole = remainder.floor().max(0.0);
        parts.push((window[0].to_string(), whole as i64));
        remainder = (remainder - whole) * ratio;
        ratios.push(ratio);
    }

    let mut smallest_value = remainder;
    if let Some(p) = precision {
        let factor = 10f64.powi(p as i32);
        smallest_value = (smallest_value * factor).round() / factor;
        carry_overflow(&mut parts, &ratios, &mut smallest_value);
    }

    Ok(PartsBreakdown {
        sign,
        parts,
        smallest_unit: smallest.to_string(),
        smallest_value,
    })
}

/// Propagates a rounding overflow (`smallest_value` reaching the next
/// larger unit's ratio) upward through the part chain.
fn carry_overflow(parts: &mut [(String, i64)], ratios: &[f64], smallest_value: &mut f64) {
    let Some(mut i) = parts.len().checked_sub(1) else {
        return;
    };
    if ratios.is_empty() || *smallest_value < ratios[i] {
        return;
    }
    *smallest_value -= ratios[i];
    loop {
        parts[i].1 += 1;
        if i == 0 {
            break;
        }
        let ratio_above = ratios[i - 1];
        if (parts[i].1 as f64) < ratio_above {
            break;
        }
        parts[i].1 = 0;
        i -= 1;
    }
}

/// Renders a breakdown, labelling each unit with the kind's display
/// form. Zero-valued leading parts are omitted unless `show_zeros`.
pub fn format_parts<K: Kind>(breakdown: &PartsBreakdown, precision: Option<u32>, show_zeros: bool) -> String {
    let mut segments = Vec::new();
    let mut started = show_zeros;
    for (unit, count) in &breakdown.parts {
        if *count != 0 {
            started = true;
        }
        if started {
            segments.push(format!("{count}{}", K::format_unit(unit)));
        }
    }
    let p = precision.unwrap_or(0) as usize;
    segments.push(format!("{:.*}{}", p, breakdown.smallest_value, K::format_unit(&breakdown.smallest_unit)));

    let body = segments.join(" ");
    if breakdown.sign < 0 {
        format!("-{body}")
    } else {
        body
    }
}
