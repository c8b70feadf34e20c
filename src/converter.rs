/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The per-kind conversion engine: materialises the prefixed unit
//! table from a kind's declarations, stores declared conversions, and
//! lazily discovers the rest by best-first search over the affine
//! conversion algebra.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::conversion::Conversion;
use crate::error::MeasureError;
use crate::kind::ConversionDef;
use crate::prefix::{self, PrefixSet};
use crate::symbol::{parse_derived_symbol, Unit};

struct ConverterState {
    unit_defs: Vec<(String, PrefixSet)>,
    units: HashMap<String, Unit>,
    conversion_defs: Vec<(String, String, f64, f64)>,
    conversions: HashMap<String, HashMap<String, Conversion>>,
}

/// A physical-quantity kind's conversion graph: units plus the
/// conversions (declared and discovered) between them.
pub struct Converter {
    state: RwLock<ConverterState>,
}

impl Converter {
    pub fn new(
        unit_defs: &[(&'static str, PrefixSet)],
        conversion_defs: &[ConversionDef],
    ) -> Result<Self, MeasureError> {
        if unit_defs.is_empty() {
            return Err(MeasureError::Configuration(
                "a kind must declare at least one unit".to_string(),
            ));
        }
        let unit_defs: Vec<(String, PrefixSet)> = unit_defs
            .iter()
            .map(|(sym, flags)| (sym.to_string(), *flags))
            .collect();
        let conversion_defs: Vec<(String, String, f64, f64)> = conversion_defs
            .iter()
            .map(|d| (d.init.to_string(), d.fin.to_string(), d.multiplier, d.offset))
            .collect();
        let units = build_units(&unit_defs)?;
        let conversions = build_conversions(&conversion_defs, &units)?;
        Ok(Self {
            state: RwLock::new(ConverterState {
                unit_defs,
                units,
                conversion_defs,
                conversions,
            }),
        })
    }

    pub fn get_unit(&self, symbol: &str) -> Result<Unit, MeasureError> {
        let state = self.state.read().unwrap();
        state
            .units
            .get(symbol)
            .cloned()
            .ok_or_else(|| MeasureError::Value(format!("unknown unit: {symbol}")))
    }

    pub fn get_unit_symbols(&self) -> HashSet<String> {
        self.state.read().unwrap().units.keys().cloned().collect()
    }

    /// Finds (searching lazily if necessary) the conversion from `i` to
    /// `f`, caching the result.
    pub fn get_conversion(&self, i: &str, f: &str) -> Result<Conversion, MeasureError> {
        let (unit_i, unit_f) = {
            let state = self.state.read().unwrap();
            let unit_i = state
                .units
                .get(i)
                .cloned()
                .ok_or_else(|| MeasureError::Value(format!("unknown unit: {i}")))?;
            let unit_f = state
                .units
                .get(f)
                .cloned()
                .ok_or_else(|| MeasureError::Value(format!("unknown unit: {f}")))?;
            (unit_i, unit_f)
        };

        if i == f {
            return Ok(Conversion::identity());
        }

        if let Some(cached) = self.cached(i, f) {
            return Ok(cached);
        }

        let di = unit_i.derived_symbol();
        let df = unit_f.derived_symbol();

        if di != df {
            loop {
                if self.cached(&di, &df).is_some() {
                    break;
                }
                let mut state = self.state.write().unwrap();
                if state
                    .conversions
                    .get(&di)
                    .and_then(|m| m.get(&df))
                    .is_some()
                {
                    continue;
                }
                if !generate_next_conversion(&mut state) {
                    return Err(MeasureError::NoPath(i.to_string(), f.to_string()));
                }
            }
        }

        let derived_conv = if di == df {
            Conversion::identity()
        } else {
            self.cached(&di, &df)
                .expect("search loop only exits once the derived pair is populated")
        };

        let result = if unit_i.prefix.is_empty() && unit_f.prefix.is_empty() {
            derived_conv
        } else {
            let state = self.state.read().unwrap();
            let derived_i = state.units.get(&di).cloned().unwrap();
            let derived_f = state.units.get(&df).cloned().unwrap();
            drop(state);
            prefix_alteration(&derived_conv, &derived_i, &derived_f, &unit_i, &unit_f)?
        };

        let mut state = self.state.write().unwrap();
        state
            .conversions
            .entry(i.to_string())
            .or_default()
            .insert(f.to_string(), result.clone());
        Ok(result)
    }

    pub fn convert(&self, value: f64, i: &str, f: &str) -> Result<f64, MeasureError> {
        Ok(self.get_conversion(i, f)?.apply(value).value())
    }

    pub fn add_unit(&self, derived: &str, flags: PrefixSet) -> Result<(), MeasureError> {
        let mut state = self.state.write().unwrap();
        state.unit_defs.retain(|(d, _)| d != derived);
        state.unit_defs.push((derived.to_string(), flags));
        rebuild(&mut state)
    }

    pub fn remove_unit(&self, derived: &str) -> Result<(), MeasureError> {
        let mut state = self.state.write().unwrap();
        state.unit_defs.retain(|(d, _)| d != derived);
        state
            .conversion_defs
            .retain(|(init, fin, _, _)| !symbol_has_derived(init, derived) && !symbol_has_derived(fin, derived));
        rebuild(&mut state)
    }

    pub fn add_conversion(&self, init: &str, fin: &str, multiplier: f64, offset: f64) -> Result<(), MeasureError> {
        let mut state = self.state.write().unwrap();
        state.conversion_defs.retain(|(i, f, _, _)| !(i == init && f == fin));
        state
            .conversion_defs
            .push((init.to_string(), fin.to_string(), multiplier, offset));
        rebuild(&mut state)
    }

    pub fn remove_conversion(&self, init: &str, fin: &str) -> Result<(), MeasureError> {
        let mut state = self.state.write().unwrap();
        state.conversion_defs.retain(|(i, f, _, _)| !(i == init && f == fin));
        rebuild(&mut state)
    }

    fn cached(&self, i: &str, f: &str) -> Option<Conversion> {
        self.state
            .read()
            .unwrap()
            .conversions
            .get(i)
            .and_then(|m| m.get(f))
            .cloned()
    }
}

fn rebuild(state: &mut ConverterState) -> Result<(), MeasureError> {
    state.units = build_units(&state.unit_defs)?;
    state.conversions = build_conversions(&state.conversion_defs, &state.units)?;
    Ok(())
}

fn build_units(defs: &[(String, PrefixSet)]) -> Result<HashMap<String, Unit>, MeasureError> {
    let mut units = HashMap::new();
    for (derived_str, flags) in defs {
        let sym = parse_derived_symbol(derived_str).map_err(|e| {
            MeasureError::Configuration(format!("invalid declared unit {derived_str}: {e}"))
        })?;
        let unit = Unit::derived(sym.base.clone(), sym.exponent);
        units.insert(unit.symbol(), unit);
        if !flags.is_none() {
            for (prefix, multiplier) in flags.entries() {
                let unit = Unit::prefixed(prefix, sym.base.clone(), sym.exponent, multiplier);
                units.insert(unit.symbol(), unit);
            }
        }
    }
    Ok(units)
}

fn build_conversions(
    defs: &[(String, String, f64, f64)],
    units: &HashMap<String, Unit>,
) -> Result<HashMap<String, HashMap<String, Conversion>>, MeasureError> {
    let mut conversions: HashMap<String, HashMap<String, Conversion>> = HashMap::new();
    for (init, fin, multiplier, offset) in defs {
        units
            .get(init)
            .ok_or_else(|| MeasureError::Configuration(format!("conversion endpoint {init} is not a declared unit")))?;
        units
            .get(fin)
            .ok_or_else(|| MeasureError::Configuration(format!("conversion endpoint {fin} is not a declared unit")))?;
        let conv = Conversion::new(*multiplier, *offset)?;
        conversions.entry(init.clone()).or_default().insert(fin.clone(), conv);
    }

    let mut synthesized = Vec::new();
    for (init, fin, _, _) in defs {
        let ui = &units[init];
        let uf = &units[fin];
        if ui.prefix.is_empty() && uf.prefix.is_empty() {
            continue;
        }
        let di = ui.derived_symbol();
        let df = uf.derived_symbol();
        if di == df || conversions.get(&di).and_then(|m| m.get(&df)).is_some() {
            continue;
        }
        let conv = conversions[init][fin].clone();
        let derived_i = &units[&di];
        let derived_f = &units[&df];
        synthesized.push((di, df, prefix_alteration(&conv, ui, uf, derived_i, derived_f)?));
    }
    for (di, df, conv) in synthesized {
        conversions.entry(di).or_default().entry(df).or_insert(conv);
    }

    Ok(conversions)
}

/// Re-expresses `conv` (between `cur_init`/`cur_fin`) as the equivalent
/// conversion between `new_init`/`new_fin`, which must share the same
/// base and exponent under different prefixes.
fn prefix_alteration(
    conv: &Conversion,
    cur_init: &Unit,
    cur_fin: &Unit,
    new_init: &Unit,
    new_fin: &Unit,
) -> Result<Conversion, MeasureError> {
    use crate::err_tracked::ErrTracked;
    let pi_c = ErrTracked::exact(cur_init.multiplier());
    let pf_c = ErrTracked::exact(cur_fin.multiplier());
    let pi_n = ErrTracked::exact(new_init.multiplier());
    let pf_n = ErrTracked::exact(new_fin.multiplier());
    let multiplier = conv.multiplier.mul(pf_c).mul(pi_n).div(pf_n.mul(pi_c))?;
    let offset = conv.offset.mul(pf_c).div(pf_n)?;
    Ok(Conversion::from_tracked(multiplier, offset))
}

fn symbol_has_derived(symbol: &str, derived: &str) -> bool {
    match symbol.strip_suffix(derived) {
        Some(rest) => rest.is_empty() || prefix::lookup(rest).is_some(),
        None => false,
    }
}

/// One best-first search pass: finds the single cheapest candidate
/// conversion among all currently-unfilled derived-unit pairs and
/// installs it. Returns whether progress was made.
fn generate_next_conversion(state: &mut ConverterState) -> bool {
    let derived: Vec<String> = state.unit_defs.iter().map(|(d, _)| d.clone()).collect();
    let mut best: Option<(String, String, Conversion, f64)> = None;

    for i in &derived {
        for f in &derived {
            if i == f {
                continue;
            }
            if state.conversions.get(i).and_then(|m| m.get(f)).is_some() {
                continue;
            }
            let mut local: Option<(Conversion, f64)> = None;
            let consider = |candidate: Conversion, local: &mut Option<(Conversion, f64)>| {
                let err = candidate.total_abs_err();
                if local.as_ref().map_or(true, |(_, e)| err < *e) {
                    *local = Some((candidate, err));
                }
            };

            if let Some(fi) = state.conversions.get(f).and_then(|m| m.get(i)) {
                if let Ok(inverted) = fi.invert() {
                    consider(inverted, &mut local);
                }
            }

            for c in &derived {
                if c == i || c == f {
                    continue;
                }
                let ic = state.conversions.get(i).and_then(|m| m.get(c));
                let ci = state.conversions.get(c).and_then(|m| m.get(i));
                let fc = state.conversions.get(f).and_then(|m| m.get(c));
                let cf = state.conversions.get(c).and_then(|m| m.get(f));

                if let (Some(ic), Some(cf)) = (ic, cf) {
                    consider(ic.sequential(cf), &mut local);
                }
                if let (Some(ic), Some(fc)) = (ic, fc) {
                    if let Ok(cand) = ic.convergent(fc) {
                        consider(cand, &mut local);
                    }
                }
                if let (Some(ci), Some(cf)) = (ci, cf) {
                    if let Ok(cand) = ci.divergent(cf) {
                        consider(cand, &mut local);
                    }
                }
                if let (Some(ci), Some(fc)) = (ci, fc) {
                    if let Ok(cand) = ci.opposite(fc) {
                        consider(cand, &mut local);
                    }
                }
            }

            if let Some((candidate, err)) = local {
                if best.as_ref().map_or(true, |(_, _, _, e)| err < *e) {
                    best = Some((i.clone(), f.clone(), candidate, err));
                }
            }
        }
    }

    match best {
        Some((i, f, conv, _)) => {
            state.conversions.entry(i).or_default().insert(f, conv);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ConversionDef;

    const UNITS: &[(&str, PrefixSet)] = &[("m", PrefixSet::METRIC), ("ft", PrefixSet::NONE), ("in", PrefixSet::NONE)];
    const CONVS: &[ConversionDef] = &[
        ConversionDef::new("in", "m", 0.0254),
        ConversionDef::new("ft", "in", 12.0),
    ];

    #[test]
    fn identity_conversion() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        assert_eq!(c.convert(5.0, "m", "m").unwrap(), 5.0);
    }

    #[test]
    fn direct_conversion() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        assert!((c.convert(1.0, "in", "m").unwrap() - 0.0254).abs() < 1e-12);
    }

    #[test]
    fn searched_conversion_via_pivot() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        let got = c.convert(1.0, "ft", "m").unwrap();
        assert!((got - 0.3048).abs() < 1e-9);
    }

    #[test]
    fn inverted_conversion() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        let got = c.convert(0.0254, "m", "in").unwrap();
        assert!((got - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prefix_adjusts_direct_conversion() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        let got = c.convert(1.0, "in", "km").unwrap();
        assert!((got - 0.0000254).abs() < 1e-12);
    }

    #[test]
    fn no_path_errors() {
        let units: &[(&str, PrefixSet)] = &[("m", PrefixSet::NONE), ("kg", PrefixSet::NONE)];
        let c = Converter::new(units, &[]).unwrap();
        assert!(matches!(c.convert(1.0, "m", "kg"), Err(MeasureError::NoPath(_, _))));
    }

    #[test]
    fn remove_unit_prunes_referencing_conversions() {
        let c = Converter::new(UNITS, CONVS).unwrap();
        c.remove_unit("in").unwrap();
        assert!(c.get_unit("in").is_err());
        assert!(matches!(c.convert(1.0, "ft", "m"), Err(MeasureError::NoPath(_, _))));
    }
}
