/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The contract a measurement kind implements so the conversion engine
//! can build its unit table and search graph.

use crate::converter::Converter;
use crate::prefix::PrefixSet;

/// A declared conversion tuple: `init -> fin`, `multiplier`, optional
/// `offset` (defaults to `0`).
pub struct ConversionDef {
    pub init: &'static str,
    pub fin: &'static str,
    pub multiplier: f64,
    pub offset: f64,
}

impl ConversionDef {
    pub const fn new(init: &'static str, fin: &'static str, multiplier: f64) -> Self {
        Self {
            init,
            fin,
            multiplier,
            offset: 0.0,
        }
    }

    pub const fn with_offset(init: &'static str, fin: &'static str, multiplier: f64, offset: f64) -> Self {
        Self {
            init,
            fin,
            multiplier,
            offset,
        }
    }
}

/// One physical-quantity family: a units table, a conversions table,
/// and optional parts/formatting hooks. Implementors are zero-sized
/// marker types; state lives in the kind's process-wide [`Converter`].
pub trait Kind: Sized + 'static {
    /// A human-readable name, used in type-mismatch error messages.
    const NAME: &'static str;

    /// Derived unit symbol and the prefix families it accepts, in
    /// declaration order.
    fn units() -> &'static [(&'static str, PrefixSet)];

    /// Declared direct conversions between this kind's units.
    fn conversions() -> &'static [ConversionDef];

    /// Largest-to-smallest part units, for kinds that support
    /// decomposition (DMS angles, date-like intervals). Empty if unused.
    fn part_units() -> &'static [&'static str] {
        &[]
    }

    /// Overrides the display form of a unit symbol (e.g. `C` -> `°C`).
    fn format_unit(symbol: &str) -> String {
        symbol.to_string()
    }

    /// The process-wide converter for this kind, built on first use.
    fn converter() -> &'static Converter;
}

/// Declares a [`Kind`]'s process-wide [`Converter`] behind a
/// [`std::sync::OnceLock`], matching the engine's init-on-first-access
/// lifecycle (see the crate's concurrency notes).
#[macro_export]
macro_rules! kind_converter {
    () => {
        fn converter() -> &'static $crate::converter::Converter {
            static CONVERTER: std::sync::OnceLock<$crate::converter::Converter> = std::sync::OnceLock::new();
            CONVERTER.get_or_init(|| {
                $crate::converter::Converter::new(Self::units(), Self::conversions())
                    .expect("kind declares a valid unit/conversion table")
            })
        }
    };
}
