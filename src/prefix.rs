/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The closed table of metric and binary prefixes, and the bitflag sets
//! a unit uses to select which of them it accepts.

/// A selection of prefix families a unit accepts, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixSet(u32);

impl PrefixSet {
    pub const NONE: PrefixSet = PrefixSet(0);
    pub const SMALL_METRIC: PrefixSet = PrefixSet(1 << 0);
    pub const LARGE_METRIC: PrefixSet = PrefixSet(1 << 1);
    pub const BINARY: PrefixSet = PrefixSet(1 << 2);

    pub const METRIC: PrefixSet = PrefixSet(Self::SMALL_METRIC.0 | Self::LARGE_METRIC.0);
    pub const LARGE_ALL: PrefixSet = PrefixSet(Self::LARGE_METRIC.0 | Self::BINARY.0);
    pub const ALL: PrefixSet = PrefixSet(Self::METRIC.0 | Self::BINARY.0);

    pub fn union(self, other: PrefixSet) -> PrefixSet {
        PrefixSet(self.0 | other.0)
    }

    pub fn contains(self, flag: PrefixSet) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// All prefixes (symbol, multiplier) this set admits, in table order.
    pub fn entries(self) -> impl Iterator<Item = (&'static str, f64)> {
        PREFIX_TABLE
            .iter()
            .filter(move |(_, _, set)| self.contains(*set))
            .map(|(sym, mul, _)| (*sym, *mul))
    }
}

/// `(symbol, multiplier, owning set)`. `u` is kept as an ASCII alias for
/// `μ` so plain-ASCII input parses, both resolving to the same factor.
const PREFIX_TABLE: &[(&str, f64, PrefixSet)] = &[
    ("q", 1e-30, PrefixSet::SMALL_METRIC),
    ("r", 1e-27, PrefixSet::SMALL_METRIC),
    ("y", 1e-24, PrefixSet::SMALL_METRIC),
    ("z", 1e-21, PrefixSet::SMALL_METRIC),
    ("a", 1e-18, PrefixSet::SMALL_METRIC),
    ("f", 1e-15, PrefixSet::SMALL_METRIC),
    ("p", 1e-12, PrefixSet::SMALL_METRIC),
    ("n", 1e-9, PrefixSet::SMALL_METRIC),
    ("μ", 1e-6, PrefixSet::SMALL_METRIC),
    ("u", 1e-6, PrefixSet::SMALL_METRIC),
    ("m", 1e-3, PrefixSet::SMALL_METRIC),
    ("c", 1e-2, PrefixSet::SMALL_METRIC),
    ("d", 1e-1, PrefixSet::SMALL_METRIC),
    ("da", 1e1, PrefixSet::LARGE_METRIC),
    ("h", 1e2, PrefixSet::LARGE_METRIC),
    ("k", 1e3, PrefixSet::LARGE_METRIC),
    ("M", 1e6, PrefixSet::LARGE_METRIC),
    ("G", 1e9, PrefixSet::LARGE_METRIC),
    ("T", 1e12, PrefixSet::LARGE_METRIC),
    ("P", 1e15, PrefixSet::LARGE_METRIC),
    ("E", 1e18, PrefixSet::LARGE_METRIC),
    ("Z", 1e21, PrefixSet::LARGE_METRIC),
    ("Y", 1e24, PrefixSet::LARGE_METRIC),
    ("R", 1e27, PrefixSet::LARGE_METRIC),
    ("Q", 1e30, PrefixSet::LARGE_METRIC),
    ("Ki", 1_024.0, PrefixSet::BINARY),
    ("Mi", 1_048_576.0, PrefixSet::BINARY),
    ("Gi", 1_073_741_824.0, PrefixSet::BINARY),
    ("Ti", 1_099_511_627_776.0, PrefixSet::BINARY),
    ("Pi", 1_125_899_906_842_624.0, PrefixSet::BINARY),
    ("Ei", 1_152_921_504_606_846_976.0, PrefixSet::BINARY),
    ("Zi", 1_180_591_620_717_411_303_424.0, PrefixSet::BINARY),
    ("Yi", 1_208_925_819_614_629_174_706_176.0, PrefixSet::BINARY),
];

/// Looks up a prefix's multiplier by symbol.
pub fn lookup(symbol: &str) -> Option<f64> {
    PREFIX_TABLE
        .iter()
        .find(|(sym, _, _)| *sym == symbol)
        .map(|(_, mul, _)| *mul)
}

/// Renders the micro-prefix alias `u` as its canonical glyph `μ`.
pub fn display_prefix(symbol: &str) -> &str {
    if symbol == "u" {
        "μ"
    } else {
        symbol
    }
}
