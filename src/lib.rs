/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod conversion;
pub mod converter;
pub mod err_tracked;
pub mod error;
pub mod kind;
pub mod kinds;
pub mod measurement;
pub mod parts;
pub mod prefix;
pub mod symbol;

pub use conversion::Conversion;
pub use converter::Converter;
pub use err_tracked::ErrTracked;
pub use error::MeasureError;
pub use kind::Kind;
pub use measurement::{FormatSpecifier, Measurement};
pub use prefix::PrefixSet;
pub use symbol::Unit;

pub use kinds::angle::Angle;
pub use kinds::area::Area;
pub use kinds::length::Length;
pub use kinds::mass::Mass;
pub use kinds::memory::Memory;
pub use kinds::temperature::Temperature;
pub use kinds::time::Time;
pub use kinds::volume::Volume;
