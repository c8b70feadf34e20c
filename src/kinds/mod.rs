/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Concrete measurement kinds. Each module declares one kind's units
//! and conversions and implements [`crate::kind::Kind`] over them.

pub mod angle;
pub mod area;
pub mod length;
pub mod mass;
pub mod memory;
pub mod temperature;
pub mod time;
pub mod volume;
