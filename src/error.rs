/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use thiserror::Error;

/// Errors raised across the measurement engine.
#[derive(Error, PartialEq, Clone, Debug)]
pub enum MeasureError {
    #[error("invalid unit configuration: {0}")]
    Configuration(String),
    #[error("invalid value: {0}")]
    Value(String),
    // The §7 "type error" case (incompatible kinds passed to compare/add/sub)
    // is caught by the type checker: Measurement<K> only ever compares
    // against another Measurement<K>, so there's no runtime arm for it.
    #[error("division by zero")]
    DivisionByZero,
    #[error("no conversion path from {0} to {1}")]
    NoPath(String, String),
}
