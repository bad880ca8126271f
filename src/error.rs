use thiserror::Error;

use crate::ConditionKey;

/// Rejected input while building a railway network.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NetworkError {
    #[error("invalid input format: expected 3 fields, found {0}")]
    InvalidFormat(usize),
    #[error("distance must be numeric: {0:?}")]
    NonNumericDistance(String),
    #[error("distances can't be 0 or negative: {0}")]
    NonPositiveDistance(i64),
    #[error("too many towns: {0} exceeds the supported number of towns")]
    TooManyTowns(usize),
}

/// Rejected route counting conditions.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConditionsError {
    #[error("conditions are missing")]
    Missing,
    #[error("unacceptable condition: {0:?}")]
    Unacceptable(String),
    #[error("condition {0} is given more than once")]
    Duplicate(ConditionKey),
    #[error("value of {key} should be a number: {value:?}")]
    NotANumber { key: ConditionKey, value: String },
    #[error("value of {key} should be a positive number: {value}")]
    Negative { key: ConditionKey, value: i64 },
    #[error("{} and {} cannot be used simultaneously", ConditionKey::ExactStops, ConditionKey::MaxStops)]
    ConflictingStops,
}
