use std::str::FromStr;

use rustc_hash::FxHashSet;
use strum::{Display, EnumString};

use crate::{ConditionsError, Distance};

/// Name of a route counting condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ConditionKey {
    #[strum(to_string = "exact_stops", serialize = "exactStops", serialize = "stops")]
    ExactStops,
    #[strum(to_string = "max_stops", serialize = "maxStops")]
    MaxStops,
    #[strum(to_string = "max_distance", serialize = "maxDistance")]
    MaxDistance,
}

/// Filters applied to the routes between two towns before they are counted.
///
/// At least one condition must be set, and the two stop conditions are mutually exclusive.
/// The stop condition (if any) is applied first, then the distance condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    /// Keep only the routes made of exactly this number of stops.
    pub exact_stops: Option<u32>,
    /// Keep only the routes made of at most this number of stops.
    pub max_stops: Option<u32>,
    /// Keep routes, in discovery order, as long as their cumulative distance stays within
    /// this limit.
    pub max_distance: Option<Distance>,
}

impl Conditions {
    pub const fn with_exact_stops(mut self, stops: u32) -> Self {
        self.exact_stops = Some(stops);
        self
    }

    pub const fn with_max_stops(mut self, stops: u32) -> Self {
        self.max_stops = Some(stops);
        self
    }

    pub const fn with_max_distance(mut self, distance: Distance) -> Self {
        self.max_distance = Some(distance);
        self
    }

    /// Parses the conditions from `(key, value)` pairs, e.g. `("max_stops", "3")`.
    ///
    /// Keys are checked before values, and values before the combination of conditions.
    /// A condition given more than once, under any of its names, is rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConditionsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(ConditionsError::Missing);
        }

        let keys = pairs
            .iter()
            .map(|(key, _)| {
                ConditionKey::from_str(key.as_ref())
                    .map_err(|_| ConditionsError::Unacceptable(key.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = FxHashSet::default();
        if let Some(&key) = keys.iter().find(|&&key| !seen.insert(key)) {
            return Err(ConditionsError::Duplicate(key));
        }

        let mut conditions = Self::default();

        for (key, (_, value)) in keys.into_iter().zip(&pairs) {
            let value = parse_value(key, value.as_ref())?;
            match key {
                ConditionKey::ExactStops => conditions.exact_stops = Some(stops(key, value)?),
                ConditionKey::MaxStops => conditions.max_stops = Some(stops(key, value)?),
                ConditionKey::MaxDistance => {
                    conditions.max_distance = Some(Distance::from_units(value))
                }
            }
        }

        conditions.validate()?;
        Ok(conditions)
    }

    /// Returns an error if no condition is set or if both stop conditions are set.
    pub fn validate(&self) -> Result<(), ConditionsError> {
        match self {
            Self {
                exact_stops: None,
                max_stops: None,
                max_distance: None,
            } => Err(ConditionsError::Missing),
            Self {
                exact_stops: Some(_),
                max_stops: Some(_),
                ..
            } => Err(ConditionsError::ConflictingStops),
            _ => Ok(()),
        }
    }
}

fn parse_value(key: ConditionKey, value: &str) -> Result<u64, ConditionsError> {
    let not_a_number = || ConditionsError::NotANumber {
        key,
        value: value.to_string(),
    };

    let parsed = value.trim().parse::<i64>().map_err(|_| not_a_number())?;
    u64::try_from(parsed).map_err(|_| ConditionsError::Negative { key, value: parsed })
}

fn stops(key: ConditionKey, value: u64) -> Result<u32, ConditionsError> {
    u32::try_from(value).map_err(|_| ConditionsError::NotANumber {
        key,
        value: value.to_string(),
    })
}
