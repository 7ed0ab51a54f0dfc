use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::acceleration::{AccelerationEntry, RawAccelerationEntry};
use crate::collection::OrderedAccelerationList;
use crate::error::AccelerationError;

#[cfg(test)]
mod test;

/// Acceleration settings for a spinner, as they appear in a JSON settings file.
///
/// ```json
/// { "accelerations": [{ "seconds": 2, "increment": 5 }, { "seconds": 6, "increment": 50 }] }
/// ```
///
/// Tiers may be listed in any order; [`into_list`](Self::into_list) sorts them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationConfig {
    #[serde(default)]
    pub accelerations: Vec<AccelerationEntry>,
}

// parsed before any entry is validated
#[derive(Deserialize)]
struct RawAccelerationConfig {
    #[serde(default)]
    accelerations: Vec<RawAccelerationEntry>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed acceleration config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Entry(#[from] AccelerationError),
}

impl AccelerationConfig {
    /// Parse a JSON settings document.
    ///
    /// Syntax and shape problems are [`ConfigError::Parse`]; a well-formed tier
    /// with a negative or non-finite value is [`ConfigError::Entry`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawAccelerationConfig = serde_json::from_str(json)?;
        let config = Self::from_pairs(
            raw.accelerations
                .into_iter()
                .map(|entry| (entry.seconds, entry.increment)),
        )?;
        tracing::debug!(tiers = config.accelerations.len(), "loaded acceleration config");
        Ok(config)
    }

    /// Build a config from `(seconds, increment)` pairs, validating each one.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let accelerations = pairs
            .into_iter()
            .map(|(seconds, increment)| AccelerationEntry::new(seconds, increment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            accelerations,
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_list(self) -> OrderedAccelerationList {
        let mut list = OrderedAccelerationList::new();
        list.add_range(self.accelerations);
        list
    }
}

impl From<&OrderedAccelerationList> for AccelerationConfig {
    fn from(list: &OrderedAccelerationList) -> Self {
        Self {
            accelerations: list.iter().copied().collect(),
        }
    }
}
