use serde::{Deserialize, Serialize};

use crate::error::AccelerationError;

/// One acceleration tier: once a spin button has been held for `seconds`,
/// each step moves the value by `increment`.
///
/// Both attributes are finite and non-negative; [`AccelerationEntry::new`]
/// is the only way to build one, so every entry in circulation is valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAccelerationEntry")]
pub struct AccelerationEntry {
    seconds: f64,
    increment: f64,
}

impl AccelerationEntry {
    pub fn new(seconds: f64, increment: f64) -> Result<Self, AccelerationError> {
        Ok(Self {
            seconds: check("seconds", seconds)?,
            increment: check("increment", increment)?,
        })
    }

    /// Hold time after which this tier becomes active.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Step size while this tier is active.
    pub fn increment(&self) -> f64 {
        self.increment
    }
}

fn check(field: &'static str, value: f64) -> Result<f64, AccelerationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AccelerationError::InvalidEntry {
            field,
            value,
        })
    }
}

// unvalidated wire shape
#[derive(Deserialize)]
pub(crate) struct RawAccelerationEntry {
    pub(crate) seconds: f64,
    pub(crate) increment: f64,
}

impl TryFrom<RawAccelerationEntry> for AccelerationEntry {
    type Error = AccelerationError;

    fn try_from(raw: RawAccelerationEntry) -> Result<Self, Self::Error> {
        Self::new(raw.seconds, raw.increment)
    }
}
