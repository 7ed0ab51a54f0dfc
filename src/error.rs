use thiserror::Error;

/// Errors produced by [`OrderedAccelerationList`](crate::OrderedAccelerationList)
/// and [`AccelerationEntry`](crate::AccelerationEntry).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AccelerationError {
    #[error("argument `{name}` must not be absent")]
    InvalidArgument { name: &'static str },

    #[error("index {index} is out of range for {count} entries")]
    OutOfRange { index: usize, count: usize },

    #[error("destination holds {available} entries from the offset, {required} required")]
    CapacityExceeded { required: usize, available: usize },

    #[error("acceleration {field} must be finite and non-negative, got {value}")]
    InvalidEntry { field: &'static str, value: f64 },
}
