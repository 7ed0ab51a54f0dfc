#![deny(unsafe_op_in_unsafe_fn)]

//! Sorted acceleration tiers for numeric up/down spinner controls.
//!
//! A spinner that is held down speeds up over time: after `seconds` of
//! holding, each step moves by `increment`. [`OrderedAccelerationList`] keeps
//! those tiers ordered by their threshold so the owning control can find the
//! active one with a single pass.

pub mod acceleration;
pub mod collection;
pub mod config;
pub mod error;

pub use acceleration::AccelerationEntry;
pub use collection::OrderedAccelerationList;
pub use config::{AccelerationConfig, ConfigError};
pub use error::AccelerationError;
