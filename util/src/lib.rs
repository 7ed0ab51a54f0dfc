#![deny(unsafe_op_in_unsafe_fn)]

pub mod full_ord;
pub mod insertion_point;
