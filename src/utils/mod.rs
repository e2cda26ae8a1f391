//! Supporting utilities.

pub mod progress;
