//! The grid: bounds, the safety rule, and its configuration.

pub mod bounds;
pub mod config;
pub mod safety;
