//! Command implementations

pub mod flaky;
pub mod sample;
