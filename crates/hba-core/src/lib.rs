//! Core library for the harm–benefit assessment calculator.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
