//! Board-agnostic core logic for the tamper display firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Configuration type definitions
//! - Last-tamper timestamp with minute/hour/day carry
//! - Deterministic pseudo-random source standing in for sensor acquisition
//! - Sensor snapshot and the simulation context driven by the main loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod rng;
pub mod sensor;
pub mod simulation;
pub mod time;

pub use config::{LoopConfig, ReadingRanges, SimulationConfig, ValueRange};
pub use rng::Lcg;
pub use sensor::SensorSnapshot;
pub use simulation::{MeterState, Sample, SimulationContext};
pub use time::DateTime;
