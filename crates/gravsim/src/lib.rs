//! Mutual Newtonian gravity for a collection of 2D point masses
//!
//! The crate has no notion of screens, frames or input. A driver owns a
//! [`state::Simulation`] (or a plain `Vec<body::Body>` plus an
//! [`integrator::Integrator`]), appends bodies between ticks and reads the
//! updated positions back after each one.

pub mod body;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod state;

pub use body::Body;
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use integrator::{Integrator, SemiImplicitEuler};
pub use state::Simulation;

#[cfg(test)]
mod config_test;
