//! Simulation parameters
//!
//! Everything that the reference driver kept as compile-time constants lives
//! in [`SimulationConfig`], so two simulations in the same process can run
//! with different constants.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Gravitational constant used by the reference setup (code units)
pub const DEFAULT_G: f64 = 1.0;
/// Softening length used by the reference setup (world units)
pub const DEFAULT_SOFTENING: f64 = 0.1;
/// Logical tick length used by the reference setup (time units)
pub const DEFAULT_TIME_STEP: f64 = 0.01;
pub const DEFAULT_SUB_STEPS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravitational constant G
    pub gravitational_constant: f64,
    /// Softening length ε, added as ε² to every squared separation
    pub softening: f64,
    /// Time advanced by one call to `Simulation::tick`
    pub time_step: f64,
    /// Number of equal integrator steps a tick is split into
    pub sub_steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_G,
            softening: DEFAULT_SOFTENING,
            time_step: DEFAULT_TIME_STEP,
            sub_steps: DEFAULT_SUB_STEPS,
        }
    }
}

impl SimulationConfig {
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_time_step(mut self, time_step: f64, sub_steps: u32) -> Self {
        self.time_step = time_step;
        self.sub_steps = sub_steps;
        self
    }

    /// Length of one integrator step inside a tick
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::config::SimulationConfig;
    ///
    /// let config = SimulationConfig::default();
    /// assert_eq!(config.sub_step_dt(), 0.0025);
    /// ```
    pub fn sub_step_dt(&self) -> f64 {
        self.time_step / self.sub_steps as f64
    }

    pub fn validate(&self) -> Result<()> {
        let problem = if !self.gravitational_constant.is_finite() {
            Some(format!(
                "gravitational constant must be finite, got {}",
                self.gravitational_constant
            ))
        } else if !(self.softening.is_finite() && self.softening > 0.0) {
            Some(format!(
                "softening must be finite and positive, got {}",
                self.softening
            ))
        } else if !(self.time_step.is_finite() && self.time_step >= 0.0) {
            Some(format!(
                "time step must be finite and non-negative, got {}",
                self.time_step
            ))
        } else if self.sub_steps == 0 {
            Some("sub-step count must be at least 1".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => {
                log::warn!("Rejected simulation config: {message}");
                Err(SimError::InvalidParameter(message))
            }
            None => Ok(()),
        }
    }
}
