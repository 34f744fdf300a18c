//! Force models for the simulation
//!
//! A force model reads positions and masses from the body collection and
//! returns one acceleration per body. It never writes to the bodies itself:
//! the integrator copies the result into `Body::acceleration`, which keeps
//! the read-only snapshot and the write targets in separate buffers.

use crate::body::Body;
use crate::error::Result;
use nalgebra::Vector2;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::PairwiseGravity;

/// A source of acceleration on bodies
///
/// # Examples
///
/// ```
/// use gravsim::body::Body;
/// use gravsim::forces::{ForceModel, PairwiseGravity};
/// use nalgebra::Point2;
///
/// let bodies = vec![
///     Body::at_rest(Point2::new(0.0, 0.0), 1000.0, 0.2).unwrap(),
///     Body::at_rest(Point2::new(5.0, 0.0), 1.0, 0.05).unwrap(),
/// ];
///
/// let gravity = PairwiseGravity::new(1.0, 0.1);
/// let accelerations = gravity.accelerations(&bodies);
///
/// // The light body is pulled back toward the heavy one
/// assert!(accelerations[1].x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration of every body, in collection order
    ///
    /// The returned vector always has `bodies.len()` entries.
    fn accelerations(&self, bodies: &[Body]) -> Vec<Vector2<f64>>;

    /// Potential energy of the configuration
    ///
    /// Default implementation returns 0.0 for models without a potential.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }

    /// Checks the model's own parameters before a step uses them
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
