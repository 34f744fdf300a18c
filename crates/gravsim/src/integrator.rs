//! Time integration for the body collection
//!
//! The primary integrator is semi-implicit (symplectic) Euler: velocities are
//! kicked with the freshly computed accelerations, then positions drift with
//! the already-updated velocities. That ordering is what keeps orbits from
//! spiralling out the way plain Euler does.

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::forces::{ForceModel, PairwiseGravity};

/// A time integrator over an ordered body collection
///
/// Integrators hold no per-step state. They take the collection as a slice,
/// so a step can mutate every body but can never add, remove or reorder one.
pub trait Integrator: Send + Sync {
    /// Advance every body by one increment `dt`
    ///
    /// Fails without touching any body when `dt` is negative or not finite
    /// (`InvalidArgument`), when the force model's parameters are unusable,
    /// or when a body holds a non-positive mass or a non-finite position or
    /// velocity (`InvalidParameter`).
    fn step(&self, bodies: &mut [Body], dt: f64) -> Result<()>;

    /// Advance the collection by `n_steps` increments of `dt`
    fn integrate(&self, bodies: &mut [Body], dt: f64, n_steps: usize) -> Result<()> {
        for _ in 0..n_steps {
            self.step(bodies, dt)?;
        }
        Ok(())
    }
}

/// Rejects a step before anything is mutated
fn validate_step(force: &dyn ForceModel, bodies: &[Body], dt: f64) -> Result<()> {
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(SimError::InvalidArgument { dt });
    }
    force.validate()?;

    bodies
        .iter()
        .enumerate()
        .try_for_each(|(index, body)| match body.validate() {
            Err(SimError::InvalidParameter(message)) => Err(SimError::InvalidParameter(format!(
                "body {index}: {message}"
            ))),
            other => other,
        })
}

/// Overwrites every body's acceleration with the force model's output
fn update_accelerations(force: &dyn ForceModel, bodies: &mut [Body]) {
    let accelerations = force.accelerations(bodies);

    bodies
        .iter_mut()
        .zip(accelerations)
        .for_each(|(body, accel)| body.acceleration = accel);
}

/// Semi-implicit Euler integrator (1st order, symplectic)
///
/// 1. Accelerations are recomputed from the current positions.
/// 2. For each body in order: `v += a * dt`, then `x += v * dt`.
///
/// With `dt = 0` positions and velocities are left as they were, but
/// accelerations are still refreshed.
///
/// # Examples
///
/// ```
/// use gravsim::body::Body;
/// use gravsim::integrator::{Integrator, SemiImplicitEuler};
/// use nalgebra::{Point2, Vector2};
///
/// let v = (1.0_f64 * 1000.0 / 5.0).sqrt();
/// let mut bodies = vec![
///     Body::new(Point2::new(0.0, 0.0), Vector2::zeros(), 1000.0, 0.2).unwrap(),
///     Body::new(Point2::new(5.0, 0.0), Vector2::new(0.0, v), 1.0, 0.05).unwrap(),
/// ];
///
/// let integrator = SemiImplicitEuler::new(1.0, 0.1);
/// integrator.step(&mut bodies, 0.0025).unwrap();
///
/// assert!(bodies[1].position.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SemiImplicitEuler<F = PairwiseGravity> {
    pub force: F,
}

impl SemiImplicitEuler<PairwiseGravity> {
    /// Integrator driven by softened pairwise gravity
    pub fn new(g: f64, softening: f64) -> Self {
        Self::with_force(PairwiseGravity::new(g, softening))
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::with_force(PairwiseGravity::from_config(config))
    }
}

impl<F: ForceModel> SemiImplicitEuler<F> {
    pub fn with_force(force: F) -> Self {
        Self { force }
    }
}

impl Default for SemiImplicitEuler<PairwiseGravity> {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl<F: ForceModel> Integrator for SemiImplicitEuler<F> {
    fn step(&self, bodies: &mut [Body], dt: f64) -> Result<()> {
        validate_step(&self.force, bodies, dt)?;
        update_accelerations(&self.force, bodies);

        bodies.iter_mut().for_each(|body| {
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        });

        Ok(())
    }
}

/// Explicit Euler integrator (1st order, for comparison only)
///
/// Positions drift with the velocity from before the kick. Orbits gain
/// energy every step, so this exists to show what semi-implicit Euler fixes.
#[derive(Debug, Clone, Copy)]
pub struct ExplicitEuler<F = PairwiseGravity> {
    pub force: F,
}

impl ExplicitEuler<PairwiseGravity> {
    pub fn new(g: f64, softening: f64) -> Self {
        Self::with_force(PairwiseGravity::new(g, softening))
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::with_force(PairwiseGravity::from_config(config))
    }
}

impl<F: ForceModel> ExplicitEuler<F> {
    pub fn with_force(force: F) -> Self {
        Self { force }
    }
}

impl Default for ExplicitEuler<PairwiseGravity> {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl<F: ForceModel> Integrator for ExplicitEuler<F> {
    fn step(&self, bodies: &mut [Body], dt: f64) -> Result<()> {
        validate_step(&self.force, bodies, dt)?;
        update_accelerations(&self.force, bodies);

        bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
            body.velocity += body.acceleration * dt;
        });

        Ok(())
    }
}
