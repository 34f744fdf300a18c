//! Direct pairwise gravity (O(N²))

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::forces::ForceModel;
use nalgebra::{Point2, Vector2};

/// Softened Newtonian gravity summed over every unordered pair
///
/// Each pair `(i, j)` with `i < j` is visited exactly once. The pair term
/// `G * r / (|r|² + ε²)^(3/2)` is scaled by `m_j` and added to body `i`, then
/// scaled by `m_i` and subtracted from body `j`.
///
/// Softening keeps the force finite when two bodies coincide: at zero
/// separation the pair term is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseGravity {
    /// Gravitational constant G
    pub g: f64,
    /// Softening length ε (world units)
    pub softening: f64,
}

impl PairwiseGravity {
    pub fn new(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravitational_constant, config.softening)
    }

    /// Acceleration per unit source mass felt at `from` due to a mass at `to`
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::forces::PairwiseGravity;
    /// use nalgebra::Point2;
    ///
    /// let gravity = PairwiseGravity::new(1.0, 0.1);
    /// let a = gravity.pair_term(Point2::origin(), Point2::origin());
    /// assert_eq!(a.magnitude(), 0.0);
    /// ```
    pub fn pair_term(&self, from: Point2<f64>, to: Point2<f64>) -> Vector2<f64> {
        let r = to - from;
        let dist_sq = r.magnitude_squared() + self.softening * self.softening;
        let inv_dist = 1.0 / dist_sq.sqrt();
        let inv_dist3 = inv_dist * inv_dist * inv_dist;

        r * (self.g * inv_dist3)
    }
}

impl Default for PairwiseGravity {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl ForceModel for PairwiseGravity {
    fn accelerations(&self, bodies: &[Body]) -> Vec<Vector2<f64>> {
        let mut accelerations = vec![Vector2::zeros(); bodies.len()];

        for (i, a) in bodies.iter().enumerate() {
            for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                let term = self.pair_term(a.position, b.position);

                accelerations[i] += term * b.mass;
                accelerations[j] -= term * a.mass;
            }
        }

        accelerations
    }

    /// G must be finite and ε finite and strictly positive: with ε = 0 two
    /// coincident bodies give `0 * inf` in the pair term
    fn validate(&self) -> Result<()> {
        if !self.g.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "gravitational constant must be finite, got {}",
                self.g
            )));
        }
        if !(self.softening.is_finite() && self.softening > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "softening must be finite and positive, got {}",
                self.softening
            )));
        }
        Ok(())
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let eps2 = self.softening * self.softening;

        // Each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let dr = a.position - b.position;
                    let r = (dr.magnitude_squared() + eps2).sqrt();
                    -self.g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
