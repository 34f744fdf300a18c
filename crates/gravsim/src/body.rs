use nalgebra::{Point2, Vector2};

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Point2<f64>,  // world units
    pub velocity: Vector2<f64>, // world units / time unit
    /// Recomputed from scratch at the start of every step
    pub acceleration: Vector2<f64>,
    pub mass: f64,
    /// Only used for sizing by whoever draws the body
    pub radius: f64,
}

impl Body {
    /// Creates a body with zero acceleration
    ///
    /// Fails with `InvalidParameter` when the mass is not strictly positive,
    /// the radius is negative, or any component is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(Point2::new(5.0, 0.0), Vector2::new(0.0, 14.1), 1.0, 0.05).unwrap();
    /// assert_eq!(body.acceleration, Vector2::zeros());
    ///
    /// assert!(Body::new(Point2::origin(), Vector2::zeros(), 0.0, 0.1).is_err());
    /// ```
    pub fn new(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        radius: f64,
    ) -> Result<Self> {
        let body = Body {
            position,
            velocity,
            acceleration: Vector2::zeros(),
            mass,
            radius,
        };
        body.validate()?;
        Ok(body)
    }

    /// Creates a stationary body
    pub fn at_rest(position: Point2<f64>, mass: f64, radius: f64) -> Result<Self> {
        Self::new(position, Vector2::zeros(), mass, radius)
    }

    /// Checks the constructor invariants on a body that may have been
    /// mutated or deserialized since construction
    pub fn validate(&self) -> Result<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "mass must be finite and positive, got {}",
                self.mass
            )));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(SimError::InvalidParameter(format!(
                "position must be finite, got ({}, {})",
                self.position.x, self.position.y
            )));
        }
        if !(self.velocity.x.is_finite() && self.velocity.y.is_finite()) {
            return Err(SimError::InvalidParameter(format!(
                "velocity must be finite, got ({}, {})",
                self.velocity.x, self.velocity.y
            )));
        }
        Ok(())
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// r × v about the origin (z-component, not multiplied by mass)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }
}
