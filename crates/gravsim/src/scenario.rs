//! Initial conditions loaded from YAML
//!
//! A scenario is a [`SimulationConfig`] plus the bodies present at `t = 0`.
//! Every field of `config` is optional and falls back to the reference
//! values; body velocity and radius default to zero.
//!
//! ```yaml
//! config:
//!   gravitational_constant: 1.0
//!   softening: 0.1
//!   time_step: 0.01
//!   sub_steps: 4
//!
//! bodies:
//!   - position: [0.0, 0.0]
//!     mass: 1000.0
//!     radius: 0.2
//!   - position: [5.0, 0.0]
//!     velocity: [0.0, 14.142135623730951]
//!     mass: 1.0
//!     radius: 0.05
//! ```

use std::fs;
use std::path::Path;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};

/// Initial state of one body as written in a scenario file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64,
    #[serde(default)]
    pub radius: f64,
}

impl BodySpec {
    pub fn to_body(&self) -> Result<Body> {
        Body::new(
            Point2::new(self.position[0], self.position[1]),
            Vector2::new(self.velocity[0], self.velocity[1]),
            self.mass,
            self.radius,
        )
    }
}

impl From<&Body> for BodySpec {
    fn from(body: &Body) -> Self {
        Self {
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
            mass: body.mass,
            radius: body.radius,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub config: SimulationConfig,
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
}

/// Validated initial conditions
#[derive(Clone, Debug)]
pub struct Scenario {
    pub config: SimulationConfig,
    pub bodies: Vec<Body>,
}

impl Scenario {
    /// The starting layout of the interactive demo: a heavy body at rest at
    /// the origin and two light bodies at x = 5 and x = 3, both launched with
    /// the circular speed for x = 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::scenario::Scenario;
    ///
    /// let scenario = Scenario::reference();
    /// assert_eq!(scenario.bodies.len(), 3);
    /// assert_eq!(scenario.bodies[0].mass, 1000.0);
    /// ```
    pub fn reference() -> Self {
        let config = SimulationConfig::default();
        let v = (config.gravitational_constant * 1000.0 / 5.0).sqrt();

        let bodies = vec![
            Body {
                position: Point2::origin(),
                velocity: Vector2::zeros(),
                acceleration: Vector2::zeros(),
                mass: 1000.0,
                radius: 0.2,
            },
            Body {
                position: Point2::new(5.0, 0.0),
                velocity: Vector2::new(0.0, v),
                acceleration: Vector2::zeros(),
                mass: 1.0,
                radius: 0.05,
            },
            Body {
                position: Point2::new(3.0, 0.0),
                velocity: Vector2::new(0.0, v),
                acceleration: Vector2::zeros(),
                mass: 1.0,
                radius: 0.05,
            },
        ];

        Self { config, bodies }
    }

    /// Validates a deserialized scenario, converting every body spec
    pub fn from_config(scenario: ScenarioConfig) -> Result<Self> {
        scenario.config.validate()?;

        let bodies = scenario
            .bodies
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.to_body().map_err(|e| match e {
                    SimError::InvalidParameter(message) => {
                        SimError::InvalidParameter(format!("scenario body {index}: {message}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config: scenario.config,
            bodies,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let scenario: ScenarioConfig = serde_yaml::from_str(yaml)?;
        let scenario = Self::from_config(scenario)?;

        log::debug!("Loaded scenario with {} bodies", scenario.bodies.len());
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = fs::read_to_string(path.as_ref())?;
        log::info!("Loading scenario '{}'", path.as_ref().display());
        Self::from_yaml_str(&yaml)
    }

    pub fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            config: self.config,
            bodies: self.bodies.iter().map(BodySpec::from).collect(),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_config())?)
    }
}
