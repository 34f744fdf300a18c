use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::forces::{ForceModel, PairwiseGravity};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::scenario::Scenario;
use nalgebra::{Point2, Vector2};

/// A body collection together with the parameters that drive it
///
/// This is what an interactive driver holds: it appends bodies between
/// ticks, calls [`Simulation::tick`] once per logical tick and reads
/// [`Simulation::bodies`] back for drawing.
#[derive(Debug, Clone)]
pub struct Simulation {
    time: f64,
    config: SimulationConfig,
    integrator: SemiImplicitEuler,
    bodies: Vec<Body>,
}

impl Simulation {
    /// Creates an empty simulation
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::config::SimulationConfig;
    /// use gravsim::state::Simulation;
    ///
    /// let simulation = Simulation::new(SimulationConfig::default()).unwrap();
    ///
    /// assert_eq!(simulation.body_count(), 0);
    /// assert_eq!(simulation.time(), 0.0);
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            time: 0.0,
            config,
            integrator: SemiImplicitEuler::from_config(&config),
            bodies: Vec::new(),
        })
    }

    /// Creates a simulation holding every body of a scenario, in order
    pub fn from_scenario(scenario: Scenario) -> Result<Self> {
        let mut simulation = Self::new(scenario.config)?;
        for body in scenario.bodies {
            simulation.push(body)?;
        }
        Ok(simulation)
    }

    /// Simulation time in time units
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Appends a new body and returns its index in the collection
    ///
    /// # Examples
    ///
    /// ```
    /// use gravsim::config::SimulationConfig;
    /// use gravsim::state::Simulation;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
    /// let index = simulation
    ///     .add_body(Point2::new(5.0, 0.0), Vector2::new(0.0, 14.1), 1.0, 0.05)
    ///     .unwrap();
    ///
    /// assert_eq!(index, 0);
    /// assert_eq!(simulation.body_count(), 1);
    /// ```
    pub fn add_body(
        &mut self,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        radius: f64,
    ) -> Result<usize> {
        self.push(Body::new(position, velocity, mass, radius)?)
    }

    /// Appends an already constructed body and returns its index
    pub fn push(&mut self, body: Body) -> Result<usize> {
        body.validate()?;
        self.bodies.push(body);

        let index = self.bodies.len() - 1;
        log::debug!(
            "Added body {index}: m = {}, x = ({:.3}, {:.3})",
            body.mass,
            body.position.x,
            body.position.y
        );
        Ok(index)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the bodies themselves, never to the collection
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advances every body by one integrator step of `dt`
    pub fn step(&mut self, dt: f64) -> Result<()> {
        self.integrator.step(&mut self.bodies, dt)?;
        self.time += dt;
        Ok(())
    }

    /// Advances by one logical tick: `sub_steps` steps of
    /// `time_step / sub_steps` each
    ///
    /// Pacing is fixed; elapsed wall-clock time plays no part.
    pub fn tick(&mut self) -> Result<()> {
        let dt = self.config.sub_step_dt();
        for _ in 0..self.config.sub_steps {
            self.step(dt)?;
        }
        log::trace!("t = {:.4}, {} bodies", self.time, self.bodies.len());
        Ok(())
    }

    /// Advances by `ticks` logical ticks and returns the final time
    pub fn advance(&mut self, ticks: usize) -> Result<f64> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(self.time)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all bodies
    ///
    /// Pairwise forces cancel, so this only drifts by rounding error
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    /// Mass-weighted mean position, `None` for an empty collection
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if self.bodies.is_empty() || total <= 0.0 {
            return None;
        }

        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(Point2::from(weighted / total))
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Softened gravitational potential energy
    pub fn potential_energy(&self) -> f64 {
        PairwiseGravity::from_config(&self.config).potential_energy(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
