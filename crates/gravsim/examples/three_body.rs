//! Headless run of the interactive demo's starting layout
//!
//! Loads a scenario file when one is given, otherwise uses the built-in
//! three-body layout. Halfway through, a new body is dropped in the way a
//! mouse drag would spawn one between ticks.
//!
//! Run with: cargo run --package gravsim --example three_body -- [scenario.yaml]

use gravsim::scenario::Scenario;
use gravsim::state::Simulation;
use nalgebra::{Point2, Vector2};

fn print_bodies(simulation: &Simulation) {
    for (i, body) in simulation.bodies().iter().enumerate() {
        println!(
            "  [{}] m={:>8.2} x=({:>8.4}, {:>8.4}) v=({:>8.4}, {:>8.4})",
            i,
            body.mass,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }
}

fn main() -> gravsim::Result<()> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(path)?,
        None => Scenario::reference(),
    };

    let mut simulation = Simulation::from_scenario(scenario)?;
    let ticks = 500;

    println!("t = {:.2}", simulation.time());
    print_bodies(&simulation);

    simulation.advance(ticks / 2)?;
    simulation.add_body(Point2::new(-6.0, 0.0), Vector2::new(0.0, -12.0), 1.0, 0.05)?;
    println!("\nSpawned body at (-6, 0)");

    simulation.advance(ticks - ticks / 2)?;

    println!("\nt = {:.2}", simulation.time());
    print_bodies(&simulation);

    if let Some(com) = simulation.center_of_mass() {
        println!("\nCenter of mass: ({:.4}, {:.4})", com.x, com.y);
    }
    println!("Total energy: {:.6}", simulation.total_energy());

    Ok(())
}
