//! Two-body circular orbit
//!
//! A light body circles a heavy one using the default sub-stepped tick,
//! printing separation and conservation errors once per period.
//!
//! Run with: cargo run --package gravsim --example simple_orbit

use gravsim::config::SimulationConfig;
use gravsim::state::Simulation;
use nalgebra::{Point2, Vector2};

fn main() -> gravsim::Result<()> {
    env_logger::init();

    println!("Two-body orbit with semi-implicit Euler\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig::default();
    let mut simulation = Simulation::new(config)?;

    let heavy_mass = 1000.0;
    let d = 5.0;
    let v_circular = (config.gravitational_constant * heavy_mass / d).sqrt();

    simulation.add_body(Point2::origin(), Vector2::zeros(), heavy_mass, 0.2)?;
    simulation.add_body(Point2::new(d, 0.0), Vector2::new(0.0, v_circular), 1.0, 0.05)?;

    println!("Initial conditions:");
    println!("  Separation: {:.3}", d);
    println!("  Circular speed: {:.4}", v_circular);
    println!(
        "  Tick: {} split into {} steps of {}",
        config.time_step,
        config.sub_steps,
        config.sub_step_dt()
    );

    let initial_energy = simulation.total_energy();
    let initial_l = simulation.total_angular_momentum();

    let period = 2.0 * std::f64::consts::PI * d / v_circular;
    let ticks_per_period = (period / config.time_step).round() as usize;
    let n_periods = 10;

    println!("\nPeriod: {:.4} ({} ticks)\n", period, ticks_per_period);

    for orbit in 1..=n_periods {
        simulation.advance(ticks_per_period)?;

        let bodies = simulation.bodies();
        let separation = bodies[0].distance_to(&bodies[1]);
        let energy_error = ((simulation.total_energy() - initial_energy) / initial_energy).abs();
        let l_error = ((simulation.total_angular_momentum() - initial_l) / initial_l).abs();

        println!(
            "Orbit {:>2}: t={:.3}, r={:.5}, Δr={:.2e}, ΔE={:.2e}, ΔL={:.2e}",
            orbit,
            simulation.time(),
            separation,
            ((separation - d) / d).abs(),
            energy_error,
            l_error
        );
    }

    let momentum = simulation.total_momentum();
    println!("\n{}", "=".repeat(60));
    println!("Total momentum: ({:.6e}, {:.6e})", momentum.x, momentum.y);

    Ok(())
}
