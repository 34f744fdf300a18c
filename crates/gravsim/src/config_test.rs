use approx::assert_relative_eq;

use crate::config::SimulationConfig;
use crate::error::SimError;

#[test]
fn test_defaults_match_reference_setup() {
    let config = SimulationConfig::default();

    assert_eq!(config.gravitational_constant, 1.0);
    assert_eq!(config.softening, 0.1);
    assert_eq!(config.time_step, 0.01);
    assert_eq!(config.sub_steps, 4);
    assert_relative_eq!(config.sub_step_dt(), 0.0025);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builders() {
    let config = SimulationConfig::default()
        .with_gravitational_constant(39.478417)
        .with_softening(0.01)
        .with_time_step(0.1, 10);

    assert_eq!(config.gravitational_constant, 39.478417);
    assert_eq!(config.softening, 0.01);
    assert_relative_eq!(config.sub_step_dt(), 0.01);
}

#[test]
fn test_rejects_zero_sub_steps() {
    let config = SimulationConfig::default().with_time_step(0.01, 0);

    assert!(matches!(config.validate(), Err(SimError::InvalidParameter(_))));
}

#[test]
fn test_rejects_non_positive_softening() {
    assert!(SimulationConfig::default().with_softening(0.0).validate().is_err());
    assert!(SimulationConfig::default().with_softening(-0.1).validate().is_err());
}

#[test]
fn test_rejects_bad_time_step() {
    assert!(SimulationConfig::default()
        .with_time_step(-0.01, 4)
        .validate()
        .is_err());
    assert!(SimulationConfig::default()
        .with_time_step(f64::NAN, 4)
        .validate()
        .is_err());
}

#[test]
fn test_rejects_non_finite_g() {
    let config = SimulationConfig::default().with_gravitational_constant(f64::INFINITY);

    assert!(config.validate().is_err());
}
