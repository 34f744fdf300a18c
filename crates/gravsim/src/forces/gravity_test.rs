use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::forces::gravity::PairwiseGravity;
use crate::forces::ForceModel;

fn at(x: f64, y: f64, mass: f64) -> Body {
    Body::at_rest(Point2::new(x, y), mass, 0.05).unwrap()
}

#[test]
fn test_no_bodies_no_accelerations() {
    let gravity = PairwiseGravity::new(1.0, 0.1);

    assert!(gravity.accelerations(&[]).is_empty());
}

#[test]
fn test_single_body_feels_nothing() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let accelerations = gravity.accelerations(&[at(3.0, -2.0, 50.0)]);

    assert_eq!(accelerations, vec![Vector2::zeros()]);
}

#[test]
fn test_attraction_points_at_other_body() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let bodies = [at(0.0, 0.0, 1000.0), at(5.0, 0.0, 1.0)];

    let accelerations = gravity.accelerations(&bodies);

    // Heavy body pulled toward +x, light body toward -x
    assert!(accelerations[0].x > 0.0);
    assert!(accelerations[1].x < 0.0);
    assert_eq!(accelerations[0].y, 0.0);
    assert_eq!(accelerations[1].y, 0.0);
}

#[test]
fn test_pair_contributions_are_equal_and_opposite() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let bodies = [at(0.3, -1.2, 7.0), at(2.5, 0.4, 3.0)];

    let accelerations = gravity.accelerations(&bodies);
    let term = gravity.pair_term(bodies[0].position, bodies[1].position);

    assert_eq!(accelerations[0], term * bodies[1].mass);
    assert_eq!(accelerations[1], -(term * bodies[0].mass));
}

#[test]
fn test_equal_masses_mirror_exactly() {
    let gravity = PairwiseGravity::new(2.5, 0.1);
    let bodies = [at(-1.0, 0.5, 4.0), at(1.5, -0.25, 4.0)];

    let accelerations = gravity.accelerations(&bodies);

    assert_eq!(accelerations[0], -accelerations[1]);
}

#[test]
fn test_net_force_vanishes() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let bodies = [
        at(0.0, 0.0, 1000.0),
        at(5.0, 0.0, 1.0),
        at(3.0, 0.0, 1.0),
        at(-2.0, 4.0, 12.5),
    ];

    let net = gravity
        .accelerations(&bodies)
        .iter()
        .zip(bodies.iter())
        .map(|(a, b)| a * b.mass)
        .fold(Vector2::zeros(), |acc, f| acc + f);

    assert_abs_diff_eq!(net.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(net.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_inverse_square_far_field() {
    // Far from the softening scale the law is plain G*m/r²
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let bodies = [at(0.0, 0.0, 1000.0), at(100.0, 0.0, 1.0)];

    let accelerations = gravity.accelerations(&bodies);

    let expected = 1000.0 / 100.0_f64.powi(2);
    assert_relative_eq!(accelerations[1].magnitude(), expected, max_relative = 1e-5);
}

#[test]
fn test_coincident_bodies_stay_finite() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let bodies = [at(1.0, 1.0, 1000.0), at(1.0, 1.0, 1.0)];

    let accelerations = gravity.accelerations(&bodies);

    for a in &accelerations {
        assert!(a.x.is_finite() && a.y.is_finite());
        assert_eq!(a.magnitude(), 0.0);
    }
}

#[test]
fn test_softening_bounds_magnitude() {
    let g = 1.0;
    let eps = 0.1;
    let mass = 1000.0;
    let gravity = PairwiseGravity::new(g, eps);
    let bound = g * mass / (eps * eps);

    let peak = (0..=400)
        .map(|k| {
            let d = k as f64 * 0.001;
            let bodies = [at(0.0, 0.0, 1.0), at(d, 0.0, mass)];
            gravity.accelerations(&bodies)[0].magnitude()
        })
        .fold(0.0_f64, f64::max);

    assert!(peak.is_finite());
    assert!(peak <= bound);

    // Maximum sits at d = eps / sqrt(2), with value 2 / (3 sqrt 3) * G m / eps²
    let expected_peak = 2.0 / (3.0 * 3.0_f64.sqrt()) * bound;
    assert_relative_eq!(peak, expected_peak, max_relative = 1e-3);
}

#[test]
fn test_softening_reduces_force() {
    let hard = PairwiseGravity::new(1.0, 1e-6);
    let soft = PairwiseGravity::new(1.0, 0.1);
    let bodies = [at(0.0, 0.0, 1.0), at(0.05, 0.0, 1.0)];

    let a_hard = hard.accelerations(&bodies)[0].magnitude();
    let a_soft = soft.accelerations(&bodies)[0].magnitude();

    assert!(a_soft < a_hard);
}

#[test]
fn test_potential_energy_pair() {
    // sqrt(4² + 3²) = 5
    let gravity = PairwiseGravity::new(1.0, 3.0);
    let bodies = [at(0.0, 0.0, 2.0), at(4.0, 0.0, 3.0)];

    assert_relative_eq!(gravity.potential_energy(&bodies), -1.2);
}

#[test]
fn test_potential_energy_more_bodies_more_negative() {
    let gravity = PairwiseGravity::new(1.0, 0.1);
    let two = [at(0.0, 0.0, 1000.0), at(5.0, 0.0, 1.0)];
    let three = [at(0.0, 0.0, 1000.0), at(5.0, 0.0, 1.0), at(3.0, 0.0, 1.0)];

    let pe_two = gravity.potential_energy(&two);
    let pe_three = gravity.potential_energy(&three);

    assert!(pe_two < 0.0);
    assert!(pe_three < pe_two);
}

#[test]
fn test_validate_parameters() {
    assert!(PairwiseGravity::default().validate().is_ok());
    assert!(PairwiseGravity::new(-1.0, 0.1).validate().is_ok());

    assert!(PairwiseGravity::new(f64::NAN, 0.1).validate().is_err());
    assert!(PairwiseGravity::new(1.0, 0.0).validate().is_err());
    assert!(PairwiseGravity::new(1.0, -0.1).validate().is_err());
    assert!(PairwiseGravity::new(1.0, f64::INFINITY).validate().is_err());
}
