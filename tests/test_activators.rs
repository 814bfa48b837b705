// Tests for the activation functions: reference values and the
// activate/derivative pairing.

use approx::assert_relative_eq;
use mind::Activator;

fn rounded(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[test]
fn test_htan_reference_values() {
    let activator = Activator::HTan;

    assert_eq!(rounded(activator.activate(1.0)), 0.762);
    assert_eq!(rounded(activator.activate(0.2)), 0.197);
    assert_eq!(rounded(activator.derivative(1.0)), 0.420);
    assert_eq!(rounded(activator.derivative(0.2)), 0.961);
}

#[test]
fn test_sigmoid_reference_values() {
    let activator = Activator::Sigmoid;

    assert_eq!(rounded(activator.activate(1.0)), 0.731);
    assert_eq!(rounded(activator.activate(0.2)), 0.550);
    assert_eq!(rounded(activator.derivative(1.0)), 0.197);
    assert_eq!(rounded(activator.derivative(0.2)), 0.248);
}

#[test]
fn test_sine_is_sin_cos() {
    let activator = Activator::Sine;

    for &x in &[-2.0, -0.5, 0.0, 0.3, 1.7] {
        assert_relative_eq!(activator.activate(x), x.sin(), epsilon = 1e-12);
        assert_relative_eq!(activator.derivative(x), x.cos(), epsilon = 1e-12);
    }
}

#[test]
fn test_derivative_matches_finite_difference() {
    // The derivative must be the true mathematical derivative of activate.
    let h = 1e-6;
    for activator in [Activator::Sigmoid, Activator::HTan, Activator::Sine] {
        for &x in &[-1.5, -0.3, 0.0, 0.4, 1.1] {
            let numeric = (activator.activate(x + h) - activator.activate(x - h)) / (2.0 * h);
            assert_relative_eq!(activator.derivative(x), numeric, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_outputs_finite_for_large_inputs() {
    for activator in [Activator::Sigmoid, Activator::HTan, Activator::Sine] {
        for &x in &[-500.0, -50.0, 50.0, 500.0] {
            assert!(activator.activate(x).is_finite());
            assert!(activator.derivative(x).is_finite());
        }
    }
}
