//! Shared test infrastructure for oklab-palette integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use oklab_palette::{LinearColor, PerceptualColor};

// ============================================================================
// Fixtures
// ============================================================================

/// Linear colors spread over the unit cube, including its corners.
pub fn unit_cube_samples() -> Vec<LinearColor> {
    let steps = [0.0, 0.05, 0.25, 0.5, 0.73, 0.9, 1.0];
    let mut samples = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                samples.push(LinearColor::new(r, g, b));
            }
        }
    }
    samples
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two linear colors with a per-channel absolute tolerance
pub fn linear_equal_epsilon(a: LinearColor, b: LinearColor, epsilon: f64) -> bool {
    (a.r - b.r).abs() < epsilon && (a.g - b.g).abs() < epsilon && (a.b - b.b).abs() < epsilon
}

/// Compare two Oklab colors with a per-component absolute tolerance
pub fn perceptual_equal_epsilon(a: PerceptualColor, b: PerceptualColor, epsilon: f64) -> bool {
    (a.l - b.l).abs() < epsilon && (a.a - b.a).abs() < epsilon && (a.b - b.b).abs() < epsilon
}

/// Compare two Oklab colors with the default tolerance
pub fn perceptual_equal(a: PerceptualColor, b: PerceptualColor) -> bool {
    perceptual_equal_epsilon(a, b, 1e-12)
}

/// Difference between two angles, folded into -π..=π
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let d = (a - b).rem_euclid(tau);
    if d > std::f64::consts::PI { d - tau } else { d }
}
