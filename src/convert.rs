//! Oklab ⇄ linear RGB conversion math.
//!
//! Pure, stateless functions. The forward path mixes linear channels into a
//! cone-like `lms` response (M1), applies a signed cube root, then projects to
//! `L, a, b` (M2). The reverse path inverts each stage.
//!
//! Nothing here clamps: out-of-gamut inputs yield out-of-gamut outputs.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use crate::colors::{LinearColor, PerceptualColor};

type Mat3 = [[f64; 3]; 3];

/// Linear RGB to `lms`.
#[allow(clippy::excessive_precision)]
const M1: Mat3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted `lms` to `L, a, b`.
#[allow(clippy::excessive_precision)]
const M2: Mat3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

// Inverses are derived from the forward matrices rather than taken from
// rounded published constants, so both directions agree to f64 rounding.
const M1_INV: Mat3 = invert(&M1);
const M2_INV: Mat3 = invert(&M2);

const fn invert(m: &Mat3) -> Mat3 {
    let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
    let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
    let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
    let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
    let inv_det = 1.0 / det;

    [
        [
            c00 * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
        ],
        [
            c01 * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
        ],
        [
            c02 * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ],
    ]
}

#[inline]
fn mul(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Converts a linear color to Oklab.
///
/// Negative `lms` responses go through a signed cube root, so any finite
/// input produces a finite result.
pub fn to_perceptual(color: LinearColor) -> PerceptualColor {
    let [l, m, s] = mul(&M1, [color.r, color.g, color.b]);
    let [l, a, b] = mul(&M2, [libm::cbrt(l), libm::cbrt(m), libm::cbrt(s)]);
    PerceptualColor::new(l, a, b)
}

/// Converts an Oklab color back to linear RGB.
pub fn to_linear(color: PerceptualColor) -> LinearColor {
    let [l, m, s] = mul(&M2_INV, [color.l, color.a, color.b]);
    let [r, g, b] = mul(&M1_INV, [l * l * l, m * m * m, s * s * s]);
    LinearColor::new(r, g, b)
}
