//! 3x3 matrix transforms for RGB↔XYZ conversions
//!
//! The sRGB matrices are published constants, written out to 17
//! significant digits. The inverse is a literal as well; it is never
//! computed at runtime.

use std::ops::Mul;

use multiversion::multiversion;

/// A fixed 3x3 matrix applied to a color triplet
///
/// Stored in row-major order: `rows[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    rows: [[f64; 3]; 3],
}

impl Transform {
    /// Create a transform from three row vectors
    #[inline]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The identity transform
    #[inline]
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Row vectors of this transform
    #[inline]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Apply this transform to a triplet
    ///
    /// Returns M × v. NaN and infinities propagate.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        multiply_vec3(&self.rows, v)
    }

    /// Matrix product, self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[i][0] * other.rows[0][j]
                    + self.rows[i][1] * other.rows[1][j]
                    + self.rows[i][2] * other.rows[2][j];
            }
        }
        Self { rows }
    }

    /// Check if this transform is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Transform {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.apply(rhs)
    }
}

/// Multiply a 3x3 row-major matrix by a 3-element vector
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn multiply_vec3(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        matrix[0][0] * v[0] + matrix[0][1] * v[1] + matrix[0][2] * v[2],
        matrix[1][0] * v[0] + matrix[1][1] * v[1] + matrix[1][2] * v[2],
        matrix[2][0] * v[0] + matrix[2][1] * v[1] + matrix[2][2] * v[2],
    ]
}

/// Linear sRGB to XYZ (IEC 61966-2-1 primaries, D65 white)
pub const SRGB_TO_XYZ: Transform = Transform::new([
    [0.41239079926595948, 0.35758433938387796, 0.18048078840183429],
    [0.21263900587151036, 0.71516867876775593, 0.072192315360733715],
    [0.019330818715591851, 0.11919477979462599, 0.95053215224966058],
]);

/// XYZ to linear sRGB
///
/// Independently specified inverse of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: Transform = Transform::new([
    [3.2409699419045213, -1.5373831775700935, -0.49861076029300328],
    [-0.96924363628087983, 1.8759675015077207, 0.041555057407175612],
    [0.055630079696993608, -0.20397695888897656, 1.0569715142428786],
]);
