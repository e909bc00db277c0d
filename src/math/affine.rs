//! 2D affine transform using column-vector convention.
//!
//! # Convention
//! - Points are **column vectors** on the right: `T * p`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * p` applies B first, then A
//!
//! Outline iteration uses this to map polygon vertices into a backend's
//! device space on the fly.

use std::ops::Mul;

/// 2x3 matrix stored as `data[row][col]`; the implicit third row is `0 0 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform {
    data: [[f64; 3]; 2],
}

impl AffineTransform {
    pub fn new(data: [[f64; 3]; 2]) -> Self {
        AffineTransform { data }
    }

    pub fn identity() -> Self {
        AffineTransform::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    /// Creates a translation transform.
    pub fn translation(x: f64, y: f64) -> Self {
        AffineTransform::new([[1.0, 0.0, x], [0.0, 1.0, y]])
    }

    /// Creates a scale transform.
    pub fn scaling(x: f64, y: f64) -> Self {
        AffineTransform::new([[x, 0.0, 0.0], [0.0, y, 0.0]])
    }

    /// Creates a rotation by `angle` radians about the origin.
    ///
    /// In Y-down screen space a positive angle turns clockwise.
    pub fn rotation(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        AffineTransform::new([[c, -s, 0.0], [s, c, 0.0]])
    }

    /// Returns `self * AffineTransform::translation(x, y)`.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        *self * AffineTransform::translation(x, y)
    }

    /// Maps a point through the transform.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.data;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }

    pub fn determinant(&self) -> f64 {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }

    /// Computes the inverse of the transform, if it exists.
    /// Returns `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<AffineTransform> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let m = &self.data;
        let inv_det = 1.0 / det;
        let a = m[1][1] * inv_det;
        let b = -m[0][1] * inv_det;
        let c = -m[1][0] * inv_det;
        let d = m[0][0] * inv_det;
        Some(AffineTransform::new([
            [a, b, -(a * m[0][2] + b * m[1][2])],
            [c, d, -(c * m[0][2] + d * m[1][2])],
        ]))
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composition: `A * B` applies B first, then A.
impl Mul<AffineTransform> for AffineTransform {
    type Output = AffineTransform;

    fn mul(self, rhs: AffineTransform) -> Self::Output {
        let a = &self.data;
        let b = &rhs.data;
        let mut result = [[0.0f64; 3]; 2];
        for row in 0..2 {
            for col in 0..3 {
                result[row][col] = a[row][0] * b[0][col] + a[row][1] * b[1][col];
            }
            result[row][2] += a[row][2];
        }
        AffineTransform::new(result)
    }
}
