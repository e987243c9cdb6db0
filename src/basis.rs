//! Fixed 4x4 basis matrices of the supported cubic families and the single routine blending
//! them with a segment's geometry.
//!
//! A cubic segment is evaluated as `T · M · G` where `T = [t³, t², t, 1]` is the power row,
//! `M` the family's basis matrix and `G` the segment's geometry matrix. The geometry's four
//! entries are stored as the columns of a [`Matrix2x4`], one row per axis.

use nalgebra::{convert, Matrix2x4, Matrix4, RealField, RowVector4, Vector2};

/// A cubic curve family's blending functions.
///
/// Rows of the matrix correspond to the powers `t³, t², t, 1`,
/// columns to the four geometry entries they weight.
/// Every evaluated point is divided by `divisor` afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBasis<T: RealField> {
    matrix: Matrix4<T>,
    divisor: T,
}

impl<T: RealField> CubicBasis<T> {
    /// Wraps an arbitrary basis matrix.
    pub fn new(matrix: Matrix4<T>, divisor: T) -> Self {
        CubicBasis { matrix, divisor }
    }

    /// Hermite basis, geometry is `[p0, p1, tangent0, tangent1]`.
    pub fn hermite() -> Self {
        Self::from_rows(
            [
                [2, -2, 1, 1],
                [-3, 3, -2, -1],
                [0, 0, 1, 0],
                [1, 0, 0, 0],
            ],
            1,
        )
    }

    /// Cubic Bézier basis, geometry is the four control points.
    pub fn bezier() -> Self {
        Self::from_rows(
            [
                [-1, 3, -3, 1],
                [3, -6, 3, 0],
                [-3, 3, 0, 0],
                [1, 0, 0, 0],
            ],
            1,
        )
    }

    /// Uniform cubic B-spline basis, geometry is a window of four consecutive control points.
    pub fn bspline() -> Self {
        Self::from_rows(
            [
                [-1, 3, -3, 1],
                [3, -6, 3, 0],
                [-3, 0, 3, 0],
                [1, 4, 1, 0],
            ],
            6,
        )
    }

    fn from_rows(rows: [[i8; 4]; 4], divisor: i8) -> Self {
        let mut matrix = Matrix4::zeros();
        for (i, row) in rows.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                matrix[(i, j)] = convert(f64::from(*entry));
            }
        }
        CubicBasis::new(matrix, convert(f64::from(divisor)))
    }

    /// The value every evaluated point is divided by
    pub fn divisor(&self) -> &T {
        &self.divisor
    }

    /// Computes the blending weights `T · M` at `t`.
    ///
    /// The weights are undivided, i.e. for the B-spline basis they sum up to six.
    pub fn weights(&self, t: T) -> RowVector4<T> {
        let powers = power_row(t);
        let mut weights = RowVector4::zeros();
        // Fixed summation order: j ascending, starting from zero
        for i in 0..4 {
            for j in 0..4 {
                weights[i] += powers[j].clone() * self.matrix[(j, i)].clone();
            }
        }
        weights
    }

    /// Evaluates the segment described by `geometry` at `t`.
    ///
    /// Each axis is computed independently as `Σ_i (T · M)_i · G_i` and then divided.
    /// This method assumes `t` to be between 0 and 1 but doesn't check it.
    pub fn evaluate(&self, geometry: &Matrix2x4<T>, t: T) -> Vector2<T> {
        let weights = self.weights(t);
        let mut point = Vector2::zeros();
        for axis in 0..2 {
            for i in 0..4 {
                point[axis] += weights[i].clone() * geometry[(axis, i)].clone();
            }
            point[axis] /= self.divisor.clone();
        }
        point
    }
}

/// The power row `[t³, t², t, 1]`.
pub fn power_row<T: RealField>(t: T) -> RowVector4<T> {
    let square = t.clone() * t.clone();
    let cube = square.clone() * t.clone();
    RowVector4::new(cube, square, t, T::one())
}
