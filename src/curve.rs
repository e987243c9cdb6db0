//! The supported curve families and how each one splits a point sequence into cubic segments.

use nalgebra::{Matrix2x4, Vector2};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::basis::CubicBasis;
use crate::point_set::Point;

/// Curve family drawn through the control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Cubic Hermite spline interpolating every point.
    ///
    /// Tangents are estimated by finite differences.
    #[default]
    Hermite,

    /// A single cubic Bézier segment built from the first four points.
    Bezier,

    /// Uniform cubic B-spline approximating the points with sliding windows of four.
    BSpline,
}

impl CurveKind {
    /// All kinds in menu order
    pub const ALL: [CurveKind; 3] = [CurveKind::Hermite, CurveKind::Bezier, CurveKind::BSpline];

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Hermite => "hermite",
            CurveKind::Bezier => "bezier",
            CurveKind::BSpline => "bspline",
        }
    }

    /// The smallest number of points producing any samples.
    pub fn min_points(self) -> usize {
        match self {
            CurveKind::Hermite => 2,
            CurveKind::Bezier | CurveKind::BSpline => 4,
        }
    }

    /// This family's basis matrix
    pub fn basis(self) -> CubicBasis<f64> {
        match self {
            CurveKind::Hermite => CubicBasis::hermite(),
            CurveKind::Bezier => CubicBasis::bezier(),
            CurveKind::BSpline => CubicBasis::bspline(),
        }
    }

    /// Number of cubic segments drawn through `len` points.
    ///
    /// - Hermite: one per consecutive pair.
    /// - Bézier: a single segment, only the first four points are ever used.
    /// - B-spline: one per window `(i-1, i, i+1, i+2)` with `i` in `1..=len-3`.
    pub fn segment_count(self, len: usize) -> usize {
        if len < 2 || len < self.min_points() {
            return 0;
        }
        match self {
            CurveKind::Hermite => len - 1,
            CurveKind::Bezier => 1,
            CurveKind::BSpline => len - 3,
        }
    }

    /// Builds the geometry matrix of segment `segment`.
    ///
    /// `segment` has to be smaller than [`CurveKind::segment_count`], otherwise this panics.
    pub fn geometry(self, points: &[Point], segment: usize) -> Matrix2x4<f64> {
        match self {
            CurveKind::Hermite => Matrix2x4::from_columns(&[
                points[segment],
                points[segment + 1],
                hermite_tangent(points, segment),
                hermite_tangent(points, segment + 1),
            ]),
            CurveKind::Bezier => Matrix2x4::from_columns(&points[..4]),
            // Window around i = segment + 1
            CurveKind::BSpline => Matrix2x4::from_columns(&points[segment..segment + 4]),
        }
    }
}

/// Estimates the tangent at `points[index]` by finite differences.
///
/// The endpoints use a one sided difference, interior points the centered one:
/// `(points[i+1] - points[i-1]) / 2`.
/// Requires at least two points.
pub fn hermite_tangent(points: &[Point], index: usize) -> Vector2<f64> {
    let last = points.len() - 1;
    if index == 0 {
        points[1] - points[0]
    } else if index == last {
        points[last] - points[last - 1]
    } else {
        (points[index + 1] - points[index - 1]) / 2.0
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`CurveKind`] name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown curve kind `{0}`, expected one of: hermite, bezier, bspline")]
pub struct ParseCurveKindError(pub String);

impl FromStr for CurveKind {
    type Err = ParseCurveKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hermite" => Ok(CurveKind::Hermite),
            "bezier" | "bézier" => Ok(CurveKind::Bezier),
            "bspline" | "b-spline" => Ok(CurveKind::BSpline),
            _ => Err(ParseCurveKindError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_counts() {
        for kind in CurveKind::ALL {
            assert_eq!(kind.segment_count(0), 0);
            assert_eq!(kind.segment_count(1), 0);
        }
        assert_eq!(CurveKind::Hermite.segment_count(2), 1);
        assert_eq!(CurveKind::Hermite.segment_count(7), 6);
        assert_eq!(CurveKind::Bezier.segment_count(3), 0);
        assert_eq!(CurveKind::Bezier.segment_count(4), 1);
        assert_eq!(CurveKind::Bezier.segment_count(9), 1);
        assert_eq!(CurveKind::BSpline.segment_count(3), 0);
        assert_eq!(CurveKind::BSpline.segment_count(4), 1);
        assert_eq!(CurveKind::BSpline.segment_count(9), 6);
    }

    #[test]
    fn tangents() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(15.0, 20.0),
        ];
        assert_eq!(hermite_tangent(&points, 0), Vector2::new(10.0, 0.0));
        assert_eq!(hermite_tangent(&points, 1), Vector2::new(5.0, 5.0));
        assert_eq!(hermite_tangent(&points, 2), Vector2::new(2.5, 10.0));
        assert_eq!(hermite_tangent(&points, 3), Vector2::new(5.0, 10.0));
    }

    #[test]
    fn bspline_windows_slide() {
        let points: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        let geometry = CurveKind::BSpline.geometry(&points, 2);
        assert_eq!(geometry.column(0).x, 2.0);
        assert_eq!(geometry.column(3).x, 5.0);
    }

    #[test]
    fn names_round_trip() {
        for kind in CurveKind::ALL {
            assert_eq!(kind.to_string().parse::<CurveKind>(), Ok(kind));
        }
        assert_eq!("B-Spline".parse::<CurveKind>(), Ok(CurveKind::BSpline));
        assert_eq!(
            "nurbs".parse::<CurveKind>(),
            Err(ParseCurveKindError("nurbs".to_owned()))
        );
        assert_eq!(CurveKind::default(), CurveKind::Hermite);
    }
}
