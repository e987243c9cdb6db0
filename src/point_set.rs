//! The ordered set of control points edited by the user.

use nalgebra::Vector2;
use smallvec::SmallVec;
use std::ops::Deref;

/// A 2D control point or curve sample.
pub type Point = Vector2<f64>;

type PointsInternal = SmallVec<[Point; 8]>;

/// Ordered collection of control points.
///
/// Insertion order is the order the curves traverse the points in.
/// Coinciding points are kept; nothing is ever deduplicated implicitly.
///
/// Read access derefs to a slice, so `len`, `get`, `iter` and friends are available directly.
/// Mutation only happens through the editing operations below, which relocate points in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet(PointsInternal);

impl Deref for PointSet {
    type Target = [Point];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PointSet {
    /// Creates an empty set
    pub fn new() -> Self {
        PointSet(SmallVec::new())
    }

    /// Appends a point at the end.
    pub fn add(&mut self, point: Point) {
        self.0.push(point);
    }

    /// Returns the index of the first point (in insertion order) closer than `radius` to `target`.
    ///
    /// This is the first hit, not the *nearest* point.
    /// A negative or NaN `radius` never matches.
    pub fn hit_test(&self, target: Point, radius: f64) -> Option<usize> {
        self.0.iter().position(|point| within(point, &target, radius))
    }

    /// Picks up the first point within `radius` of `from` and relocates it to `to`.
    ///
    /// Returns `false` and leaves the set untouched if no point was hit.
    pub fn move_near(&mut self, from: Point, to: Point, radius: f64) -> bool {
        match self.hit_test(from, radius) {
            Some(index) => {
                self.0[index] = to;
                true
            }
            None => false,
        }
    }

    /// Relocates the first point within `radius` of `target` onto `target`.
    pub fn move_nearest(&mut self, target: Point, radius: f64) -> bool {
        self.move_near(target, target, radius)
    }

    /// Removes *every* point within `radius` of `target` and returns how many were removed.
    pub fn remove_near(&mut self, target: Point, radius: f64) -> usize {
        let before = self.0.len();
        self.0.retain(|point| !within(point, &target, radius));
        before - self.0.len()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over the edges of the polyline connecting consecutive points.
    pub fn control_polygon(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        polygon_edges(&self.0)
    }
}

/// Edges of the polyline through `points`, in order.
pub fn polygon_edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points.windows(2).map(|pair| (pair[0], pair[1]))
}

fn within(point: &Point, target: &Point, radius: f64) -> bool {
    (point - target).norm() < radius
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        PointSet(SmallVec::from_vec(points))
    }
}

impl From<&[Point]> for PointSet {
    fn from(points: &[Point]) -> Self {
        PointSet(SmallVec::from_slice(points))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet(iter.into_iter().collect())
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
