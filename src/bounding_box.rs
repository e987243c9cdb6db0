//! Axis aligned bounding boxes around points and samples.

use nalgebra::{RealField, Vector2};

/// Axis aligned box given by its lowest and highest corner.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,
    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Constructs the smallest box containing all points.
    ///
    /// Returns `None` if there are no points.
    pub fn from_iter<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<BoundingBox<T>> {
        let mut points = points.into_iter();
        let mut min = points.next()?;
        let mut max = min.clone();
        for p in points {
            if min[0] > p[0] {
                min[0] = p[0].clone();
            }
            if min[1] > p[1] {
                min[1] = p[1].clone();
            }
            if max[0] < p[0] {
                max[0] = p[0].clone();
            }
            if max[1] < p[1] {
                max[1] = p[1].clone();
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Checks whether `point` lies inside the box or on its boundary.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min[0] <= point[0]
            && point[0] <= self.max[0]
            && self.min[1] <= point[1]
            && point[1] <= self.max[1]
    }

    /// Grows the box by `margin` in every direction.
    pub fn expand(&self, margin: T) -> BoundingBox<T> {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + &margin,
        }
    }

    /// Width and height
    pub fn size(&self) -> Vector2<T> {
        &self.max - &self.min
    }
}
