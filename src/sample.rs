//! Turns control points into the dense polyline approximating the selected curve.

use nalgebra::Matrix2x4;
use num::ToPrimitive;
use std::iter::FusedIterator;

use crate::basis::CubicBasis;
use crate::curve::CurveKind;
use crate::point_set::Point;

/// Parameter step used when the caller has no preference.
pub const DEFAULT_STEP: f64 = 0.01;

/// Number of samples emitted per segment for a parameter step.
///
/// That is `ceil(1 / step) + 1`: one for `t = 0`, one for every step and a final one at exactly
/// `t = 1`. Returns `None` for steps that aren't positive and finite, or are too small to count.
///
/// A `1 / step` within rounding error of a whole number counts as that number, so `1.0 / 49.0`
/// gives 50 samples and never two at `t = 1`.
pub fn samples_per_segment(step: f64) -> Option<usize> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let steps = 1.0 / step;
    let nearest = steps.round();
    let steps = if (steps - nearest).abs() <= steps * STEP_TOLERANCE {
        nearest
    } else {
        steps.ceil()
    };
    steps.max(1.0).to_usize()?.checked_add(1)
}

// Relative slack for `1 / step` landing next to an integer
const STEP_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Exact number of samples [`evaluate`] yields, without evaluating anything.
pub fn sample_count(len: usize, kind: CurveKind, step: f64) -> usize {
    plan(len, kind, step).map_or(0, |(segments, per_segment)| segments * per_segment)
}

fn plan(len: usize, kind: CurveKind, step: f64) -> Option<(usize, usize)> {
    let per_segment = samples_per_segment(step)?;
    let segments = kind.segment_count(len);
    segments.checked_mul(per_segment)?;
    Some((segments, per_segment))
}

/// Lazily evaluates the curve of `kind` through `points`.
///
/// Segments are emitted back to back. For Hermite curves this means the point shared by two
/// segments is yielded twice.
/// Fewer points than the kind needs produce an empty sequence, as does an invalid `step`.
///
/// The returned iterator only borrows `points`; clone it to restart from the same position.
pub fn evaluate(points: &[Point], kind: CurveKind, step: f64) -> Samples<'_> {
    let (segments, per_segment) = match plan(points.len(), kind, step) {
        Some(plan) => plan,
        None => {
            log::warn!("cannot sample {} curve with step {}", kind, step);
            (0, 1)
        }
    };
    log::trace!(
        "{} curve over {} points: {} segments of {} samples",
        kind,
        points.len(),
        segments,
        per_segment
    );

    Samples {
        points,
        kind,
        basis: kind.basis(),
        step,
        per_segment,
        segments,
        segment: 0,
        index: 0,
        geometry: Matrix2x4::zeros(),
    }
}

/// Iterator over a curve's samples, created by [`evaluate`].
#[derive(Clone, Debug)]
pub struct Samples<'p> {
    points: &'p [Point],
    kind: CurveKind,
    basis: CubicBasis<f64>,
    step: f64,
    per_segment: usize,
    segments: usize,

    // Position of the next sample
    segment: usize,
    index: usize,

    // Geometry of `segment`, valid once its first sample was taken
    geometry: Matrix2x4<f64>,
}

impl<'p> Samples<'p> {
    /// Number of cubic segments in the whole sequence
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Number of samples per segment
    pub fn per_segment(&self) -> usize {
        self.per_segment
    }

    fn remaining(&self) -> usize {
        if self.segment >= self.segments {
            0
        } else {
            (self.segments - self.segment) * self.per_segment - self.index
        }
    }
}

impl<'p> Iterator for Samples<'p> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.segment >= self.segments {
            return None;
        }
        if self.index == 0 {
            self.geometry = self.kind.geometry(self.points, self.segment);
        }

        let t = if self.index + 1 == self.per_segment {
            1.0
        } else {
            (self.index as f64 * self.step).min(1.0)
        };
        let sample = self.basis.evaluate(&self.geometry, t);

        self.index += 1;
        if self.index == self.per_segment {
            self.index = 0;
            self.segment += 1;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'p> ExactSizeIterator for Samples<'p> {}

impl<'p> FusedIterator for Samples<'p> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_segment_counts() {
        assert_eq!(samples_per_segment(0.01), Some(101));
        assert_eq!(samples_per_segment(0.1), Some(11));
        assert_eq!(samples_per_segment(0.3), Some(5));
        assert_eq!(samples_per_segment(1.0), Some(2));
        assert_eq!(samples_per_segment(5.0), Some(2));
        assert_eq!(samples_per_segment(0.0), None);
        assert_eq!(samples_per_segment(-0.1), None);
        assert_eq!(samples_per_segment(f64::NAN), None);
        assert_eq!(samples_per_segment(f64::INFINITY), None);
        assert_eq!(samples_per_segment(f64::MIN_POSITIVE), None);
    }

    #[test]
    fn reciprocal_steps_count_exactly() {
        for n in 1..2000usize {
            assert_eq!(samples_per_segment(1.0 / n as f64), Some(n + 1), "step 1/{}", n);
        }
    }

    #[test]
    fn one_over_49_has_no_repeated_end() {
        let points = [Point::new(0.0, 0.0), Point::new(49.0, 0.0)];
        let samples: Vec<_> = evaluate(&points, CurveKind::Hermite, 1.0 / 49.0).collect();
        assert_eq!(samples.len(), 50);
        assert_eq!(sample_count(points.len(), CurveKind::Hermite, 1.0 / 49.0), 50);
        assert_ne!(samples[48], samples[49]);
        assert_eq!(samples[49], points[1]);
    }

    #[test]
    fn coarse_step_ends_at_one() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let samples: Vec<_> = evaluate(&points, CurveKind::Hermite, 0.3).collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], points[0]);
        assert_eq!(samples[4], points[1]);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let points: Vec<_> = (0..5).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
        let mut samples = evaluate(&points, CurveKind::BSpline, 0.25);
        assert_eq!(samples.segments(), 2);
        assert_eq!(samples.per_segment(), 5);
        assert_eq!(samples.len(), 10);
        samples.by_ref().take(7).for_each(drop);
        assert_eq!(samples.len(), 3);
        samples.by_ref().for_each(drop);
        assert_eq!(samples.len(), 0);
        assert_eq!(samples.next(), None);
    }
}
