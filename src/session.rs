//! Editing session driven by explicit commands.
//!
//! Input handling translates raw pointer events into [`EditCommand`]s, the session applies them
//! one at a time and a renderer pulls a [`Frame`] after every change.

use crate::bounding_box::BoundingBox;
use crate::config::EditorConfig;
use crate::curve::CurveKind;
use crate::point_set::{polygon_edges, Point, PointSet};
use crate::sample::{evaluate, Samples};

/// A single edit of the session's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditCommand {
    /// Append a point
    PointAdded(Point),

    /// Relocate the first point within the pick radius of `from` to `to`
    PointDragged {
        /// Where the point was picked up
        from: Point,
        /// Where it is dropped
        to: Point,
    },

    /// Remove every point within the pick radius
    PointDeleteNear(Point),

    /// Remove all points
    Cleared,

    /// Draw a different curve family from the next frame on
    CurveKindSelected(CurveKind),
}

/// Owns the control points and the selected curve family.
#[derive(Clone, Debug, Default)]
pub struct EditSession {
    points: PointSet,
    kind: CurveKind,
    config: EditorConfig,
}

impl EditSession {
    /// Starts an empty session drawing Hermite curves
    pub fn new() -> Self {
        EditSession::default()
    }

    /// Starts an empty session with custom settings
    pub fn with_config(config: EditorConfig) -> Self {
        EditSession {
            config,
            ..EditSession::default()
        }
    }

    /// The control points
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The selected curve family
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The session's settings
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Applies a command and reports whether anything visible changed.
    pub fn apply(&mut self, command: EditCommand) -> bool {
        let radius = self.config.pick_radius();
        match command {
            EditCommand::PointAdded(point) => {
                self.points.add(point);
                log::debug!("added point ({}, {}), {} total", point.x, point.y, self.points.len());
                true
            }
            EditCommand::PointDragged { from, to } => {
                let moved = self.points.move_near(from, to, radius);
                if moved {
                    log::trace!("dragged point to ({}, {})", to.x, to.y);
                }
                moved
            }
            EditCommand::PointDeleteNear(target) => {
                let removed = self.points.remove_near(target, radius);
                if removed > 0 {
                    log::debug!("removed {} point(s) near ({}, {})", removed, target.x, target.y);
                }
                removed > 0
            }
            EditCommand::Cleared => {
                let changed = !self.points.is_empty();
                self.points.clear();
                log::debug!("cleared points");
                changed
            }
            EditCommand::CurveKindSelected(kind) => {
                let changed = self.kind != kind;
                if changed {
                    log::debug!("switched curve from {} to {}", self.kind, kind);
                }
                self.kind = kind;
                changed
            }
        }
    }

    /// Applies commands in order, returns whether any of them changed something.
    pub fn apply_all<I: IntoIterator<Item = EditCommand>>(&mut self, commands: I) -> bool {
        commands
            .into_iter()
            .fold(false, |changed, command| self.apply(command) || changed)
    }

    /// Lazily samples the current curve.
    pub fn samples(&self) -> Samples<'_> {
        evaluate(&self.points, self.kind, self.config.step())
    }

    /// Snapshot of everything a renderer needs for one frame.
    pub fn frame(&self) -> Frame {
        Frame {
            kind: self.kind,
            points: self.points.to_vec(),
            samples: self.samples().collect(),
        }
    }
}

/// The result of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Curve family the samples belong to
    pub kind: CurveKind,
    /// Control points for drawing markers and the control polygon
    pub points: Vec<Point>,
    /// Ordered curve samples
    pub samples: Vec<Point>,
}

impl Frame {
    /// Edges of the control polygon
    pub fn control_polygon(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        polygon_edges(&self.points)
    }

    /// Box around every control point and sample, `None` for an empty frame.
    pub fn bounding_box(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_iter(self.points.iter().chain(self.samples.iter()).copied())
    }
}
