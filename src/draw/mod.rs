//! Defines and implements [`DrawFrame::add_frame`] on various drawing contexts.
//!
//! The kernel only produces ordered coordinates. Turning them into pixels, paths or anything else
//! is up to the drawing context.
use crate::session::Frame;

/// Hand a rendered [`Frame`] to a drawing context.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw frames using svg paths
pub trait DrawFrame {
    /// Add a frame's curve to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the samples to be drawn instead of actually drawing them.
    fn add_frame(&mut self, frame: &Frame);
}

impl DrawFrame for Vec<Frame> {
    fn add_frame(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
