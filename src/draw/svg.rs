//! Draw a frame in a svg

use crate::draw::DrawFrame;
use crate::point_set::Point;
use crate::session::Frame;
use std::fmt::Write;
use std::marker::PhantomData;

/// Radius of the control point markers
const MARKER_RADIUS: f64 = 3.0;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This toggles between lower and upper case letters for the path commands
/// and decides whether coordinates are written as offsets to the previous point.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the LineTo command
    const L: &'static str;

    /// Whether coordinates are relative to the previous point
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const L: &'static str = "L";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const L: &'static str = "l";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawFrame`] on it.
/// The [`DrawFrame::add_frame`] writes the frame's samples to the string
/// using the path commands used in a svg `<path>`'s d attribute.
pub struct SVGPath<'s, R: CoordRepr> {
    d: &'s mut String,
    current: Option<Point>,
    repr: PhantomData<R>,
}

/// Wrapper for writing frames to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing frames to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(d: &'s mut String) -> Self {
        SVGPath {
            d,
            current: None,
            repr: PhantomData,
        }
    }
}

impl<'s, R: CoordRepr> SVGPath<'s, R> {
    /// Adds an open polyline through `points` as a new subpath.
    pub fn add_polyline<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for (i, point) in points.into_iter().enumerate() {
            let command = if i == 0 { R::M } else { R::L };
            self.command(command, point);
        }
    }

    fn command(&mut self, command: &str, point: Point) {
        let written = match (R::RELATIVE, self.current) {
            (true, Some(current)) => point - current,
            _ => point,
        };
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        let _ = write!(self.d, "{} {},{}", command, written.x, written.y);
        self.current = Some(point);
    }
}

impl<'s, R: CoordRepr> DrawFrame for SVGPath<'s, R> {
    fn add_frame(&mut self, frame: &Frame) {
        self.add_polyline(frame.samples.iter().copied());
    }
}

/// Renders a whole frame as a standalone svg document.
///
/// The control polygon is drawn in red, the curve in blue and every control point gets a black
/// marker. The view box fits the frame with some margin.
pub fn document(frame: &Frame) -> String {
    let (x, y, width, height) = match frame.bounding_box() {
        Some(bb) => {
            let bb = bb.expand(2.0 * MARKER_RADIUS);
            let size = bb.size();
            (bb.min.x, bb.min.y, size.x, size.y)
        }
        None => (0.0, 0.0, 0.0, 0.0),
    };

    let mut polygon = String::new();
    SVGAbsolutePath::from(&mut polygon).add_polyline(frame.points.iter().copied());
    let mut curve = String::new();
    SVGAbsolutePath::from(&mut curve).add_frame(frame);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
        x, y, width, height
    );
    if frame.points.len() > 1 {
        let _ = writeln!(
            svg,
            "<path d=\"{}\" fill=\"none\" stroke=\"red\"/>",
            polygon
        );
    }
    if !curve.is_empty() {
        let _ = writeln!(
            svg,
            "<path d=\"{}\" fill=\"none\" stroke=\"blue\" data-kind=\"{}\"/>",
            curve, frame.kind
        );
    }
    for point in frame.points.iter() {
        let _ = writeln!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"black\"/>",
            point.x, point.y, MARKER_RADIUS
        );
    }
    svg.push_str("</svg>\n");
    svg
}
