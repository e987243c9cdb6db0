#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod basis;
pub mod bounding_box;
pub mod config;
pub mod curve;
pub mod draw;
pub mod point_set;
pub mod sample;
pub mod session;

pub use crate::basis::CubicBasis;
pub use crate::config::{ConfigError, EditorConfig};
pub use crate::curve::CurveKind;
pub use crate::point_set::{Point, PointSet};
pub use crate::sample::{evaluate, Samples, DEFAULT_STEP};
pub use crate::session::{EditCommand, EditSession, Frame};
