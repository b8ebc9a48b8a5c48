//! Geometry kernel for procedurally generated city scenes.
//!
//! Provides 3D [`Point`] and [`Vector`] value types, directed [`LineSeg`]
//! segments with a strict-interior 2D intersection test, and closed
//! [`Polygon`] outlines used as building and prop bounding boxes.

pub mod error;
pub mod geometry;
pub mod math;

#[cfg(test)]
mod test_support;

pub use error::{GeometryError, Result};
pub use geometry::{LineSeg, Point, Polygon, Vector};
pub use math::distance::{distance, Distance};
