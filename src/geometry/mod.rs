//! Planar geometry primitives
//!
//! Vectors, directed segments and polygons in the normalised unit square.

/// Directed line segments and intersection tests
pub mod line;
/// Polygons with area, edges and splitting
pub mod polygon;
/// Two-dimensional vectors
pub mod vector;

pub use line::{Line, Orientation};
pub use polygon::{EdgeHit, Polygon};
pub use vector::Vector;
