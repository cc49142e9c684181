//! Finished paintings and their vector rendering

/// Face colours and the cumulative colour table
pub mod color;
/// SVG markup emitter
pub mod svg;

pub use color::{Color, Palette};
pub use svg::render_svg;

use crate::geometry::{Line, Polygon};

/// A live polygon paired with its fill colour
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Region covered by the face in normalised coordinates
    pub polygon: Polygon,
    /// Fill colour
    pub color: Color,
}

/// Read-only result of a fully grown canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Painting {
    /// Render width in pixels
    pub width: u32,
    /// Render height in pixels
    pub height: u32,
    /// Coloured faces tiling the unit square
    pub faces: Vec<Face>,
    /// Interior cut lines in insertion order, border excluded
    pub cuts: Vec<Line>,
}

impl Painting {
    /// Scale a normalised x coordinate to pixels
    pub fn scale_x(&self, x: f64) -> f64 {
        x * f64::from(self.width)
    }

    /// Scale a normalised y coordinate to pixels
    pub fn scale_y(&self, y: f64) -> f64 {
        y * f64::from(self.height)
    }
}
