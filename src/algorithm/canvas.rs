//! Canvas state: the line set and the live polygons tiling the unit square

use crate::algorithm::subdivision::SplitPlan;
use crate::geometry::{Line, Polygon, Vector};
use crate::io::configuration::{BORDER_LINE_COUNT, TILING_TOLERANCE};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::render::{Face, Painting, Palette};
use rand::Rng;
use std::collections::BTreeMap;

/// Stable identifier of a live polygon
///
/// Identifiers are handed out in increasing order and never reused, so
/// iterating polygons by id is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonId(pub u64);

/// Planar subdivision of the unit square
///
/// Holds every line added so far (the four border lines first) and the set of
/// live polygons. Live polygons always tile the unit square exactly: a cut
/// replaces a polygon by its two children and nothing else.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    lines: Vec<Line>,
    polygons: BTreeMap<PolygonId, Polygon>,
    next_id: u64,
}

impl Canvas {
    /// Create a canvas holding only the unit-square border
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }

        let corners = [
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 1.0),
            Vector::new(1.0, 1.0),
            Vector::new(1.0, 0.0),
        ];
        let lines = vec![
            Line::new(corners[0], Vector::new(0.0, 1.0)),
            Line::new(corners[1], Vector::new(1.0, 0.0)),
            Line::new(corners[2], Vector::new(0.0, -1.0)),
            Line::new(corners[3], Vector::new(-1.0, 0.0)),
        ];

        let mut canvas = Self {
            width,
            height,
            lines,
            polygons: BTreeMap::new(),
            next_id: 0,
        };
        canvas.insert_polygon(Polygon::new(corners.to_vec())?);
        Ok(canvas)
    }

    /// Render width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Render height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All lines, border first, then cuts in insertion order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Cuts added after the border, in insertion order
    pub fn cuts(&self) -> &[Line] {
        self.lines.get(BORDER_LINE_COUNT..).unwrap_or(&[])
    }

    /// Number of accepted cuts
    pub const fn cut_count(&self) -> usize {
        self.lines.len().saturating_sub(BORDER_LINE_COUNT)
    }

    /// Live polygons keyed by id
    pub const fn polygons(&self) -> &BTreeMap<PolygonId, Polygon> {
        &self.polygons
    }

    /// Sum of all live polygon areas; 1.0 up to rounding
    pub fn total_area(&self) -> f64 {
        self.polygons.values().map(Polygon::area).sum()
    }

    /// Area of the smallest live polygon
    pub fn smallest_area(&self) -> f64 {
        self.polygons
            .values()
            .map(Polygon::area)
            .fold(f64::INFINITY, f64::min)
    }

    /// Commit an accepted cut
    ///
    /// Removes the split polygons, inserts their children and appends the
    /// cut to the line list.
    ///
    /// # Errors
    ///
    /// Returns `Computation` if the plan refers to polygons that are not
    /// live, or if the live polygons stop tiling the unit square
    pub fn apply_cut(&mut self, cut: Line, plan: SplitPlan) -> Result<()> {
        let (removed, added) = plan.into_parts();

        for id in &removed {
            if !self.polygons.contains_key(id) {
                return Err(computation_error(
                    "apply_cut",
                    &format!("polygon {} is not live", id.0),
                ));
            }
        }
        for id in &removed {
            self.polygons.remove(id);
        }
        for polygon in added {
            self.insert_polygon(polygon);
        }
        self.lines.push(cut);

        let total = self.total_area();
        if (total - 1.0).abs() > TILING_TOLERANCE {
            return Err(computation_error(
                "apply_cut",
                &format!("live polygons cover {total} instead of the unit square"),
            ));
        }
        Ok(())
    }

    /// Colour every live polygon and freeze the result
    ///
    /// One colour is drawn per polygon, in id order.
    pub fn finish<R: Rng + ?Sized>(&self, palette: &Palette, rng: &mut R) -> Painting {
        let faces = self
            .polygons
            .values()
            .map(|polygon| Face {
                polygon: polygon.clone(),
                color: palette.sample(rng),
            })
            .collect();

        Painting {
            width: self.width,
            height: self.height,
            faces,
            cuts: self.cuts().to_vec(),
        }
    }

    fn insert_polygon(&mut self, polygon: Polygon) {
        let id = PolygonId(self.next_id);
        self.next_id += 1;
        self.polygons.insert(id, polygon);
    }
}
