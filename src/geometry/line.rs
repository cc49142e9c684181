//! Directed line segments and their intersection tests

use crate::geometry::vector::Vector;
use crate::io::configuration::GEOMETRIC_TOLERANCE;
use std::fmt;

/// Axis a segment runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Parallel to the x axis (constant y)
    Horizontal,
    /// Parallel to the y axis (constant x)
    Vertical,
}

impl Orientation {
    /// Coordinate that varies along a segment of this orientation
    pub const fn varying(self, point: Vector) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Coordinate that stays fixed along a segment of this orientation
    pub const fn fixed(self, point: Vector) -> f64 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }

    /// Point with the given varying and fixed coordinates
    pub const fn point(self, varying: f64, fixed: f64) -> Vector {
        match self {
            Self::Horizontal => Vector::new(varying, fixed),
            Self::Vertical => Vector::new(fixed, varying),
        }
    }
}

/// Segment from `origin` to `origin + displacement`
///
/// Points on the segment are `origin + u * displacement` for `u` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub origin: Vector,
    /// Vector from the start point to the end point
    pub displacement: Vector,
}

impl Line {
    /// Create a segment from a start point and a displacement
    pub const fn new(origin: Vector, displacement: Vector) -> Self {
        Self {
            origin,
            displacement,
        }
    }

    /// Create the segment running from `start` to `end`
    pub fn from_endpoints(start: Vector, end: Vector) -> Self {
        Self::new(start, end - start)
    }

    /// End point of the segment
    pub fn end(&self) -> Vector {
        self.origin + self.displacement
    }

    /// Point at parameter `u`; `u` in `[0, 1]` stays on the segment
    pub fn point_at(&self, u: f64) -> Vector {
        self.origin + u * self.displacement
    }

    /// Intersection point of two segments, if any
    ///
    /// Solves `p + t*r = q + u*s` for the infinite lines and accepts the
    /// solution only when both parameters lie in `[-eps, 1 + eps]`.
    /// Parallel segments never intersect, colinear overlapping ones included.
    pub fn intersect(&self, other: &Self) -> Option<Vector> {
        let (p, r) = (self.origin, self.displacement);
        let (q, s) = (other.origin, other.displacement);

        let rxs = r.cross(s);
        if rxs == 0.0 {
            return None;
        }
        let t = (q - p).cross(s) / rxs;
        let u = (q - p).cross(r) / rxs;

        let in_range = |value: f64| {
            (-GEOMETRIC_TOLERANCE..=1.0 + GEOMETRIC_TOLERANCE).contains(&value)
        };
        (in_range(t) && in_range(u)).then(|| p + t * r)
    }

    /// Whether both segments point along the same (or opposite) direction
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.displacement.cross(other.displacement).abs() < GEOMETRIC_TOLERANCE
    }

    /// Whether both segments lie on the same infinite line
    pub fn is_colinear(&self, other: &Self) -> bool {
        self.is_parallel(other)
            && (self.origin - other.origin)
                .cross(self.displacement)
                .abs()
                < GEOMETRIC_TOLERANCE
    }

    /// Axis the segment runs along
    ///
    /// Anything that is not horizontal counts as vertical; every line the
    /// canvas produces is axis aligned.
    pub const fn orientation(&self) -> Orientation {
        if self.displacement.y.abs() < GEOMETRIC_TOLERANCE {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Range covered by the segment along the varying axis of `orientation`
    pub fn span(&self, orientation: Orientation) -> (f64, f64) {
        let a = orientation.varying(self.origin);
        let b = orientation.varying(self.end());
        (a.min(b), a.max(b))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.end())
    }
}
