//! Simple polygons with shoelace area and two-way splitting

use crate::geometry::line::Line;
use crate::geometry::vector::Vector;
use crate::io::error::{AlgorithmError, Result};

/// A point where a cut crosses one edge of a polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Index into the polygon's edge list
    pub edge: usize,
    /// Intersection point on that edge
    pub point: Vector,
}

/// Closed polygon defined by an ordered vertex loop
///
/// Area and edges are derived once at construction; polygons are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector>,
    edges: Vec<Line>,
    area: f64,
}

impl Polygon {
    /// Create a polygon from its vertices in loop order
    ///
    /// The last vertex connects back to the first.
    ///
    /// # Errors
    ///
    /// Returns `DegeneratePolygon` if fewer than three vertices are supplied
    pub fn new(vertices: Vec<Vector>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(AlgorithmError::DegeneratePolygon {
                vertex_count: vertices.len(),
            });
        }

        let edges = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&start, &end)| Line::from_endpoints(start, end))
            .collect();
        let area = shoelace_area(&vertices);

        Ok(Self {
            vertices,
            edges,
            area,
        })
    }

    /// Vertices in loop order
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Edges in loop order; edge `i` runs from vertex `i` to vertex `i + 1`
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Enclosed area, always non-negative
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Number of vertices (and edges)
    pub const fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a polygon has at least three vertices
    pub const fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Split the polygon along the chord between two edge hits
    ///
    /// `first.edge` must be strictly less than `second.edge`. The first child
    /// keeps vertex 0 and walks `first.point`, `second.point` across the
    /// chord; the second child holds the vertices strictly between the two
    /// edges and closes back through `second.point`, `first.point`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSplit` if the edge indices are not ascending or lie
    /// outside the polygon
    pub fn split(&self, first: EdgeHit, second: EdgeHit) -> Result<(Self, Self)> {
        let edge_count = self.edges.len();
        let invalid = || AlgorithmError::InvalidSplit {
            first_edge: first.edge,
            second_edge: second.edge,
            edge_count,
        };
        if first.edge >= second.edge {
            return Err(invalid());
        }

        let before = self.edges.get(..first.edge).ok_or_else(invalid)?;
        let between = self.edges.get(first.edge..second.edge).ok_or_else(invalid)?;
        let after = self.edges.get(second.edge..).ok_or_else(invalid)?;
        if after.is_empty() {
            return Err(invalid());
        }

        let outer = before
            .iter()
            .map(Line::end)
            .chain([first.point, second.point])
            .chain(after.iter().map(Line::end))
            .collect();
        let inner = between
            .iter()
            .map(Line::end)
            .chain([second.point, first.point])
            .collect();

        Ok((Self::new(outer)?, Self::new(inner)?))
    }

    /// Even-odd containment test for `point`
    ///
    /// Points exactly on the boundary may fall on either side.
    pub fn contains(&self, point: Vector) -> bool {
        let mut inside = false;
        for edge in &self.edges {
            let (a, b) = (edge.origin, edge.end());
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = (b.x - a.x).mul_add((point.y - a.y) / (b.y - a.y), a.x);
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn shoelace_area(vertices: &[Vector]) -> f64 {
    let twice_signed: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| a.cross(b))
        .sum();
    twice_signed.abs() / 2.0
}
