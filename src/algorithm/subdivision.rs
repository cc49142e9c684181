//! Splitting live polygons along a candidate cut

use crate::algorithm::canvas::PolygonId;
use crate::geometry::{EdgeHit, Line, Polygon};
use crate::io::error::Result;
use std::collections::BTreeMap;

/// Polygons a candidate cut would replace, and their replacements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitPlan {
    removed: Vec<PolygonId>,
    added: Vec<Polygon>,
}

impl SplitPlan {
    /// Ids of the polygons the cut bisects
    pub fn removed(&self) -> &[PolygonId] {
        &self.removed
    }

    /// Children produced by the cut, two per removed polygon
    pub fn added(&self) -> &[Polygon] {
        &self.added
    }

    /// Whether the cut bisects no polygon at all
    pub const fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Area of the smallest child, if any
    pub fn smallest_area(&self) -> Option<f64> {
        self.added.iter().map(Polygon::area).reduce(f64::min)
    }

    /// Whether the cut may be accepted under an optional minimum area
    ///
    /// A plan that splits nothing is never acceptable.
    pub fn satisfies(&self, min_area: Option<f64>) -> bool {
        match (self.smallest_area(), min_area) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(smallest), Some(min)) => smallest >= min,
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<PolygonId>, Vec<Polygon>) {
        (self.removed, self.added)
    }
}

/// Edges of `polygon` crossed by `cut`, in edge order
pub fn edge_hits(polygon: &Polygon, cut: &Line) -> Vec<EdgeHit> {
    polygon
        .edges()
        .iter()
        .enumerate()
        .filter_map(|(edge, line)| cut.intersect(line).map(|point| EdgeHit { edge, point }))
        .collect()
}

/// Work out which live polygons `cut` bisects
///
/// Only polygons crossed at exactly two edges are split; any other number of
/// hits means the cut does not cleanly divide that polygon and it is left
/// untouched.
///
/// # Errors
///
/// Propagates `InvalidSplit` or `DegeneratePolygon` from the polygon split,
/// which cannot occur for two hits on distinct edges
pub fn plan_split(polygons: &BTreeMap<PolygonId, Polygon>, cut: &Line) -> Result<SplitPlan> {
    let mut plan = SplitPlan::default();

    for (&id, polygon) in polygons {
        if let [first, second] = edge_hits(polygon, cut).as_slice() {
            let (outer, inner) = polygon.split(*first, *second)?;
            plan.removed.push(id);
            plan.added.push(outer);
            plan.added.push(inner);
        }
    }

    Ok(plan)
}
