//! Random generation of orthogonal candidate cuts

use crate::geometry::Line;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Lines parallel to `anchor`, not colinear with it, whose span along the
/// anchor's axis covers `coordinate` (bounds inclusive)
pub fn facing_lines<'a>(lines: &'a [Line], anchor: &Line, coordinate: f64) -> Vec<&'a Line> {
    let orientation = anchor.orientation();
    lines
        .iter()
        .filter(|line| !line.is_colinear(anchor))
        .filter(|line| line.orientation() == orientation)
        .filter(|line| {
            let (low, high) = line.span(orientation);
            (low..=high).contains(&coordinate)
        })
        .collect()
}

/// Draw a random cut orthogonal to two existing parallel lines
///
/// Picks an anchor line and a uniform point on it, then a second line
/// parallel to the anchor that lies across from that point. The cut joins
/// the point to the second line at right angles, so both of its endpoints
/// rest on existing lines.
///
/// Returns `None` when no line faces the chosen point; callers resample.
pub fn generate_candidate_line<R: Rng + ?Sized>(lines: &[Line], rng: &mut R) -> Option<Line> {
    let anchor = lines.choose(rng)?;
    let orientation = anchor.orientation();
    let start = anchor.point_at(rng.random::<f64>());
    let along = orientation.varying(start);

    let target = facing_lines(lines, anchor, along).choose(rng).copied()?;
    let end = orientation.point(along, orientation.fixed(target.origin));

    Some(Line::from_endpoints(start, end))
}
