//! Tests for segment construction, intersection and orientation

#[cfg(test)]
mod tests {
    use mondrian::geometry::{Line, Orientation, Vector};

    fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
        Line::from_endpoints(Vector::new(x0, y0), Vector::new(x1, y1))
    }

    // Tests endpoint construction stores the displacement
    // Verified by storing the end point instead of the displacement
    #[test]
    fn test_from_endpoints() {
        let line = segment(0.25, 0.5, 0.75, 0.5);

        assert_eq!(line.origin, Vector::new(0.25, 0.5));
        assert_eq!(line.displacement, Vector::new(0.5, 0.0));
        assert_eq!(line.end(), Vector::new(0.75, 0.5));
    }

    // Tests interpolation along the segment
    // Verified by interpolating from the end point
    #[test]
    fn test_point_at() {
        let line = segment(0.0, 0.0, 1.0, 0.5);

        assert_eq!(line.point_at(0.0), line.origin);
        assert_eq!(line.point_at(1.0), line.end());
        assert_eq!(line.point_at(0.5), Vector::new(0.5, 0.25));
    }

    // Tests crossing segments meet at the expected point
    // Verified by returning the point on the other segment's parameter
    #[test]
    fn test_intersect_crossing() {
        let horizontal = segment(0.0, 0.5, 1.0, 0.5);
        let vertical = segment(0.25, 0.0, 0.25, 1.0);

        let hit = horizontal.intersect(&vertical);
        assert!(hit.is_some_and(|p| p.approx_eq(Vector::new(0.25, 0.5), 1e-12)));
    }

    // Tests intersection is symmetric in its arguments
    // Verified by swapping t and u in the solution
    #[test]
    fn test_intersect_symmetric() {
        let pairs = [
            (segment(0.0, 0.3, 1.0, 0.3), segment(0.6, 0.0, 0.6, 1.0)),
            (segment(0.0, 0.0, 1.0, 1.0), segment(0.0, 1.0, 1.0, 0.0)),
            (segment(0.0, 0.0, 0.2, 0.0), segment(0.5, -1.0, 0.5, 1.0)),
        ];

        for (a, b) in pairs {
            match (a.intersect(&b), b.intersect(&a)) {
                (Some(p), Some(q)) => assert!(p.approx_eq(q, 1e-12), "{p} vs {q}"),
                (None, None) => {}
                (left, right) => unreachable!("asymmetric result {left:?} vs {right:?}"),
            }
        }
    }

    // Tests segments whose infinite lines cross outside both spans do not meet
    // Verified by dropping the parameter range check
    #[test]
    fn test_intersect_out_of_range() {
        let short = segment(0.0, 0.0, 0.2, 0.0);
        let vertical = segment(0.5, -1.0, 0.5, 1.0);

        assert!(short.intersect(&vertical).is_none());
    }

    // Tests touching at an endpoint counts as an intersection
    // Verified by using strict bounds on the parameters
    #[test]
    fn test_intersect_at_endpoint() {
        let bottom = segment(0.0, 0.0, 1.0, 0.0);
        let cut = segment(0.4, 0.0, 0.4, 1.0);

        let hit = bottom.intersect(&cut);
        assert!(hit.is_some_and(|p| p.approx_eq(Vector::new(0.4, 0.0), 1e-12)));
    }

    // Tests parallel and colinear segments never intersect
    // Verified by treating overlapping colinear segments as intersecting
    #[test]
    fn test_parallel_has_no_intersection() {
        let a = segment(0.0, 0.0, 1.0, 0.0);
        let parallel = segment(0.0, 0.5, 1.0, 0.5);
        let overlapping = segment(0.5, 0.0, 1.5, 0.0);

        assert!(a.intersect(&parallel).is_none());
        assert!(a.intersect(&overlapping).is_none());
    }

    // Tests parallel and colinear predicates
    // Verified by ignoring the origin offset in the colinear test
    #[test]
    fn test_parallel_and_colinear() {
        let a = segment(0.0, 0.0, 1.0, 0.0);
        let reversed = segment(2.0, 0.0, 1.5, 0.0);
        let shifted = segment(0.0, 0.5, 1.0, 0.5);
        let vertical = segment(0.0, 0.0, 0.0, 1.0);

        assert!(a.is_parallel(&reversed));
        assert!(a.is_colinear(&reversed));
        assert!(a.is_parallel(&shifted));
        assert!(!a.is_colinear(&shifted));
        assert!(!a.is_parallel(&vertical));
        assert!(!a.is_colinear(&vertical));
    }

    // Tests orientation and span along each axis
    // Verified by classifying by the x displacement
    #[test]
    fn test_orientation_and_span() {
        let horizontal = segment(0.75, 0.2, 0.25, 0.2);
        let vertical = segment(0.3, 0.9, 0.3, 0.1);

        assert_eq!(horizontal.orientation(), Orientation::Horizontal);
        assert_eq!(vertical.orientation(), Orientation::Vertical);
        assert_eq!(horizontal.span(Orientation::Horizontal), (0.25, 0.75));
        assert_eq!(vertical.span(Orientation::Vertical), (0.1, 0.9));
    }

    // Tests orientation coordinate helpers round trip
    // Verified by swapping fixed and varying in point construction
    #[test]
    fn test_orientation_coordinates() {
        let p = Vector::new(0.2, 0.7);

        assert!((Orientation::Horizontal.varying(p) - 0.2).abs() < f64::EPSILON);
        assert!((Orientation::Horizontal.fixed(p) - 0.7).abs() < f64::EPSILON);
        assert_eq!(Orientation::Vertical.point(0.7, 0.2), p);
        assert_eq!(Orientation::Horizontal.point(0.2, 0.7), p);
    }
}
