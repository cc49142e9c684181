//! Tests for polygon area, edges, splitting and containment

#[cfg(test)]
mod tests {
    use mondrian::AlgorithmError;
    use mondrian::geometry::{EdgeHit, Polygon, Vector};

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 1.0),
            Vector::new(1.0, 1.0),
            Vector::new(1.0, 0.0),
        ])
        .unwrap()
    }

    // Tests construction rejects fewer than three vertices
    // Verified by lowering the vertex minimum to two
    #[test]
    fn test_new_rejects_degenerate() {
        let result = Polygon::new(vec![Vector::new(0.0, 0.0), Vector::new(1.0, 0.0)]);

        assert!(matches!(
            result,
            Err(AlgorithmError::DegeneratePolygon { vertex_count: 2 })
        ));
    }

    // Tests shoelace area is positive for either winding
    // Verified by removing the absolute value
    #[test]
    fn test_area_independent_of_winding() {
        let square = unit_square();
        let mut reversed_vertices = square.vertices().to_vec();
        reversed_vertices.reverse();
        let reversed = Polygon::new(reversed_vertices).unwrap();

        assert!((square.area() - 1.0).abs() < 1e-12);
        assert!((reversed.area() - 1.0).abs() < 1e-12);

        let triangle = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 0.5),
        ])
        .unwrap();
        assert!((triangle.area() - 0.25).abs() < 1e-12);
    }

    // Tests edges follow vertex order and close the loop
    // Verified by omitting the closing edge
    #[test]
    fn test_edges_follow_vertices() {
        let square = unit_square();
        let edges = square.edges();

        assert_eq!(edges.len(), 4);
        assert_eq!(square.len(), 4);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge.origin, square.vertices()[i]);
            assert_eq!(edge.end(), square.vertices()[(i + 1) % 4]);
        }
    }

    // Tests a vertical chord splits the square into two rectangles
    // Verified by swapping the chord points in the first child
    #[test]
    fn test_split_square() {
        let square = unit_square();
        // Edge 1 is the top (0,1)->(1,1), edge 3 the bottom (1,0)->(0,0)
        let first = EdgeHit {
            edge: 1,
            point: Vector::new(0.25, 1.0),
        };
        let second = EdgeHit {
            edge: 3,
            point: Vector::new(0.25, 0.0),
        };

        let (outer, inner) = square.split(first, second).unwrap();

        assert_eq!(
            outer.vertices(),
            &[
                Vector::new(0.0, 1.0),
                Vector::new(0.25, 1.0),
                Vector::new(0.25, 0.0),
                Vector::new(0.0, 0.0),
            ]
        );
        assert_eq!(
            inner.vertices(),
            &[
                Vector::new(1.0, 1.0),
                Vector::new(1.0, 0.0),
                Vector::new(0.25, 0.0),
                Vector::new(0.25, 1.0),
            ]
        );
        assert!((outer.area() - 0.25).abs() < 1e-12);
        assert!((inner.area() - 0.75).abs() < 1e-12);
    }

    // Tests splitting conserves area for chords between adjacent edges
    // Verified by dropping the trailing vertices of the first child
    #[test]
    fn test_split_conserves_area() {
        let square = unit_square();
        let chords = [
            (0, Vector::new(0.0, 0.3), 1, Vector::new(0.6, 1.0)),
            (0, Vector::new(0.0, 0.7), 2, Vector::new(1.0, 0.7)),
            (2, Vector::new(1.0, 0.1), 3, Vector::new(0.9, 0.0)),
        ];

        for (i1, p1, i2, p2) in chords {
            let (a, b) = square
                .split(EdgeHit { edge: i1, point: p1 }, EdgeHit { edge: i2, point: p2 })
                .unwrap();
            assert!(
                (a.area() + b.area() - square.area()).abs() < 1e-12,
                "chord {i1}->{i2} lost area"
            );
        }
    }

    // Tests split rejects descending or out of range edge indices
    // Verified by accepting equal indices
    #[test]
    fn test_split_rejects_bad_indices() {
        let square = unit_square();
        let hit = |edge| EdgeHit {
            edge,
            point: Vector::new(0.5, 0.5),
        };

        for (first, second) in [(2, 1), (1, 1), (1, 4), (5, 6)] {
            assert!(matches!(
                square.split(hit(first), hit(second)),
                Err(AlgorithmError::InvalidSplit { edge_count: 4, .. })
            ));
        }
    }

    // Tests containment for interior and exterior points
    // Verified by inverting the crossing comparison
    #[test]
    fn test_contains() {
        let square = unit_square();
        let l_shape = Polygon::new(vec![
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 1.0),
            Vector::new(0.5, 1.0),
            Vector::new(0.5, 0.5),
            Vector::new(1.0, 0.5),
            Vector::new(1.0, 0.0),
        ])
        .unwrap();

        assert!(square.contains(Vector::new(0.5, 0.5)));
        assert!(!square.contains(Vector::new(1.5, 0.5)));
        assert!(l_shape.contains(Vector::new(0.25, 0.75)));
        assert!(l_shape.contains(Vector::new(0.75, 0.25)));
        assert!(!l_shape.contains(Vector::new(0.75, 0.75)));
    }
}
