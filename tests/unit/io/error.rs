//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mondrian::AlgorithmError;
    use mondrian::io::error::{computation_error, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/mondrian_1.svg".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/mondrian_1.svg"));
    }

    // Tests RejectionLimit error formatting
    // Verified by omitting the attempt count from the message
    #[test]
    fn test_rejection_limit_error() {
        let error = AlgorithmError::RejectionLimit {
            cut: 7,
            attempts: 1000,
        };

        let message = error.to_string();
        assert!(message.contains("cut 7"));
        assert!(message.contains("1000"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("min_area", &0.75, &"too large");

        let message = error.to_string();
        assert!(message.contains("min_area"));
        assert!(message.contains("0.75"));
        assert!(message.contains("too large"));
    }

    // Tests split and polygon errors name the offending sizes
    // Verified by dropping the edge count from the split message
    #[test]
    fn test_geometry_errors() {
        let split = AlgorithmError::InvalidSplit {
            first_edge: 3,
            second_edge: 1,
            edge_count: 4,
        };
        let polygon = AlgorithmError::DegeneratePolygon { vertex_count: 2 };

        assert!(split.to_string().contains("4 edges"));
        assert!(split.to_string().contains("edges 3 and 1"));
        assert!(polygon.to_string().contains("got 2"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = AlgorithmError::ImageExport {
            path: "/restricted/mondrian_1.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/mondrian_1.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests Computation error formatting and io conversion
    // Verified by omitting reason from message
    #[test]
    fn test_computation_error() {
        let error = computation_error("apply_cut", &"area drift");

        let message = error.to_string();
        assert!(message.contains("apply_cut"));
        assert!(message.contains("area drift"));

        let converted: AlgorithmError = std::io::Error::other("boom").into();
        assert!(matches!(converted, AlgorithmError::FileSystem { .. }));
    }
}
