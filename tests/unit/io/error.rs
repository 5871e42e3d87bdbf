//! Tests for error construction and display formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use crate::io::error::{RenderError, computation_error, invalid_parameter};

    #[test]
    fn test_missing_extractor_message() {
        let message = RenderError::MissingExtractor.to_string();
        assert!(message.contains("extraction capability"));
    }

    #[test]
    fn test_invalid_parameter_names_the_field() {
        let error = invalid_parameter("density", &0, &"at least one contour level is required");
        let message = error.to_string();
        assert!(message.contains("'density'"));
        assert!(message.contains("'0'"));
        assert!(message.contains("at least one contour level"));
    }

    #[test]
    fn test_computation_error_names_the_operation() {
        let error = computation_error("contour stitching", &"open contour chain");
        let message = error.to_string();
        assert!(message.contains("contour stitching"));
        assert!(message.contains("open contour chain"));
    }

    #[test]
    fn test_file_system_error_carries_its_source() {
        let error = RenderError::FileSystem {
            path: PathBuf::from("out.svg"),
            operation: "write",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("out.svg"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_errors_convert() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: RenderError = io_error.into();
        assert!(matches!(error, RenderError::FileSystem { .. }));
    }

    #[test]
    fn test_non_io_variants_have_no_source() {
        assert!(RenderError::MissingExtractor.source().is_none());
        assert!(
            invalid_parameter("width", &0.0, &"value must be a positive finite number")
                .source()
                .is_none()
        );
    }
}
