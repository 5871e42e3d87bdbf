//! Tests for configuration defaults and validation

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_STROKE_COLOR, DEFAULT_WIDTH, MAX_GRID_DIMENSION, RenderConfig,
    };

    #[test]
    fn test_defaults_validate() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.width - DEFAULT_WIDTH).abs() < f64::EPSILON);
        assert!((config.height - DEFAULT_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(config.grid_width, 160);
        assert_eq!(config.grid_height, 90);
        assert_eq!(config.density, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.stroke_color, DEFAULT_STROKE_COLOR);
        assert_eq!(config.background_color, None);
    }

    #[test]
    fn test_viewport_must_be_positive() {
        let config = RenderConfig {
            width: 0.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            height: -5.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_dimensions_are_bounded() {
        let config = RenderConfig {
            grid_width: 1,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            grid_height: MAX_GRID_DIMENSION + 1,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            grid_width: 2,
            grid_height: 2,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_density_is_rejected() {
        let config = RenderConfig {
            density: 0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_opacity_range_is_enforced() {
        let config = RenderConfig {
            opacity_max: 1.5,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            opacity_min: -0.1,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let config = RenderConfig {
            freq: f64::NAN,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            bias: f64::INFINITY,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_stroke_color_is_rejected() {
        let config = RenderConfig {
            stroke_color: String::new(),
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
