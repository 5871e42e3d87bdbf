//! Tests for pipeline orchestration and the extraction capability seam

#[cfg(test)]
mod tests {
    use crate::contour::extractor::{ContourExtractor, IsoContour};
    use crate::field::generator::ScalarField;
    use crate::io::configuration::RenderConfig;
    use crate::io::error::{RenderError, Result, computation_error};
    use crate::render::composer::{Composer, generate_document};

    fn small_config(seed: u32) -> RenderConfig {
        RenderConfig {
            grid_width: 40,
            grid_height: 24,
            density: 6,
            seed: Some(seed),
            ..RenderConfig::default()
        }
    }

    fn path_geometry(markup: &str) -> Vec<String> {
        markup
            .lines()
            .filter(|line| line.starts_with("<path "))
            .filter_map(|line| {
                let start = line.find("d=\"")? + 3;
                let end = line.get(start..)?.find('"')? + start;
                line.get(start..end).map(str::to_string)
            })
            .collect()
    }

    #[test]
    fn test_missing_extractor_fails_before_any_computation() {
        // Even an invalid configuration must not be inspected first
        let broken = RenderConfig {
            density: 0,
            ..small_config(1)
        };
        let result = Composer::without_extractor().compose(&broken);
        assert!(matches!(result, Err(RenderError::MissingExtractor)));
    }

    #[test]
    fn test_identical_configurations_produce_identical_documents() {
        let config = small_config(12345);
        let first = generate_document(&config).expect("composition failed");
        let second = generate_document(&config).expect("composition failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_path_per_planned_level() {
        let config = small_config(7);
        let markup = generate_document(&config).expect("composition failed");
        let paths = markup
            .lines()
            .filter(|line| line.starts_with("<path "))
            .count();
        assert_eq!(paths, config.density);
    }

    #[test]
    fn test_presentation_options_leave_geometry_unchanged() {
        let plain = small_config(99);
        let restyled = RenderConfig {
            stroke_min: 0.4,
            stroke_max: 0.9,
            opacity_min: 0.1,
            opacity_max: 0.9,
            stroke_color: "#ff0000".to_string(),
            background_color: Some("#000000".to_string()),
            ..small_config(99)
        };

        let first = generate_document(&plain).expect("composition failed");
        let second = generate_document(&restyled).expect("composition failed");

        assert_ne!(first, second);
        assert_eq!(path_geometry(&first), path_geometry(&second));
    }

    #[test]
    fn test_different_seeds_produce_different_geometry() {
        let first = generate_document(&small_config(1)).expect("composition failed");
        let second = generate_document(&small_config(2)).expect("composition failed");
        assert_ne!(path_geometry(&first), path_geometry(&second));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let config = RenderConfig {
            grid_width: 1,
            ..small_config(1)
        };
        assert!(matches!(
            generate_document(&config),
            Err(RenderError::InvalidParameter { .. })
        ));
    }

    struct SingleDiamond;

    impl ContourExtractor for SingleDiamond {
        fn extract(
            &self,
            _field: &ScalarField,
            thresholds: &[f64],
            _smooth: bool,
        ) -> Result<Vec<IsoContour>> {
            Ok(thresholds
                .iter()
                .map(|&threshold| IsoContour {
                    threshold,
                    rings: vec![vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]]],
                })
                .collect())
        }
    }

    #[test]
    fn test_injected_extractor_replaces_the_built_in() {
        let composer = Composer::with_extractor(Box::new(SingleDiamond));
        let markup = composer
            .compose(&small_config(5))
            .expect("composition failed");
        let geometry = path_geometry(&markup);
        assert_eq!(geometry.len(), 6);
        assert!(geometry.iter().all(|d| d.matches('Z').count() == 1));
    }

    struct FailingExtractor;

    impl ContourExtractor for FailingExtractor {
        fn extract(
            &self,
            _field: &ScalarField,
            _thresholds: &[f64],
            _smooth: bool,
        ) -> Result<Vec<IsoContour>> {
            Err(computation_error("extraction", &"deliberate failure"))
        }
    }

    #[test]
    fn test_extractor_errors_propagate() {
        let composer = Composer::with_extractor(Box::new(FailingExtractor));
        assert!(matches!(
            composer.compose(&small_config(5)),
            Err(RenderError::Computation { .. })
        ));
    }

    #[test]
    fn test_omitted_seed_still_composes() {
        let config = RenderConfig {
            seed: None,
            ..small_config(0)
        };
        let markup = generate_document(&config).expect("composition failed");
        assert!(markup.starts_with("<svg"));
    }
}
