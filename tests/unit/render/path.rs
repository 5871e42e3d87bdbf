//! Tests for grid-to-canvas mapping and path serialization

#[cfg(test)]
mod tests {
    use crate::contour::extractor::IsoContour;
    use crate::io::configuration::BLEED;
    use crate::render::path::{PathCommand, PathData, PathMapping, contour_path};

    #[test]
    fn test_default_bleed_mapping_dimensions() {
        let mapping = PathMapping::for_viewport(100.0, 56.25, 160, 90, BLEED);

        assert!((mapping.scale_x - 100.0 * 1.2 / 159.0).abs() < 1e-12);
        assert!((mapping.scale_y - 56.25 * 1.2 / 89.0).abs() < 1e-12);
        assert!((mapping.offset_x - 10.0).abs() < 1e-12);
        assert!((mapping.offset_y - 5.625).abs() < 1e-12);
    }

    // Grid corner (0, 0) must land outside the visible viewport on the
    // negative side so edge closure artifacts stay hidden
    #[test]
    fn test_grid_origin_maps_into_the_bleed_margin() {
        let mapping = PathMapping::for_viewport(100.0, 56.25, 160, 90, BLEED);
        let origin = mapping.apply([0.0, 0.0]);

        assert!(origin[0] < 0.0, "x stayed visible: {}", origin[0]);
        assert!(origin[1] < 0.0, "y stayed visible: {}", origin[1]);
    }

    #[test]
    fn test_last_grid_corner_maps_past_the_viewport() {
        let mapping = PathMapping::for_viewport(100.0, 56.25, 160, 90, BLEED);
        let corner = mapping.apply([159.0, 89.0]);

        assert!(corner[0] > 100.0, "x stopped short: {}", corner[0]);
        assert!(corner[1] > 56.25, "y stopped short: {}", corner[1]);
    }

    #[test]
    fn test_serialization_uses_three_fractional_digits() {
        let mut data = PathData::default();
        data.move_to(1.23456, 7.891_011);
        data.line_to(3.5, 4.25);
        data.close();

        assert_eq!(data.to_string(), "M1.235 7.891L3.500 4.250Z");
    }

    #[test]
    fn test_each_ring_becomes_a_closed_subpath() {
        let contour = IsoContour {
            threshold: 0.0,
            rings: vec![
                vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
                vec![[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0]],
            ],
        };
        let identity = PathMapping {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };

        let data = contour_path(&contour, &identity);
        let commands = data.commands();

        let moves = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_, _)))
            .count();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_, _)))
            .count();
        let closes = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count();

        assert_eq!(moves, 2);
        assert_eq!(lines, 5);
        assert_eq!(closes, 2);
        assert!(matches!(commands.first(), Some(PathCommand::MoveTo(_, _))));
        assert!(matches!(commands.last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_mapping_applies_scale_then_offset() {
        let mapping = PathMapping {
            scale_x: 2.0,
            scale_y: 3.0,
            offset_x: 1.0,
            offset_y: 2.0,
        };
        let mapped = mapping.apply([4.0, 5.0]);
        assert!((mapped[0] - 7.0).abs() < 1e-12);
        assert!((mapped[1] - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_contour_produces_empty_path() {
        let contour = IsoContour {
            threshold: 0.0,
            rings: vec![],
        };
        let identity = PathMapping {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let data = contour_path(&contour, &identity);
        assert!(data.is_empty());
        assert_eq!(data.to_string(), "");
    }
}
