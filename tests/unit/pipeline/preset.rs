//! Tests for the color cubes filter and its bevel chain

#[cfg(test)]
mod tests {
    use colorcubes::RenderError;
    use colorcubes::pattern::CubeParameters;
    use colorcubes::pipeline::{ColorCubes, ColorCubesOptions};
    use colorcubes::spatial::Region;
    use std::num::NonZeroU32;

    fn options(enable_bevel: bool, darken_bevel: f64) -> ColorCubesOptions {
        ColorCubesOptions {
            parameters: CubeParameters::new(20.0, 1.5, 15.0, 9).unwrap(),
            enable_bevel,
            darken_bevel,
        }
    }

    fn tile(size: u32) -> NonZeroU32 {
        NonZeroU32::new(size).unwrap()
    }

    // Tests the default options describe the plain generator
    // Verified by enabling the bevel by default
    #[test]
    fn test_default_options() {
        let defaults = ColorCubesOptions::default();

        assert!(!defaults.enable_bevel);
        assert!((defaults.darken_bevel - 1.0).abs() < f64::EPSILON);
        assert_eq!(defaults.parameters, CubeParameters::default());
    }

    // Tests darkening outside 1..=4 is rejected
    // Verified by skipping the range check
    #[test]
    fn test_darken_bevel_range() {
        for darken in [0.5, 4.5, f64::NAN] {
            match ColorCubes::new(options(true, darken)) {
                Err(RenderError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, "darken_bevel");
                }
                other => unreachable!("Expected InvalidParameter error, got {other:?}"),
            }
        }
        assert!(ColorCubes::new(options(true, 4.0)).is_ok());
    }

    // Tests the plain filter returns the generator output untouched
    // Verified by always adding the bevel chain
    #[test]
    fn test_bevel_disabled_is_passthrough() {
        let filter = ColorCubes::new(options(false, 3.0)).unwrap();
        let region = Region::new(-40, 25, 70, 45).unwrap();

        assert!(filter.pipeline(&region).is_empty());

        let output = filter.render(&region, tile(16), |_| {}).unwrap();
        assert_eq!(output, filter.renderer().render_region(&region).unwrap());
    }

    // Tests the bevel chain stages and their order
    // Verified by moving the crop before the bevel
    #[test]
    fn test_bevel_pipeline_order() {
        let filter = ColorCubes::new(options(true, 2.0)).unwrap();
        let region = Region::new(0, 0, 10, 10).unwrap();

        assert_eq!(
            filter.pipeline(&region).stage_names(),
            vec![
                "color-to-alpha",
                "bevel",
                "background-fill",
                "crop",
                "sharpen",
                "gamma"
            ]
        );
    }

    // Tests the bevelled output covers the region and is fully opaque
    // Verified by dropping the background fill stage
    #[test]
    fn test_bevel_output_is_opaque() {
        let filter = ColorCubes::new(options(true, 2.5)).unwrap();
        let region = Region::new(13, -31, 48, 36).unwrap();
        let output = filter.render(&region, tile(20), |_| {}).unwrap();

        assert_eq!(*output.region(), region);
        assert!(output.is_finite());
        for row in 0..output.height() {
            for col in 0..output.width() {
                let [r, g, b, a] = output.pixel(col, row).unwrap();
                assert_eq!(a, 1.0);
                assert!([r, g, b].iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }

    // Tests darker settings never brighten a pixel
    // Verified by inverting the gamma exponent
    #[test]
    fn test_darken_bevel_monotonic() {
        let region = Region::new(0, 0, 40, 40).unwrap();
        let light = ColorCubes::new(options(true, 1.0))
            .unwrap()
            .render(&region, tile(40), |_| {})
            .unwrap();
        let dark = ColorCubes::new(options(true, 3.0))
            .unwrap()
            .render(&region, tile(40), |_| {})
            .unwrap();

        for row in 0..40 {
            for col in 0..40 {
                let [lr, lg, lb, _] = light.pixel(col, row).unwrap();
                let [dr, dg, db, _] = dark.pixel(col, row).unwrap();
                assert!(dr <= lr + 1e-6 && dg <= lg + 1e-6 && db <= lb + 1e-6);
            }
        }
    }
}
