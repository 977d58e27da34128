//! Tests for pipeline construction and execution

#[cfg(test)]
mod tests {
    use colorcubes::RenderError;
    use colorcubes::io::error::Result;
    use colorcubes::pipeline::{Gamma, Opacity, Pipeline, Stage, ThresholdAlpha};
    use colorcubes::spatial::{Region, RgbaBuffer};

    struct Invert;

    impl Stage for Invert {
        fn name(&self) -> &'static str {
            "invert"
        }

        fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
            input.map_pixels(|[r, g, b, a]| [1.0 - r, 1.0 - g, 1.0 - b, a]);
            Ok(input)
        }
    }

    fn sample() -> RgbaBuffer {
        RgbaBuffer::filled(Region::new(0, 0, 3, 3).unwrap(), [0.25, 0.5, 1.0, 0.4])
    }

    // Tests an empty pipeline returns its input
    // Verified by clearing the buffer in run
    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run(sample()).unwrap(), sample());
    }

    // Tests toggles decide membership at build time
    // Verified by ignoring the enabled flag
    #[test]
    fn test_conditional_construction() {
        let pipeline = Pipeline::new()
            .then(Invert)
            .then_if(false, || Opacity { factor: 0.5 })
            .then_if(true, ThresholdAlpha::default);

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.stage_names(), vec!["invert", "threshold-alpha"]);
        assert_eq!(format!("{pipeline:?}"), r#"["invert", "threshold-alpha"]"#);
    }

    // Tests stages run in insertion order
    // Verified by iterating stages in reverse
    #[test]
    fn test_stage_order() {
        let pipeline = Pipeline::new()
            .then(Invert)
            .then(Gamma { exponent: 2.0 });
        let output = pipeline.run(sample()).unwrap();

        // invert then square: (1 - 0.25)^2
        let [r, g, b, a] = output.pixel(0, 0).unwrap();
        assert!((r - 0.5625).abs() < 1e-6);
        assert!((g - 0.25).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert_eq!(a, 0.4);
    }

    // Tests a stage emitting infinity aborts the run and is named
    // Verified by removing the finiteness check
    #[test]
    fn test_non_finite_stage_output_aborts() {
        let pipeline = Pipeline::new()
            .then(Invert)
            .then(Gamma { exponent: -1.0 });

        match pipeline.run(sample()) {
            Err(RenderError::Computation { operation, .. }) => {
                assert_eq!(operation, "gamma");
            }
            other => unreachable!("Expected Computation error, got {other:?}"),
        }
    }

    // Tests pipelines can be shared between threads
    // Verified by dropping the Sync bound from Stage
    #[test]
    fn test_pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&Pipeline::new().then(Invert));
    }
}
