//! Tests for RGBA buffer access, blitting and cropping

#[cfg(test)]
mod tests {
    use colorcubes::RenderError;
    use colorcubes::spatial::buffer::ALPHA;
    use colorcubes::spatial::{Region, RgbaBuffer};
    use ndarray::{Array2, Array3};

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    // Tests a filled buffer reports its color everywhere
    // Verified by filling only the first row
    #[test]
    fn test_filled() {
        let region = Region::new(2, 3, 4, 5).unwrap();
        let buffer = RgbaBuffer::filled(region, RED);

        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.view().dim(), (5, 4, 4));
        assert!(buffer.view().outer_iter().all(|row| row
            .outer_iter()
            .all(|pixel| pixel.to_vec() == RED.to_vec())));
    }

    // Tests local and absolute pixel access agree
    // Verified by forgetting to subtract the origin
    #[test]
    fn test_pixel_access() {
        let region = Region::new(-5, 10, 3, 3).unwrap();
        let mut buffer = RgbaBuffer::new(region);
        buffer.set_pixel(1, 2, BLUE);

        assert_eq!(buffer.pixel(1, 2), Some(BLUE));
        assert_eq!(buffer.pixel_at(-4, 12), Some(BLUE));
        assert_eq!(buffer.pixel_at(-5, 10), Some([0.0; 4]));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel_at(-6, 10), None);
    }

    // Tests the flat slice is row-major with four channels per pixel
    // Verified by storing channels as separate planes
    #[test]
    fn test_row_major_slice() {
        let mut buffer = RgbaBuffer::new(Region::new(0, 0, 2, 2).unwrap());
        buffer.set_pixel(1, 0, [0.1, 0.2, 0.3, 0.4]);

        let slice = buffer.as_slice().unwrap();
        assert_eq!(slice.len(), 16);
        assert_eq!(slice.get(4..8), Some(&[0.1, 0.2, 0.3, 0.4][..]));
    }

    // Tests blitting copies only the overlapping area
    // Verified by copying from the source origin instead of the overlap
    #[test]
    fn test_blit_overlap() {
        let mut target = RgbaBuffer::filled(Region::new(0, 0, 4, 4).unwrap(), RED);
        let source = RgbaBuffer::filled(Region::new(2, 3, 5, 5).unwrap(), BLUE);

        assert_eq!(target.blit(&source), 2);
        assert_eq!(target.pixel_at(2, 3), Some(BLUE));
        assert_eq!(target.pixel_at(3, 3), Some(BLUE));
        assert_eq!(target.pixel_at(1, 3), Some(RED));
        assert_eq!(target.pixel_at(2, 2), Some(RED));

        let far = RgbaBuffer::filled(Region::new(100, 100, 1, 1).unwrap(), BLUE);
        assert_eq!(target.blit(&far), 0);
    }

    // Tests blit windows are offset independently in source and target
    // Verified by slicing both buffers with the target's local bounds
    #[test]
    fn test_blit_offset_windows() {
        let source_region = Region::new(0, 0, 5, 6).unwrap();
        let mut source = RgbaBuffer::new(source_region);
        for row in 0..6 {
            for col in 0..5 {
                source.set_pixel(col, row, [col as f32 / 8.0, row as f32 / 8.0, 0.5, 1.0]);
            }
        }
        let mut target = RgbaBuffer::new(Region::new(3, 3, 4, 4).unwrap());

        assert_eq!(target.blit(&source), 6);
        for y in 3..7 {
            for x in 3..7 {
                let expected = if source_region.contains(x, y) {
                    source.pixel_at(x, y)
                } else {
                    Some([0.0; 4])
                };
                assert_eq!(target.pixel_at(x, y), expected, "({x}, {y})");
            }
        }

        let cropped = source.crop(&Region::new(2, 1, 2, 3).unwrap()).unwrap();
        assert_eq!(cropped.pixel(0, 0), source.pixel_at(2, 1));
        assert_eq!(cropped.pixel(1, 2), source.pixel_at(3, 3));
    }

    // Tests cropping keeps absolute coordinates
    // Verified by resetting the cropped origin to zero
    #[test]
    fn test_crop() {
        let mut buffer = RgbaBuffer::new(Region::new(0, 0, 10, 10).unwrap());
        buffer.set_pixel(6, 7, BLUE);

        let cropped = buffer.crop(&Region::new(5, 5, 20, 20).unwrap()).unwrap();
        assert_eq!(*cropped.region(), Region::new(5, 5, 5, 5).unwrap());
        assert_eq!(cropped.pixel_at(6, 7), Some(BLUE));

        assert!(matches!(
            buffer.crop(&Region::new(50, 50, 1, 1).unwrap()),
            Err(RenderError::InvalidRegion { .. })
        ));
    }

    // Tests channel planes round-trip and shape mismatches fail
    // Verified by writing the plane into the wrong channel
    #[test]
    fn test_channels() {
        let mut buffer = RgbaBuffer::filled(Region::new(0, 0, 3, 2).unwrap(), RED);
        let alpha = buffer.channel(ALPHA).unwrap();
        assert!(alpha.iter().all(|&a| a == 1.0));
        assert!(buffer.channel(4).is_none());

        buffer
            .set_channel(ALPHA, &Array2::from_elem((2, 3), 0.25))
            .unwrap();
        assert_eq!(buffer.pixel(2, 1), Some([1.0, 0.0, 0.0, 0.25]));

        assert!(buffer.set_channel(0, &Array2::zeros((3, 2))).is_err());
        assert!(buffer.set_channel(4, &Array2::zeros((2, 3))).is_err());
    }

    // Tests wrapping an array checks its shape
    // Verified by skipping the shape comparison
    #[test]
    fn test_from_array() {
        let region = Region::new(0, 0, 3, 2).unwrap();

        assert!(RgbaBuffer::from_array(region, Array3::zeros((2, 3, 4))).is_ok());
        assert!(RgbaBuffer::from_array(region, Array3::zeros((3, 2, 4))).is_err());
        assert!(RgbaBuffer::from_array(region, Array3::zeros((2, 3, 3))).is_err());
    }

    // Tests pixel mapping and finiteness detection
    // Verified by mapping only the alpha channel
    #[test]
    fn test_map_pixels_and_finiteness() {
        let mut buffer = RgbaBuffer::filled(Region::new(0, 0, 2, 2).unwrap(), RED);
        buffer.map_pixels(|[r, g, b, a]| [b, g, r, a * 0.5]);

        assert_eq!(buffer.pixel(1, 1), Some([0.0, 0.0, 1.0, 0.5]));
        assert!(buffer.is_finite());

        buffer.set_pixel(0, 0, [f32::NAN, 0.0, 0.0, 1.0]);
        assert!(!buffer.is_finite());
        assert_eq!(buffer.into_array().dim(), (2, 2, 4));
    }
}
