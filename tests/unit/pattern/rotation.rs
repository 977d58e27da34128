//! Tests for the global offset rotation

#[cfg(test)]
mod tests {
    use colorcubes::pattern::{LocalOffset, Rotation};

    const EPSILON: f64 = 1e-12;

    // Tests zero degrees leaves offsets bit-for-bit unchanged
    // Verified by adding a small constant angle
    #[test]
    fn test_zero_rotation_is_exact() {
        let rotation = Rotation::from_degrees(0.0);
        let offset = LocalOffset::new(-15.0, 14.5);

        assert_eq!(rotation.apply(offset), offset);
        assert_eq!(Rotation::identity().apply(offset), offset);
        assert_eq!(Rotation::default(), Rotation::identity());
    }

    // Tests a quarter turn maps +x onto +y
    // Verified by swapping the sine sign
    #[test]
    fn test_quarter_turn() {
        let rotated = Rotation::from_degrees(90.0).apply(LocalOffset::new(1.0, 0.0));

        assert!(rotated.dx.abs() < EPSILON);
        assert!((rotated.dy - 1.0).abs() < EPSILON);
    }

    // Tests 45 degrees folds a diagonal onto an axis
    // Verified by converting degrees with the wrong factor
    #[test]
    fn test_diagonal_at_45_degrees() {
        let rotated = Rotation::from_degrees(45.0).apply(LocalOffset::new(14.0, 14.0));

        assert!(rotated.dx.abs() < EPSILON);
        assert!((rotated.dy - 14.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    // Tests rotation preserves distance from the cell center
    // Verified by scaling the cosine term
    #[test]
    fn test_rotation_preserves_length() {
        let offset = LocalOffset::new(3.0, -4.0);
        for degrees in [0.0, 17.0, 90.0, 135.0, 271.5, 360.0] {
            let rotated = Rotation::from_degrees(degrees).apply(offset);
            let length = rotated.dx.hypot(rotated.dy);
            assert!((length - 5.0).abs() < 1e-9, "length {length} at {degrees}");
        }
        assert!((Rotation::from_degrees(271.5).degrees() - 271.5).abs() < EPSILON);
    }
}
