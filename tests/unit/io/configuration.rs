//! Tests for parameter bounds and defaults

#[cfg(test)]
mod tests {
    use colorcubes::io::configuration::{
        CUBE_SIZE_RANGE, DARKEN_BEVEL_RANGE, DEFAULT_CUBE_SIZE, DEFAULT_DARKEN_BEVEL,
        DEFAULT_HEIGHT, DEFAULT_ROTATION, DEFAULT_SPACING, DEFAULT_TILE_SIZE, DEFAULT_WIDTH,
        HASH_PRIME_X, HASH_PRIME_Y, MAX_REGION_DIMENSION, ROTATION_RANGE, SPACING_RANGE,
    };

    // Tests every default lies within its accepted range
    // Verified by setting a default outside its range
    #[test]
    fn test_defaults_within_ranges() {
        assert!(CUBE_SIZE_RANGE.contains(&DEFAULT_CUBE_SIZE));
        assert!(SPACING_RANGE.contains(&DEFAULT_SPACING));
        assert!(ROTATION_RANGE.contains(&DEFAULT_ROTATION));
        assert!(DARKEN_BEVEL_RANGE.contains(&DEFAULT_DARKEN_BEVEL));
    }

    // Tests the default render fits the region limits
    // Verified by raising the default width past the limit
    #[test]
    fn test_default_region_within_limits() {
        assert!(DEFAULT_WIDTH <= MAX_REGION_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_REGION_DIMENSION);
        assert!(DEFAULT_TILE_SIZE > 0);
    }

    // Tests the hash multipliers keep their published values
    // Verified by changing either prime
    #[test]
    fn test_hash_primes() {
        assert_eq!(HASH_PRIME_X, 73_856_093);
        assert_eq!(HASH_PRIME_Y, 19_349_663);
        assert_eq!(HASH_PRIME_X % 2, 1);
        assert_eq!(HASH_PRIME_Y % 2, 1);
    }
}
