//! Parameter bounds and runtime configuration defaults

use std::ops::RangeInclusive;

// Pattern parameters
/// Default side length of a cube in pixels
pub const DEFAULT_CUBE_SIZE: f64 = 30.0;
/// Accepted cube side lengths
pub const CUBE_SIZE_RANGE: RangeInclusive<f64> = 10.0..=200.0;

/// Default lattice pitch as a multiple of the cube size
pub const DEFAULT_SPACING: f64 = 1.2;
/// Accepted spacing multipliers
pub const SPACING_RANGE: RangeInclusive<f64> = 1.0..=2.0;

/// Default global rotation in degrees
pub const DEFAULT_ROTATION: f64 = 0.0;
/// Accepted rotation angles in degrees
pub const ROTATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// Fixed seed for reproducible colors
pub const DEFAULT_SEED: i64 = 42;

// Spatial hash multipliers, both large odd primes
/// Multiplier applied to the column index
pub const HASH_PRIME_X: i32 = 73_856_093;
/// Multiplier applied to the row index
pub const HASH_PRIME_Y: i32 = 19_349_663;

// Safety limits to prevent excessive memory allocation and precision loss
/// Maximum allowed region width or height
pub const MAX_REGION_DIMENSION: u32 = 10_000;
/// Largest absolute region origin accepted on either axis
pub const MAX_CANVAS_COORDINATE: i64 = 1 << 40;

// Region defaults for the CLI
/// Default rendered width in pixels
pub const DEFAULT_WIDTH: u32 = 512;
/// Default rendered height in pixels
pub const DEFAULT_HEIGHT: u32 = 512;
/// Default edge length of a parallel render tile
pub const DEFAULT_TILE_SIZE: u32 = 128;

// Bevel preset, matching the lighting of the original cube filter
/// Bump depth of the bevel height map
pub const BEVEL_DEPTH: f32 = 35.0;
/// Light elevation in degrees
pub const BEVEL_ELEVATION: f32 = 136.0;
/// Light azimuth in degrees
pub const BEVEL_AZIMUTH: f32 = 110.0;
/// Unsharp mask strength applied after the bevel
pub const BEVEL_SHARPEN_AMOUNT: f32 = 0.3;
/// Default gamma exponent used to darken the bevel
pub const DEFAULT_DARKEN_BEVEL: f64 = 1.0;
/// Accepted darkening exponents
pub const DARKEN_BEVEL_RANGE: RangeInclusive<f64> = 1.0..=4.0;

/// Alpha cutoff used by threshold stages
pub const DEFAULT_ALPHA_THRESHOLD: f32 = 0.5;

// Output settings
/// Default output file name
pub const DEFAULT_OUTPUT: &str = "color_cubes.png";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Log filter used when neither `RUST_LOG` nor verbosity flags are set
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
