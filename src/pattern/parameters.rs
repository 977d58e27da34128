//! Typed, validated parameters for one render request

use std::ops::RangeInclusive;

use crate::io::configuration::{
    CUBE_SIZE_RANGE, DEFAULT_CUBE_SIZE, DEFAULT_ROTATION, DEFAULT_SEED, DEFAULT_SPACING,
    ROTATION_RANGE, SPACING_RANGE,
};
use crate::io::error::{Result, invalid_parameter};

/// Immutable cube pattern parameters
///
/// Construction enforces the documented bounds once, so renderers never see
/// a NaN, a non-positive lattice pitch or an out-of-range angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeParameters {
    cube_size: f64,
    spacing: f64,
    rotation: f64,
    seed: i64,
}

impl Default for CubeParameters {
    fn default() -> Self {
        Self {
            cube_size: DEFAULT_CUBE_SIZE,
            spacing: DEFAULT_SPACING,
            rotation: DEFAULT_ROTATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl CubeParameters {
    /// Create parameters after checking every value against its range
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cube_size` is outside `CUBE_SIZE_RANGE` or not finite
    /// - `spacing` is outside `SPACING_RANGE` or not finite
    /// - `rotation` is outside `ROTATION_RANGE` or not finite
    pub fn new(cube_size: f64, spacing: f64, rotation: f64, seed: i64) -> Result<Self> {
        check_range("cube_size", cube_size, &CUBE_SIZE_RANGE)?;
        check_range("spacing", spacing, &SPACING_RANGE)?;
        check_range("rotation", rotation, &ROTATION_RANGE)?;

        Ok(Self {
            cube_size,
            spacing,
            rotation,
            seed,
        })
    }

    /// Same parameters with a different seed
    #[must_use]
    pub const fn with_seed(self, seed: i64) -> Self {
        Self { seed, ..self }
    }

    /// Side length of each cube in pixels
    pub const fn cube_size(&self) -> f64 {
        self.cube_size
    }

    /// Lattice pitch as a multiple of the cube size
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Global rotation in degrees
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Color seed
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Distance between neighbouring cell centers
    pub fn grid_size(&self) -> f64 {
        self.cube_size * self.spacing
    }
}

// NaN fails `contains`, so it is rejected here too
fn check_range(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be within {}..={}", range.start(), range.end()),
        ))
    }
}
