//! Global rotation applied to local offsets before classification

use crate::pattern::grid::LocalOffset;

/// One rotation matrix shared by every cell
///
/// The matrix turns offsets from each cell's center, but the lattice itself
/// stays axis-aligned, which shears the boundary grid rather than spinning
/// whole tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    degrees: f64,
    cos: f64,
    sin: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    /// Rotation that leaves offsets unchanged
    pub const fn identity() -> Self {
        Self {
            degrees: 0.0,
            cos: 1.0,
            sin: 0.0,
        }
    }

    /// Build the matrix for an angle in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { degrees, cos, sin }
    }

    /// Angle in degrees
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Rotate an offset counter-clockwise in canvas space
    pub fn apply(&self, offset: LocalOffset) -> LocalOffset {
        LocalOffset::new(
            offset.dx.mul_add(self.cos, -(offset.dy * self.sin)),
            offset.dx.mul_add(self.sin, offset.dy * self.cos),
        )
    }
}
