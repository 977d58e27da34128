//! Square cell classification

use crate::pattern::grid::LocalOffset;

/// Whether a pixel is drawn as part of a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Strictly inside the cube
    Interior,
    /// Outside the cube or exactly on its edge
    Background,
}

/// Axis-aligned square centered on the cell center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareCell {
    half_extent: f64,
}

impl SquareCell {
    /// Square with side `cube_size`
    pub fn new(cube_size: f64) -> Self {
        Self {
            half_extent: cube_size * 0.5,
        }
    }

    /// Half the side length
    pub const fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// Classify a rotated offset; boundary pixels are background
    pub fn classify(&self, offset: LocalOffset) -> Coverage {
        if offset.dx.abs() < self.half_extent && offset.dy.abs() < self.half_extent {
            Coverage::Interior
        } else {
            Coverage::Background
        }
    }
}
