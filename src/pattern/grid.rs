//! Grid mapping from canvas coordinates to cells
//!
//! Cells sit on a square lattice of pitch `cube_size * spacing`. Each pixel
//! belongs to exactly one cell, found by flooring its coordinates.

use num_traits::ToPrimitive;

use crate::io::error::{Result, invalid_parameter, non_finite};

/// Integer address of a cell on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// Column of the cell
    pub ix: i64,
    /// Row of the cell
    pub iy: i64,
}

impl CellIndex {
    /// Create a cell index
    pub const fn new(ix: i64, iy: i64) -> Self {
        Self { ix, iy }
    }
}

/// Displacement of a pixel from its cell center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalOffset {
    /// Horizontal displacement
    pub dx: f64,
    /// Vertical displacement
    pub dy: f64,
}

impl LocalOffset {
    /// Create an offset
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are finite
    pub const fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// A pixel's cell together with its offset from that cell's center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLocation {
    /// Cell containing the pixel
    pub cell: CellIndex,
    /// Offset from the cell center
    pub offset: LocalOffset,
}

/// Maps canvas coordinates onto the cell lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapper {
    grid_size: f64,
}

impl GridMapper {
    /// Create a mapper for the given cube size and spacing multiplier
    ///
    /// # Errors
    ///
    /// Returns an error if `cube_size * spacing` is not a positive finite
    /// number; a zero pitch would otherwise divide by zero on every pixel
    pub fn new(cube_size: f64, spacing: f64) -> Result<Self> {
        let grid_size = cube_size * spacing;
        if !grid_size.is_finite() || grid_size <= 0.0 {
            return Err(invalid_parameter(
                "grid_size",
                &grid_size,
                &"cube_size * spacing must be positive and finite",
            ));
        }
        Ok(Self { grid_size })
    }

    /// Lattice pitch in pixels
    pub const fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Find the cell containing `(x, y)` and the offset from its center
    ///
    /// # Errors
    ///
    /// Returns an error if the floored coordinate can't be represented as a
    /// cell index (NaN, infinite or beyond `i64`)
    pub fn locate(&self, x: f64, y: f64) -> Result<CellLocation> {
        let column = (x / self.grid_size).floor();
        let row = (y / self.grid_size).floor();

        let ix = column.to_i64().ok_or(non_finite("grid mapping"))?;
        let iy = row.to_i64().ok_or(non_finite("grid mapping"))?;

        let center_x = (column + 0.5) * self.grid_size;
        let center_y = (row + 0.5) * self.grid_size;

        Ok(CellLocation {
            cell: CellIndex::new(ix, iy),
            offset: LocalOffset::new(x - center_x, y - center_y),
        })
    }
}
