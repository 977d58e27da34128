//! Axis-aligned regions of interest on an unbounded canvas

use std::num::NonZeroU32;

use crate::io::configuration::{MAX_CANVAS_COORDINATE, MAX_REGION_DIMENSION};
use crate::io::error::{Result, invalid_region};

/// Rectangle of canvas pixels requested by one render call
///
/// The origin may be negative; the canvas itself has no bounds. Width and
/// height are capped so a single buffer stays a sane allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

impl Region {
    /// Create a region after validating its origin and extent
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The origin lies outside `±MAX_CANVAS_COORDINATE`
    /// - Width or height exceeds `MAX_REGION_DIMENSION`
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Result<Self> {
        if x.unsigned_abs() > MAX_CANVAS_COORDINATE.unsigned_abs()
            || y.unsigned_abs() > MAX_CANVAS_COORDINATE.unsigned_abs()
        {
            return Err(invalid_region(&format!(
                "origin ({x}, {y}) is outside ±{MAX_CANVAS_COORDINATE}"
            )));
        }

        if width > MAX_REGION_DIMENSION || height > MAX_REGION_DIMENSION {
            return Err(invalid_region(&format!(
                "{width}x{height} exceeds the {MAX_REGION_DIMENSION} pixel limit"
            )));
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Leftmost column in canvas coordinates
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Topmost row in canvas coordinates
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Column one past the right edge
    pub const fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Row one past the bottom edge
    pub const fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a canvas pixel lies inside the region
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping part of two regions, if they share any pixel
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right > left && bottom > top).then(|| Self {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }

    /// Split into disjoint tiles of at most `tile_size` pixels per side
    ///
    /// Tiles are returned row-major and together cover the region exactly.
    pub fn tiles(&self, tile_size: NonZeroU32) -> Vec<Self> {
        let step = tile_size.get();
        let mut tiles = Vec::with_capacity(
            self.width.div_ceil(step) as usize * self.height.div_ceil(step) as usize,
        );

        let mut row = 0;
        while row < self.height {
            let tile_height = step.min(self.height - row);
            let mut col = 0;
            while col < self.width {
                let tile_width = step.min(self.width - col);
                tiles.push(Self {
                    x: self.x + i64::from(col),
                    y: self.y + i64::from(row),
                    width: tile_width,
                    height: tile_height,
                });
                col += tile_width;
            }
            row += tile_height;
        }

        tiles
    }
}
