//! Region rendering for the cube pattern
//!
//! The renderer is a pure function of pixel coordinate and parameters, so
//! disjoint tiles can be rendered on any thread in any order and stitched
//! together without synchronization.

use std::num::NonZeroU32;

use ndarray::{Axis, aview1};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, trace};

use crate::io::error::{Result, WithContext, non_finite};
use crate::pattern::grid::{CellIndex, GridMapper};
use crate::pattern::palette::{BACKGROUND, PaletteColor};
use crate::pattern::parameters::CubeParameters;
use crate::pattern::rotation::Rotation;
use crate::pattern::shape::{Coverage, SquareCell};
use crate::spatial::{Region, Rgba, RgbaBuffer};

/// Renders cube patterns for arbitrary canvas regions
///
/// Grid pitch, rotation matrix and cube extent are derived once at
/// construction and shared read-only by every pixel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeRenderer {
    parameters: CubeParameters,
    mapper: GridMapper,
    rotation: Rotation,
    cell: SquareCell,
}

impl CubeRenderer {
    /// Prepare a renderer for the given parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters describe a non-positive grid pitch
    pub fn new(parameters: CubeParameters) -> Result<Self> {
        let mapper = GridMapper::new(parameters.cube_size(), parameters.spacing())?;

        Ok(Self {
            parameters,
            mapper,
            rotation: Rotation::from_degrees(parameters.rotation()),
            cell: SquareCell::new(parameters.cube_size()),
        })
    }

    /// Parameters this renderer was built from
    pub const fn parameters(&self) -> &CubeParameters {
        &self.parameters
    }

    /// Cell whose cube covers `(x, y)`, or `None` for background pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate produces a non-finite offset
    pub fn classify(&self, x: f64, y: f64) -> Result<Option<CellIndex>> {
        let location = self.mapper.locate(x, y).with_position(x, y)?;
        let rotated = self.rotation.apply(location.offset);

        if !rotated.is_finite() {
            return Err(non_finite("rotation")).with_position(x, y);
        }

        Ok(match self.cell.classify(rotated) {
            Coverage::Interior => Some(location.cell),
            Coverage::Background => None,
        })
    }

    /// Output color for the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate produces a non-finite offset
    pub fn shade(&self, x: f64, y: f64) -> Result<Rgba> {
        Ok(self.classify(x, y)?.map_or(BACKGROUND, |cell| {
            PaletteColor::for_cell(self.parameters.seed(), cell).rgba()
        }))
    }

    /// Render every pixel of `region` in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if any pixel produces a non-finite value; partially
    /// written output is discarded
    pub fn render_region(&self, region: &Region) -> Result<RgbaBuffer> {
        trace!(?region, "rendering region");
        let mut buffer = RgbaBuffer::new(*region);

        for (row, mut line) in buffer.data_mut().axis_iter_mut(Axis(0)).enumerate() {
            let y = (region.y() + row as i64) as f64;
            for (col, mut pixel) in line.axis_iter_mut(Axis(0)).enumerate() {
                let x = (region.x() + col as i64) as f64;
                pixel.assign(&aview1(&self.shade(x, y)?));
            }
        }

        Ok(buffer)
    }

    /// Render `region` as parallel tiles of at most `tile_size` pixels a side
    ///
    /// `on_tile` runs on the worker thread after each tile completes, which
    /// makes it suitable for progress reporting. The result is identical to
    /// [`CubeRenderer::render_region`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by any tile
    pub fn render_tiled<F>(
        &self,
        region: &Region,
        tile_size: NonZeroU32,
        on_tile: F,
    ) -> Result<RgbaBuffer>
    where
        F: Fn(&Region) + Sync,
    {
        let tiles = region.tiles(tile_size);
        debug!(
            ?region,
            tiles = tiles.len(),
            tile_size = tile_size.get(),
            "rendering tiled region"
        );

        let rendered = tiles
            .par_iter()
            .map(|tile| {
                let buffer = self.render_region(tile)?;
                on_tile(tile);
                Ok(buffer)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut output = RgbaBuffer::new(*region);
        for tile in &rendered {
            output.blit(tile);
        }

        Ok(output)
    }
}
