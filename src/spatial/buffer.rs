//! Row-major RGBA float buffers tied to a canvas region

use ndarray::{Array2, Array3, ArrayView3, Axis, AxisDescription, Slice, aview1};

use crate::io::error::{Result, computation_error, invalid_region};
use crate::spatial::region::Region;

/// Number of channels per pixel
pub const CHANNELS: usize = 4;

/// Index of the alpha channel
pub const ALPHA: usize = 3;

/// RGBA color with channels normalized to `[0, 1]`
pub type Rgba = [f32; CHANNELS];

/// Pixels for exactly one region, stored as `height × width × 4` floats
///
/// The backing array is in standard (row-major) layout so it can be handed to
/// consumers as a flat slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaBuffer {
    region: Region,
    data: Array3<f32>,
}

impl RgbaBuffer {
    /// Create a buffer with every channel set to zero
    pub fn new(region: Region) -> Self {
        Self {
            region,
            data: Array3::zeros((
                region.height() as usize,
                region.width() as usize,
                CHANNELS,
            )),
        }
    }

    /// Create a buffer with every pixel set to `color`
    pub fn filled(region: Region, color: Rgba) -> Self {
        let mut buffer = Self::new(region);
        for mut pixel in buffer.data.lanes_mut(Axis(2)) {
            pixel.assign(&aview1(&color));
        }
        buffer
    }

    /// Wrap existing pixel data
    ///
    /// # Errors
    ///
    /// Returns an error if the array shape doesn't match the region
    pub fn from_array(region: Region, data: Array3<f32>) -> Result<Self> {
        let expected = (
            region.height() as usize,
            region.width() as usize,
            CHANNELS,
        );
        if data.dim() != expected {
            return Err(computation_error(
                "buffer construction",
                &format!("shape {:?} does not match region {expected:?}", data.dim()),
            ));
        }
        Ok(Self { region, data })
    }

    /// Region this buffer covers
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.region.width()
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.region.height()
    }

    /// Read-only view of the pixel array
    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    /// Mutable access to the pixel array
    pub const fn data_mut(&mut self) -> &mut Array3<f32> {
        &mut self.data
    }

    /// Consume the buffer and return the pixel array
    pub fn into_array(self) -> Array3<f32> {
        self.data
    }

    /// Flat row-major channel data, `width * height * 4` floats long
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.data.as_slice()
    }

    /// Pixel at local column and row
    pub fn pixel(&self, col: u32, row: u32) -> Option<Rgba> {
        if col >= self.width() || row >= self.height() {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let lane = self
            .data
            .index_axis(Axis(0), row)
            .index_axis_move(Axis(0), col);
        let mut values = lane.iter().copied();
        Some([
            values.next()?,
            values.next()?,
            values.next()?,
            values.next()?,
        ])
    }

    /// Pixel at absolute canvas coordinates
    pub fn pixel_at(&self, x: i64, y: i64) -> Option<Rgba> {
        if !self.region.contains(x, y) {
            return None;
        }
        self.pixel(
            (x - self.region.x()) as u32,
            (y - self.region.y()) as u32,
        )
    }

    /// Overwrite the pixel at local column and row
    pub fn set_pixel(&mut self, col: u32, row: u32, color: Rgba) {
        if col < self.width() && row < self.height() {
            let (row, col) = (row as usize, col as usize);
            self.data
                .index_axis_mut(Axis(0), row)
                .index_axis_move(Axis(0), col)
                .assign(&aview1(&color));
        }
    }

    /// Copy of one channel as a `height × width` plane
    pub fn channel(&self, channel: usize) -> Option<Array2<f32>> {
        (channel < CHANNELS).then(|| self.data.index_axis(Axis(2), channel).to_owned())
    }

    /// Replace one channel with a `height × width` plane
    ///
    /// # Errors
    ///
    /// Returns an error if the channel index or plane shape is invalid
    pub fn set_channel(&mut self, channel: usize, plane: &Array2<f32>) -> Result<()> {
        if channel >= CHANNELS {
            return Err(computation_error(
                "set channel",
                &format!("channel {channel} out of range"),
            ));
        }
        let mut target = self.data.index_axis_mut(Axis(2), channel);
        if target.dim() != plane.dim() {
            return Err(computation_error(
                "set channel",
                &format!("plane {:?} does not match {:?}", plane.dim(), target.dim()),
            ));
        }
        target.assign(plane);
        Ok(())
    }

    /// Apply `f` to every pixel in place
    pub fn map_pixels(&mut self, mut f: impl FnMut(Rgba) -> Rgba) {
        for mut lane in self.data.lanes_mut(Axis(2)) {
            let channels = {
                let mut values = lane.iter().copied();
                [values.next(), values.next(), values.next(), values.next()]
            };
            let [Some(r), Some(g), Some(b), Some(a)] = channels else {
                continue;
            };
            lane.assign(&aview1(&f([r, g, b, a])));
        }
    }

    /// Whether every channel holds a finite value
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }

    /// Copy the overlapping pixels of `source` into this buffer
    ///
    /// Returns the number of pixels copied.
    pub fn blit(&mut self, source: &Self) -> usize {
        let Some(overlap) = self.region.intersect(&source.region) else {
            return 0;
        };

        let (dst_rows, dst_cols) = local_bounds(&self.region, &overlap);
        let (src_rows, src_cols) = local_bounds(&source.region, &overlap);

        self.data
            .slice_each_axis_mut(window(dst_rows, dst_cols))
            .assign(&source.data.slice_each_axis(window(src_rows, src_cols)));

        overlap.pixel_count()
    }

    /// New buffer holding only the part inside `target`
    ///
    /// # Errors
    ///
    /// Returns an error if `target` doesn't overlap this buffer
    pub fn crop(&self, target: &Region) -> Result<Self> {
        let overlap = self.region.intersect(target).ok_or_else(|| {
            invalid_region(&format!(
                "crop target {target:?} does not overlap {:?}",
                self.region
            ))
        })?;

        let (rows, cols) = local_bounds(&self.region, &overlap);
        Ok(Self {
            region: overlap,
            data: self
                .data
                .slice_each_axis(window(rows, cols))
                .to_owned(),
        })
    }
}

// Local (row, col) index ranges of `inner` within `outer`
fn local_bounds(outer: &Region, inner: &Region) -> ((usize, usize), (usize, usize)) {
    let row_start = (inner.y() - outer.y()) as usize;
    let col_start = (inner.x() - outer.x()) as usize;
    (
        (row_start, row_start + inner.height() as usize),
        (col_start, col_start + inner.width() as usize),
    )
}

// Row and column ranges as a per-axis slice, keeping every channel
fn window(rows: (usize, usize), cols: (usize, usize)) -> impl Fn(AxisDescription) -> Slice {
    move |description| match description.axis.index() {
        0 => Slice::from(rows.0..rows.1),
        1 => Slice::from(cols.0..cols.1),
        _ => Slice::from(..),
    }
}
