//! PNG export of rendered buffers

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{RenderError, Result};
use crate::spatial::RgbaBuffer;

/// Quantize a normalized channel to 8 bits
pub fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a float buffer into an 8-bit RGBA image of the same size
pub fn to_rgba8(buffer: &RgbaBuffer) -> RgbaImage {
    ImageBuffer::from_fn(buffer.width(), buffer.height(), |col, row| {
        let [r, g, b, a] = buffer.pixel(col, row).unwrap_or([0.0; 4]);
        Rgba([quantize(r), quantize(g), quantize(b), quantize(a)])
    })
}

/// Export a rendered buffer as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The buffer covers no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_buffer_as_png(buffer: &RgbaBuffer, output_path: &Path) -> Result<()> {
    if buffer.region().is_empty() {
        return Err(RenderError::InvalidRegion {
            reason: "Cannot export an empty region".to_string(),
        });
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    to_rgba8(buffer)
        .save(output_path)
        .map_err(|e| RenderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
