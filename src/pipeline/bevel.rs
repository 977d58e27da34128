//! Bump-mapped bevel lighting
//!
//! The alpha channel, softened by a Gaussian blur, acts as a height map.
//! Sobel gradients of that map give a surface normal per pixel, which is lit
//! by a single directional light. Flat regions receive `sin(elevation)`.

use ndarray::Zip;

use crate::io::configuration::{BEVEL_AZIMUTH, BEVEL_DEPTH, BEVEL_ELEVATION};
use crate::io::error::{Result, computation_error};
use crate::math::convolution::{gaussian_blur, sobel};
use crate::pipeline::stage::Stage;
use crate::spatial::RgbaBuffer;
use crate::spatial::buffer::ALPHA;

/// Lights the buffer as if its opaque areas were raised
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// Height scale of the bump map
    pub depth: f32,
    /// Light elevation in degrees
    pub elevation: f32,
    /// Light azimuth in degrees
    pub azimuth: f32,
}

impl Default for Bevel {
    fn default() -> Self {
        Self {
            depth: BEVEL_DEPTH,
            elevation: BEVEL_ELEVATION,
            azimuth: BEVEL_AZIMUTH,
        }
    }
}

impl Bevel {
    /// Unit vector pointing toward the light
    pub fn light_direction(&self) -> [f32; 3] {
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        [cos_el * cos_az, cos_el * sin_az, sin_el]
    }

    /// Lambert shade for a height gradient under `light`, clamped to `[0, 1]`
    ///
    /// `light` is the vector from [`Bevel::light_direction`], computed once
    /// per buffer.
    pub fn shade(&self, light: [f32; 3], gx: f32, gy: f32) -> f32 {
        let [lx, ly, lz] = light;
        let nx = -gx * self.depth;
        let ny = -gy * self.depth;
        let length = nx.mul_add(nx, ny.mul_add(ny, 1.0)).sqrt();
        (nx.mul_add(lx, ny.mul_add(ly, lz)) / length).clamp(0.0, 1.0)
    }
}

impl Stage for Bevel {
    fn name(&self) -> &'static str {
        "bevel"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let alpha = input
            .channel(ALPHA)
            .ok_or_else(|| computation_error("bevel", &"buffer has no alpha channel"))?;
        let (gx, gy) = sobel(&gaussian_blur(&alpha));

        let light = self.light_direction();
        let mut shading = gx.clone();
        Zip::from(&mut shading)
            .and(&gx)
            .and(&gy)
            .for_each(|shade, &dx, &dy| *shade = self.shade(light, dx, dy));

        for channel in 0..ALPHA {
            let mut plane = input.channel(channel).ok_or_else(|| {
                computation_error("bevel", &format!("missing channel {channel}"))
            })?;
            plane *= &shading;
            input.set_channel(channel, &plane)?;
        }

        Ok(input)
    }
}
