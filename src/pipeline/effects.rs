//! Per-pixel color and alpha stages

use crate::io::configuration::DEFAULT_ALPHA_THRESHOLD;
use crate::io::error::Result;
use crate::pipeline::stage::Stage;
use crate::spatial::{Region, Rgba, RgbaBuffer};

/// Turns one color into transparency
///
/// Each channel's distance from the key color is measured against the
/// furthest value it could reach; the largest ratio becomes alpha and the
/// color is un-mixed from the key so that compositing it back over the key
/// color reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorToAlpha {
    /// Color to remove
    pub color: Rgba,
}

impl ColorToAlpha {
    fn extract(&self, pixel: Rgba) -> Rgba {
        let [r, g, b, a] = pixel;
        let [kr, kg, kb, _] = self.color;

        let ratio = |value: f32, key: f32| {
            if value > key {
                (value - key) / (1.0 - key)
            } else if value < key {
                (key - value) / key
            } else {
                0.0
            }
        };

        let alpha = ratio(r, kr).max(ratio(g, kg)).max(ratio(b, kb));
        if alpha <= f32::EPSILON {
            return [0.0, 0.0, 0.0, 0.0];
        }

        let unmix = |value: f32, key: f32| ((value - key) / alpha + key).clamp(0.0, 1.0);
        [unmix(r, kr), unmix(g, kg), unmix(b, kb), alpha * a]
    }
}

impl Stage for ColorToAlpha {
    fn name(&self) -> &'static str {
        "color-to-alpha"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        input.map_pixels(|pixel| self.extract(pixel));
        Ok(input)
    }
}

/// Composites the buffer over an opaque color ("dst-over")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFill {
    /// Color placed behind every pixel
    pub color: Rgba,
}

impl Stage for BackgroundFill {
    fn name(&self) -> &'static str {
        "background-fill"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let [br, bg, bb, _] = self.color;
        input.map_pixels(|[r, g, b, a]| {
            let behind = 1.0 - a;
            [
                br.mul_add(behind, r * a),
                bg.mul_add(behind, g * a),
                bb.mul_add(behind, b * a),
                1.0,
            ]
        });
        Ok(input)
    }
}

/// Keeps only the part of the buffer inside a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    /// Region to keep
    pub region: Region,
}

impl Stage for Crop {
    fn name(&self) -> &'static str {
        "crop"
    }

    fn apply(&self, input: RgbaBuffer) -> Result<RgbaBuffer> {
        input.crop(&self.region)
    }
}

/// Raises the color channels to a power; exponents above 1 darken
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    /// Exponent applied to red, green and blue
    pub exponent: f32,
}

impl Stage for Gamma {
    fn name(&self) -> &'static str {
        "gamma"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let exponent = self.exponent;
        input.map_pixels(|[r, g, b, a]| {
            [
                r.max(0.0).powf(exponent),
                g.max(0.0).powf(exponent),
                b.max(0.0).powf(exponent),
                a,
            ]
        });
        Ok(input)
    }
}

/// Scales alpha by a constant factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity {
    /// Multiplier for the alpha channel
    pub factor: f32,
}

impl Stage for Opacity {
    fn name(&self) -> &'static str {
        "opacity"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let factor = self.factor;
        input.map_pixels(|[r, g, b, a]| [r, g, b, (a * factor).clamp(0.0, 1.0)]);
        Ok(input)
    }
}

/// Snaps alpha to fully opaque or fully transparent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdAlpha {
    /// Alpha at or above this value becomes 1
    pub threshold: f32,
}

impl Default for ThresholdAlpha {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl Stage for ThresholdAlpha {
    fn name(&self) -> &'static str {
        "threshold-alpha"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let threshold = self.threshold;
        input.map_pixels(|[r, g, b, a]| [r, g, b, if a >= threshold { 1.0 } else { 0.0 }]);
        Ok(input)
    }
}
