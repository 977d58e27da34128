//! Unsharp masking of the color channels

use ndarray::Zip;

use crate::io::configuration::BEVEL_SHARPEN_AMOUNT;
use crate::io::error::{Result, computation_error};
use crate::math::convolution::gaussian_blur;
use crate::pipeline::stage::Stage;
use crate::spatial::RgbaBuffer;
use crate::spatial::buffer::ALPHA;

/// Boosts local contrast by adding back the difference from a blurred copy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpen {
    /// Strength of the mask; 0 leaves the buffer unchanged
    pub amount: f32,
}

impl Default for Sharpen {
    fn default() -> Self {
        Self {
            amount: BEVEL_SHARPEN_AMOUNT,
        }
    }
}

impl Stage for Sharpen {
    fn name(&self) -> &'static str {
        "sharpen"
    }

    fn apply(&self, mut input: RgbaBuffer) -> Result<RgbaBuffer> {
        let amount = self.amount;
        for channel in 0..ALPHA {
            let mut plane = input.channel(channel).ok_or_else(|| {
                computation_error("sharpen", &format!("missing channel {channel}"))
            })?;
            let blurred = gaussian_blur(&plane);
            Zip::from(&mut plane).and(&blurred).for_each(|value, &soft| {
                *value = amount.mul_add(*value - soft, *value).clamp(0.0, 1.0);
            });
            input.set_channel(channel, &plane)?;
        }
        Ok(input)
    }
}
