//! The color cubes filter: generator plus optional bevel chain

use std::num::NonZeroU32;

use tracing::debug;

use crate::io::configuration::{DARKEN_BEVEL_RANGE, DEFAULT_DARKEN_BEVEL};
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::{BACKGROUND, CubeParameters, CubeRenderer};
use crate::pipeline::bevel::Bevel;
use crate::pipeline::effects::{BackgroundFill, ColorToAlpha, Crop, Gamma};
use crate::pipeline::sharpen::Sharpen;
use crate::pipeline::stage::Pipeline;
use crate::spatial::{Region, RgbaBuffer};

/// User-facing options of the color cubes filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCubesOptions {
    /// Pattern parameters forwarded to the generator
    pub parameters: CubeParameters,
    /// Light the cubes with a bevel
    pub enable_bevel: bool,
    /// Gamma exponent darkening the bevel, within `DARKEN_BEVEL_RANGE`
    pub darken_bevel: f64,
}

impl Default for ColorCubesOptions {
    fn default() -> Self {
        Self {
            parameters: CubeParameters::default(),
            enable_bevel: false,
            darken_bevel: DEFAULT_DARKEN_BEVEL,
        }
    }
}

/// Cube generator followed by the stages its options select
#[derive(Debug)]
pub struct ColorCubes {
    renderer: CubeRenderer,
    options: ColorCubesOptions,
}

impl ColorCubes {
    /// Validate options and prepare the generator
    ///
    /// # Errors
    ///
    /// Returns an error if `darken_bevel` is out of range or the pattern
    /// parameters are rejected by the renderer
    pub fn new(options: ColorCubesOptions) -> Result<Self> {
        if !DARKEN_BEVEL_RANGE.contains(&options.darken_bevel) {
            return Err(invalid_parameter(
                "darken_bevel",
                &options.darken_bevel,
                &format!(
                    "must be within {}..={}",
                    DARKEN_BEVEL_RANGE.start(),
                    DARKEN_BEVEL_RANGE.end()
                ),
            ));
        }

        Ok(Self {
            renderer: CubeRenderer::new(options.parameters)?,
            options,
        })
    }

    /// Underlying generator
    pub const fn renderer(&self) -> &CubeRenderer {
        &self.renderer
    }

    /// Options this filter was built from
    pub const fn options(&self) -> &ColorCubesOptions {
        &self.options
    }

    /// Post-processing stages for a render of `region`
    ///
    /// With the bevel disabled the pipeline is empty and the generator output
    /// passes through untouched.
    pub fn pipeline(&self, region: &Region) -> Pipeline {
        let darken = self.options.darken_bevel as f32;
        let enabled = self.options.enable_bevel;

        Pipeline::new()
            .then_if(enabled, || ColorToAlpha { color: BACKGROUND })
            .then_if(enabled, Bevel::default)
            .then_if(enabled, || BackgroundFill { color: BACKGROUND })
            .then_if(enabled, || Crop { region: *region })
            .then_if(enabled, Sharpen::default)
            .then_if(enabled, || Gamma { exponent: darken })
    }

    /// Render `region` in parallel tiles and run the selected stages
    ///
    /// # Errors
    ///
    /// Returns an error if the generator or any stage fails
    pub fn render<F>(&self, region: &Region, tile_size: NonZeroU32, on_tile: F) -> Result<RgbaBuffer>
    where
        F: Fn(&Region) + Sync,
    {
        let pipeline = self.pipeline(region);
        debug!(stages = ?pipeline.stage_names(), "color cubes pipeline");

        let generated = self.renderer.render_tiled(region, tile_size, on_tile)?;
        pipeline.run(generated)
    }
}
