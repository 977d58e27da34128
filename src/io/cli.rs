//! Command-line interface for rendering cube patterns to PNG

use crate::io::configuration::{
    DEFAULT_CUBE_SIZE, DEFAULT_DARKEN_BEVEL, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_ROTATION,
    DEFAULT_SEED, DEFAULT_SPACING, DEFAULT_TILE_SIZE, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_buffer_as_png;
use crate::io::progress::ProgressManager;
use crate::pattern::CubeParameters;
use crate::pipeline::{ColorCubes, ColorCubesOptions};
use crate::spatial::Region;
use clap::{ArgAction, Parser};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "colorcubes")]
#[command(
    author,
    version,
    about = "Render seeded grids of colored cubes to PNG"
)]
/// Command-line arguments for the cube renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side length of each cube in pixels (10-200)
    #[arg(short, long, default_value_t = DEFAULT_CUBE_SIZE)]
    pub cube_size: f64,

    /// Lattice pitch as a multiple of cube size (1.0-2.0)
    #[arg(short = 'g', long, default_value_t = DEFAULT_SPACING)]
    pub spacing: f64,

    /// Rotation of every cube in degrees (0-360)
    #[arg(short, long, default_value_t = DEFAULT_ROTATION)]
    pub rotation: f64,

    /// Color seed for reproducible output
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Draw a fresh seed instead of using --seed
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,

    /// Left edge of the rendered region in canvas coordinates
    #[arg(short, default_value_t = 0, allow_negative_numbers = true)]
    pub x: i64,

    /// Top edge of the rendered region in canvas coordinates
    #[arg(short, default_value_t = 0, allow_negative_numbers = true)]
    pub y: i64,

    /// Width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Edge length of the tiles rendered in parallel
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Light the cubes with a bevel
    #[arg(short, long)]
    pub bevel: bool,

    /// Darken the bevel (1.0-4.0)
    #[arg(short, long, default_value_t = DEFAULT_DARKEN_BEVEL)]
    pub darken_bevel: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Render even if the output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for this run, drawing a random one when requested
    pub fn resolve_seed(&self) -> i64 {
        if self.random_seed {
            rand::random()
        } else {
            self.seed
        }
    }

    /// Validated pattern parameters using `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range
    pub fn parameters(&self, seed: i64) -> Result<CubeParameters> {
        CubeParameters::new(self.cube_size, self.spacing, self.rotation, seed)
    }

    /// Requested region of interest
    ///
    /// # Errors
    ///
    /// Returns an error if the region is empty or too large
    pub fn region(&self) -> Result<Region> {
        let region = Region::new(self.x, self.y, self.width, self.height)?;
        if region.is_empty() {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", self.width, self.height),
                &"width and height must be positive",
            ));
        }
        Ok(region)
    }

    /// Tile size as a non-zero value
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero
    pub fn tile_size(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.tile_size)
            .ok_or_else(|| invalid_parameter("tile_size", &self.tile_size, &"must be positive"))
    }
}

/// Runs one render described by the CLI arguments
pub struct RenderJob {
    cli: Cli,
    progress: ProgressManager,
}

impl RenderJob {
    /// Create a render job with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Render and export according to CLI arguments
    ///
    /// Returns `false` when the render was skipped because the output exists.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, rendering or export fails
    pub fn run(&self) -> Result<bool> {
        if self.cli.skip_existing() && self.cli.output.exists() {
            info!(
                output = %self.cli.output.display(),
                "skipping render, output exists"
            );
            return Ok(false);
        }

        let seed = self.cli.resolve_seed();
        let region = self.cli.region()?;
        let tile_size = self.cli.tile_size()?;
        let filter = ColorCubes::new(ColorCubesOptions {
            parameters: self.cli.parameters(seed)?,
            enable_bevel: self.cli.bevel,
            darken_bevel: self.cli.darken_bevel,
        })?;

        info!(
            seed,
            width = region.width(),
            height = region.height(),
            bevel = self.cli.bevel,
            "rendering color cubes"
        );

        let start_time = Instant::now();
        self.progress
            .initialize(region.tiles(tile_size).len(), "rendering");
        let rendered = filter.render(&region, tile_size, |_| self.progress.tile_completed());
        self.progress.finish();
        let buffer = rendered?;

        export_buffer_as_png(&buffer, &self.cli.output)?;

        info!(
            output = %self.cli.output.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "render complete"
        );

        Ok(true)
    }
}
