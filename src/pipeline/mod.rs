//! Composition of the cube generator with image-to-image stages
//!
//! Stages are pure transforms over [`RgbaBuffer`](crate::spatial::RgbaBuffer).
//! Feature toggles decide which stages are added when a pipeline is built;
//! a built pipeline never changes shape.

/// Bump-mapped lighting over the alpha channel
pub mod bevel;
/// Per-pixel color and alpha effects
pub mod effects;
/// The color cubes generator with its optional bevel chain
pub mod preset;
/// Unsharp masking
pub mod sharpen;
/// Stage trait and pipeline builder
pub mod stage;

pub use bevel::Bevel;
pub use effects::{BackgroundFill, ColorToAlpha, Crop, Gamma, Opacity, ThresholdAlpha};
pub use preset::{ColorCubes, ColorCubesOptions};
pub use sharpen::Sharpen;
pub use stage::{Pipeline, Stage};
