//! Seeded procedural grids of colored cubes
//!
//! Every pixel is mapped to a cell on a square lattice, its offset from the
//! cell center is rotated by one global angle, and pixels strictly inside the
//! cube take a palette color hashed from the seed and the cell index. The
//! result depends on nothing but the pixel coordinate and the parameters, so
//! any region of the unbounded canvas can be rendered on its own, in any
//! order, on any number of threads.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Convolution helpers for image stages
pub mod math;
/// Per-pixel cube pattern generation
pub mod pattern;
/// Composable image stages and the color cubes filter
pub mod pipeline;
/// Regions of interest and RGBA buffers
pub mod spatial;

pub use io::error::{RenderError, Result};
