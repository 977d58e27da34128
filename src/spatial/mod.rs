//! Spatial data structures for canvas regions
//!
//! This module contains spatial-related functionality including:
//! - Regions of interest and their tiling
//! - RGBA pixel buffers covering a region

/// Row-major RGBA buffers tied to a region
pub mod buffer;
/// Regions of interest and tile splitting
pub mod region;

pub use buffer::{Rgba, RgbaBuffer};
pub use region::Region;
