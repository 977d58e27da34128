//! Per-pixel cube pattern generation
//!
//! Every pixel is evaluated independently: the grid mapper locates its cell,
//! the rotator turns the offset from the cell center, the shape classifier
//! decides interior versus background, and the palette selector hashes the
//! cell index into a color.

/// Mapping from canvas coordinates to cells and local offsets
pub mod grid;
/// Fixed color palette and the spatial color hash
pub mod palette;
/// Validated render parameters
pub mod parameters;
/// Region rendering, serial and tiled
pub mod renderer;
/// Global rotation of local offsets
pub mod rotation;
/// Interior versus background classification
pub mod shape;

pub use grid::{CellIndex, CellLocation, GridMapper, LocalOffset};
pub use palette::{BACKGROUND, PaletteColor, color_index};
pub use parameters::CubeParameters;
pub use renderer::CubeRenderer;
pub use rotation::Rotation;
pub use shape::{Coverage, SquareCell};
