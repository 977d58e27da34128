//! Fixed cube palette and the spatial color hash
//!
//! Colors are chosen without any random number generator: a cell's color is a
//! pure function of the seed and its integer index, so any tile of the canvas
//! can be rendered on its own and still agree with its neighbours.

use crate::io::configuration::{HASH_PRIME_X, HASH_PRIME_Y};
use crate::pattern::grid::CellIndex;
use crate::spatial::buffer::Rgba;

/// Opaque black drawn between cubes
pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];

/// The seven cube colors, in palette order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Index 0
    Red,
    /// Index 1
    Green,
    /// Index 2
    Blue,
    /// Index 3
    Yellow,
    /// Index 4
    Cyan,
    /// Index 5
    Magenta,
    /// Index 6
    Orange,
}

impl PaletteColor {
    /// Every palette entry in index order
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
        Self::Orange,
    ];

    /// Number of palette entries
    pub const COUNT: usize = Self::ALL.len();

    /// Palette entry at `index`, if it exists
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::Yellow),
            4 => Some(Self::Cyan),
            5 => Some(Self::Magenta),
            6 => Some(Self::Orange),
            _ => None,
        }
    }

    /// Position of this color in the palette
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Opaque RGBA value
    pub const fn rgba(self) -> Rgba {
        match self {
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Green => [0.0, 1.0, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.0, 1.0],
            Self::Cyan => [0.0, 1.0, 1.0, 1.0],
            Self::Magenta => [1.0, 0.0, 1.0, 1.0],
            Self::Orange => [1.0, 0.5, 0.0, 1.0],
        }
    }

    /// Color assigned to `cell` under `seed`
    pub const fn for_cell(seed: i64, cell: CellIndex) -> Self {
        match Self::from_index(color_index(seed, cell)) {
            Some(color) => color,
            // color_index is always below COUNT
            None => Self::Red,
        }
    }
}

/// Spatial hash of a cell in 32-bit wrapping arithmetic
///
/// Seed and indices are truncated to `i32` first and the sum wraps at 32
/// bits.
pub const fn cell_hash(seed: i64, cell: CellIndex) -> i32 {
    (seed as i32)
        .wrapping_add((cell.ix as i32).wrapping_mul(HASH_PRIME_X))
        .wrapping_add((cell.iy as i32).wrapping_mul(HASH_PRIME_Y))
}

/// Palette index in `0..7` for a cell
///
/// Euclidean remainder keeps the index non-negative for negative cells and
/// for hashes that wrapped past `i32::MIN`.
pub const fn color_index(seed: i64, cell: CellIndex) -> usize {
    cell_hash(seed, cell).rem_euclid(PaletteColor::COUNT as i32) as usize
}
