// src/icon.rs

//! Color-legend icon synthesis.
//!
//! The legend is a horizontal strip with one column per nonzero combined
//! state, each column showing the split square as a big 15×15 icon over a
//! small 7×7 one: the region above the main diagonal takes the upper
//! triangle's color, below it the lower triangle's, the diagonal itself is
//! black. Combined state 0 is the background and gets no icon; a forced
//! background color appends one solid swatch column at the right edge.

use crate::color::{ColorTable, Rgb, BLACK};
use crate::error::EmulationError;
use crate::state::{split_state, CombinedState};

/// Side length of the big icon; also the width of one strip column.
pub const ICON_SIZE: usize = 15;

/// Side length of the small icon drawn under the big one.
pub const SMALL_ICON_SIZE: usize = 7;

/// Strip height: the big icon plus the small icon below it.
pub const STRIP_HEIGHT: usize = ICON_SIZE + SMALL_ICON_SIZE;

/// A row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Rgb>,
}

impl PixelGrid {
    /// A grid of the given dimensions, filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![BLACK; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.data[y * self.width + x] = color;
    }

    /// The pixel rows, top to bottom. A zero-width grid has no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks(self.width.max(1))
    }
}

/// Renders the legend strip for an emulated table of `n_states * n_states`
/// combined states.
///
/// Fails when the color table lacks an entry for a state the strip needs.
pub fn synthesize_legend(
    n_states: u8,
    colors: &ColorTable,
) -> Result<PixelGrid, EmulationError> {
    let combined = n_states as usize * n_states as usize;
    let mut width = ICON_SIZE * (combined - 1);
    if colors.forced_background.is_some() {
        width += ICON_SIZE;
    }
    let mut grid = PixelGrid::new(width, STRIP_HEIGHT);

    for icon in 0..combined - 1 {
        let (lower, upper) = split_state((icon + 1) as CombinedState, n_states);
        let lower_color = colors.color(lower)?;
        let upper_color = colors.color(upper)?;
        for row in 0..STRIP_HEIGHT {
            for x in 0..ICON_SIZE {
                // The big icon spans the full column width; the small icon
                // only its first 7 pixels. Pixels right of the small icon
                // stay black.
                let diag = if row < ICON_SIZE {
                    row
                } else if x < SMALL_ICON_SIZE {
                    row - ICON_SIZE
                } else {
                    continue;
                };
                let color = if x > diag {
                    upper_color
                } else if x < diag {
                    lower_color
                } else {
                    BLACK
                };
                grid.set(icon * ICON_SIZE + x, row, color);
            }
        }
    }

    if let Some(background) = colors.forced_background {
        for row in 0..STRIP_HEIGHT {
            for x in width - ICON_SIZE..width {
                grid.set(x, row, background);
            }
        }
    }

    Ok(grid)
}
