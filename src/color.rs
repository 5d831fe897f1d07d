// src/color.rs

//! State colors for the legend icons.
//!
//! A triangular rule table may ship a sibling `.colors` file naming an RGB
//! color per state; when it does not, a fixed built-in palette is used. The
//! resolved table maps every drawable `TriState` to a color and optionally
//! carries a forced background color that gets its own swatch in the legend.

use crate::error::EmulationError;
use crate::state::TriState;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);

/// The palette used when a rule table has no sibling `.colors` file.
/// Indexed by state; 52 entries, state 0 black.
static DEFAULT_PALETTE: Lazy<Vec<Rgb>> = Lazy::new(|| {
    [
        (0, 0, 0),
        (0, 255, 127),
        (127, 0, 255),
        (148, 148, 148),
        (128, 255, 0),
        (255, 0, 128),
        (0, 128, 255),
        (1, 159, 0),
        (159, 0, 1),
        (255, 254, 96),
        (0, 1, 159),
        (96, 255, 254),
        (254, 96, 255),
        (126, 125, 21),
        (21, 126, 125),
        (125, 21, 126),
        (255, 116, 116),
        (116, 255, 116),
        (116, 116, 255),
        (228, 227, 0),
        (28, 255, 27),
        (255, 27, 28),
        (0, 228, 227),
        (227, 0, 228),
        (27, 28, 255),
        (59, 59, 59),
        (234, 195, 176),
        (175, 196, 255),
        (171, 194, 68),
        (194, 68, 171),
        (68, 171, 194),
        (72, 184, 71),
        (184, 71, 72),
        (71, 72, 184),
        (169, 255, 188),
        (252, 179, 63),
        (63, 252, 179),
        (179, 63, 252),
        (80, 9, 0),
        (0, 80, 9),
        (9, 0, 80),
        (255, 175, 250),
        (199, 134, 213),
        (115, 100, 95),
        (188, 163, 0),
        (0, 188, 163),
        (163, 0, 188),
        (203, 73, 0),
        (0, 203, 73),
        (73, 0, 203),
        (94, 189, 0),
        (189, 0, 94),
    ]
    .iter()
    .map(|&(r, g, b)| Rgb(r, g, b))
    .collect()
});

/// State-to-color mapping for the legend, with an optional forced background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: HashMap<TriState, Rgb>,
    /// Set when the `.colors` file named a color for state 0: that color is
    /// rendered as an extra trailing swatch in the legend strip.
    pub forced_background: Option<Rgb>,
}

impl ColorTable {
    /// Resolves colors for the table at `table_path`.
    ///
    /// Looks for a sibling file with the same stem and the `colors`
    /// extension. When the file cannot be read the built-in palette is used;
    /// that is the normal case, not an error.
    pub fn load(table_path: &Path) -> Self {
        let sibling = table_path.with_extension("colors");
        match fs::read_to_string(&sibling) {
            Ok(text) => Self::parse(&text),
            Err(_) => {
                debug!(
                    "no color file at {}; using the default palette",
                    sibling.display()
                );
                Self::default_palette()
            }
        }
    }

    /// The built-in palette, states 0..=51, no forced background.
    pub fn default_palette() -> Self {
        Self {
            colors: DEFAULT_PALETTE
                .iter()
                .enumerate()
                .map(|(state, &rgb)| (state as TriState, rgb))
                .collect(),
            forced_background: None,
        }
    }

    /// Parses `.colors` file text.
    ///
    /// One directive per line: `color <state> <r> <g> <b>`, with `=` treated
    /// as whitespace. Other lines are ignored. A directive for state 0
    /// forces the background color instead of mapping state 0.
    pub fn parse(text: &str) -> Self {
        let mut table = Self {
            colors: HashMap::from([(0, BLACK)]),
            forced_background: None,
        };
        for line in text.lines() {
            let Some(rest) = line.strip_prefix("color ") else {
                continue;
            };
            let fields: Vec<u8> = rest
                .replace('=', " ")
                .split_whitespace()
                .map_while(|field| field.parse().ok())
                .collect();
            if fields.len() < 4 {
                warn!("skipping malformed color line: {:?}", line);
                continue;
            }
            let rgb = Rgb(fields[1], fields[2], fields[3]);
            if fields[0] == 0 {
                table.forced_background = Some(rgb);
            } else {
                table.colors.insert(fields[0], rgb);
            }
        }
        table
    }

    /// The color for `state`. Unmapped states are a hard failure: the icon
    /// for that state cannot be rendered.
    pub fn color(&self, state: TriState) -> Result<Rgb, EmulationError> {
        self.colors
            .get(&state)
            .copied()
            .ok_or(EmulationError::MissingColor(state))
    }
}
