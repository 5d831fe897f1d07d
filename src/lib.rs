// src/lib.rs

//! Compiles transition tables authored for a triangular von Neumann
//! neighborhood into rules for a square-grid four-neighbor rule-tree
//! interpreter, plus a color-legend icon strip for the combined states.
//!
//! Each unit square of the emulated grid is split along the main diagonal
//! into a lower and an upper triangle; a square cell's state packs both
//! triangle states into one integer. [`emulate`] drives the whole run: it
//! fuses every compatible pair of triangular transitions into a combined
//! rule, adds single-triangle fallbacks, feeds the sequence to the host's
//! rule-tree compiler, and renders the legend through the host's bitmap
//! encoder. Hosts plug in through the traits in [`host`].

pub mod color;
pub mod compose;
pub mod emulate;
pub mod error;
pub mod host;
pub mod icon;
pub mod state;
pub mod table;

pub use color::{ColorTable, Rgb};
pub use emulate::emulate;
pub use error::EmulationError;
pub use host::{BitmapWriter, LogStatus, NullStatus, RuleTreeBuilder, StatusSink};
pub use icon::PixelGrid;
pub use state::{CombinedState, StateSet, TriState};
pub use table::{CombinedRule, Neighborhood, RuleTable, TransitionEntry};
