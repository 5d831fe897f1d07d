// src/host.rs
//
// Trait seams to the host application. The rule-tree compiler, the bitmap
// encoder, and the progress display all live on the host side; this crate
// only drives them.

use crate::icon::PixelGrid;
use crate::state::CombinedState;
use anyhow::Result;
use log::info;
use std::path::Path;

/// The host's rule-tree compiler.
///
/// The driver constructs one per run with the emulated state count
/// (`N * N`) and four neighbors, feeds it every composed rule in order, and
/// asks it to serialize itself. Compaction, compression, and the on-disk
/// format are entirely the implementation's business. Rules are expected to
/// match with first-inserted priority; the driver relies on that when it
/// appends the single-triangle fallback rules after the fused ones.
pub trait RuleTreeBuilder {
    /// Creates an empty tree over `num_states` cell states and
    /// `num_neighbors` neighbor slots.
    fn new(num_states: usize, num_neighbors: usize) -> Result<Self>
    where
        Self: Sized;

    /// Adds one rule. `pattern` is the center/south/east/west/north
    /// combined-state sets; `output` is the resulting combined state.
    fn add_rule(&mut self, pattern: [&[CombinedState]; 5], output: CombinedState) -> Result<()>;

    /// Compiles the accumulated rules and writes them to `path`.
    fn write(&mut self, path: &Path) -> Result<()>;
}

/// The host's image encoder. Receives the finished legend pixel grid and
/// owns the file format.
pub trait BitmapWriter {
    fn write(&mut self, pixels: &PixelGrid, path: &Path) -> Result<()>;
}

/// Side-channel progress display.
///
/// Messages are coarse phase markers and percentages for a status line;
/// they carry no data the emulation depends on.
pub trait StatusSink {
    fn show(&mut self, message: &str);
}

/// Forwards progress messages to the `log` facade.
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn show(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Swallows progress messages.
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn show(&mut self, _message: &str) {}
}
