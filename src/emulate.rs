// src/emulate.rs

//! The emulation driver.
//!
//! Turns a parsed triangular rule table into two files in the host's rules
//! directory: a compiled rule tree the square-grid interpreter can run, and
//! a color-legend icon strip. The rule-tree compiler and the bitmap encoder
//! are host collaborators reached through the traits in [`crate::host`].

use crate::color::ColorTable;
use crate::compose::compose_table;
use crate::error::EmulationError;
use crate::host::{BitmapWriter, RuleTreeBuilder, StatusSink};
use crate::icon::synthesize_legend;
use crate::table::RuleTable;
use log::info;
use std::path::Path;

/// Suffix appended to the source stem to name the emulated rule.
pub const EMULATED_SUFFIX: &str = "_emulated";

/// Extension of the serialized rule-tree file.
pub const TREE_EXTENSION: &str = "tree";

/// Extension of the legend image file.
pub const ICONS_EXTENSION: &str = "icons";

/// Emulates a triangular von Neumann table on the square four-neighbor grid.
///
/// `source_path` is the table's originating file: its stem names the two
/// outputs and its sibling `.colors` file, if any, supplies the legend
/// palette. Both outputs land in `rules_dir`. Returns the emulated rule
/// name, `<stem>_emulated`.
///
/// The rule tree is built over `n_states * n_states` combined states and
/// four neighbors; rules are inserted in the order [`compose_table`]
/// produces them, fused rules before fallbacks. Collaborator failures
/// propagate unchanged.
pub fn emulate<T, W>(
    table: &RuleTable,
    source_path: &Path,
    rules_dir: &Path,
    bitmaps: &mut W,
    status: &mut dyn StatusSink,
) -> Result<String, EmulationError>
where
    T: RuleTreeBuilder,
    W: BitmapWriter,
{
    table.validate()?;
    let stem = source_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| EmulationError::BadSourcePath(source_path.to_path_buf()))?;
    let rule_name = format!("{}{}", stem, EMULATED_SUFFIX);

    let rules = compose_table(table, status)?;
    let combined_states = table.n_states as usize * table.n_states as usize;
    let mut tree = T::new(combined_states, 4)?;
    for rule in &rules {
        tree.add_rule(rule.pattern(), rule.next)?;
    }
    status.show("Compressing rule tree and saving to file...");
    let tree_path = rules_dir.join(format!("{}.{}", rule_name, TREE_EXTENSION));
    tree.write(&tree_path)?;
    info!("wrote {} rules to {}", rules.len(), tree_path.display());

    status.show("Generating icons...");
    let colors = ColorTable::load(source_path);
    let legend = synthesize_legend(table.n_states, &colors)?;
    let icons_path = rules_dir.join(format!("{}.{}", rule_name, ICONS_EXTENSION));
    bitmaps.write(&legend, &icons_path)?;
    info!("wrote legend to {}", icons_path.display());

    Ok(rule_name)
}
