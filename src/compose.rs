// src/compose.rs

//! Fuses triangular transitions into square-grid rules.
//!
//! Each square of the emulated grid holds a lower and an upper triangle.
//! Every ordered pair of table entries is tried with the first entry read as
//! the lower triangle's rule and the second as the upper's; when the two
//! entries can describe a jointly-consistent square they fuse into one
//! combined rule. Two single-triangle fallback rules per entry then cover
//! squares where only one triangle's transition applies.
//!
//! Geometry of one square and its four neighbors, lower triangle on the
//! left, upper on the right:
//!
//! ```text
//!      lower         upper
//!       +--+          +--+
//!       |\ |          |\ |
//!       | \|          |2\|
//!    +--+--+--+    +--+--+--+
//!    |\3|\1|\ |    |\ |\0|\ |
//!    | \|0\| \|    | \|1\|3\|
//!    +--+--+--+    +--+--+--+
//!       |\2|          |\ |
//!       | \|          | \|
//!       +--+          +--+
//! ```
//!
//! The lower triangle's own square supplies the south and west neighbors of
//! the combined cell, the upper triangle's the north and east.

use crate::error::EmulationError;
use crate::host::StatusSink;
use crate::state::{all_pairs, encode, pair_state, StateSet, TriState};
use crate::table::{CombinedRule, RuleTable, TransitionEntry};
use log::debug;

/// Condition-component pairs `(lower index, upper index)` that describe the
/// same physical triangle when two entries share a square: component 0 is an
/// entry's own state (`cell`), component 1 its shared-edge neighbor
/// (`edge`). The lower triangle *is* the upper's edge neighbor and vice
/// versa. Fixed by the split-square geometry; never data-dependent.
const LOWER_TO_UPPER: [(usize, usize); 2] = [(0, 1), (1, 0)];

fn shared_component(entry: &TransitionEntry, component: usize) -> StateSet {
    match component {
        0 => entry.cell,
        _ => entry.edge,
    }
}

/// Whether a lower-triangle entry and an upper-triangle entry can fuse.
///
/// Legal only if both corresponding condition pairs intersect; a disjoint
/// pair means no square state satisfies both entries at once.
pub fn overlaps(lower: &TransitionEntry, upper: &TransitionEntry) -> bool {
    LOWER_TO_UPPER
        .iter()
        .all(|&(j, k)| !shared_component(lower, j).is_disjoint(shared_component(upper, k)))
}

/// Fuses two overlapping entries into one combined rule.
///
/// The center keeps only the states compatible with both entries: each
/// triangle's own condition is intersected with the partner's shared-edge
/// condition. Far neighbors are owned by one triangle each, so the other
/// triangle's slot is a full wildcard.
pub fn fuse(
    lower: &TransitionEntry,
    upper: &TransitionEntry,
    n_states: u8,
) -> Result<CombinedRule, EmulationError> {
    let full = StateSet::full(n_states);
    Ok(CombinedRule {
        center: encode(lower.cell & upper.edge, lower.edge & upper.cell, n_states),
        south: encode(full, lower.far_a, n_states),
        east: encode(upper.far_b, full, n_states),
        west: encode(full, lower.far_b, n_states),
        north: encode(upper.far_a, full, n_states),
        next: pair_state(lower.single_output()?, upper.single_output()?, n_states),
    })
}

/// The smallest partner state an entry's edge condition admits; the
/// fallback rules leave the partner triangle in that state.
fn passthrough_partner(entry: &TransitionEntry) -> Result<TriState, EmulationError> {
    entry
        .edge
        .min_state()
        .ok_or(EmulationError::EmptyCondition { component: "edge" })
}

/// The fallback rule applying `entry` to the lower triangle only.
///
/// East and north belong to the upper triangle, which this rule does not
/// constrain, so both are the full combined range.
pub fn as_lower_rule(
    entry: &TransitionEntry,
    n_states: u8,
) -> Result<CombinedRule, EmulationError> {
    let full = StateSet::full(n_states);
    Ok(CombinedRule {
        center: encode(entry.cell, entry.edge, n_states),
        south: encode(full, entry.far_a, n_states),
        east: all_pairs(n_states),
        west: encode(full, entry.far_b, n_states),
        north: all_pairs(n_states),
        next: pair_state(entry.single_output()?, passthrough_partner(entry)?, n_states),
    })
}

/// The fallback rule applying `entry` to the upper triangle only; the
/// mirror of [`as_lower_rule`] with the cell/edge slots and the owned
/// directions swapped.
pub fn as_upper_rule(
    entry: &TransitionEntry,
    n_states: u8,
) -> Result<CombinedRule, EmulationError> {
    let full = StateSet::full(n_states);
    Ok(CombinedRule {
        center: encode(entry.edge, entry.cell, n_states),
        south: all_pairs(n_states),
        east: encode(entry.far_b, full, n_states),
        west: all_pairs(n_states),
        north: encode(entry.far_a, full, n_states),
        next: pair_state(passthrough_partner(entry)?, entry.single_output()?, n_states),
    })
}

/// Composes the full combined-rule sequence for a table.
///
/// Fused rules come first (lower entries outer, upper entries inner, both in
/// table order), then the per-entry fallback rules (table order, lower rule
/// before upper rule). The rule tree matches first-inserted rules with
/// priority, so this sequence makes the fallbacks true fallbacks. Iteration
/// order is stable: the same table always yields the same sequence.
///
/// Progress is reported through `status` as a coarse percentage over the
/// pairwise phase.
pub fn compose_table(
    table: &RuleTable,
    status: &mut dyn StatusSink,
) -> Result<Vec<CombinedRule>, EmulationError> {
    table.validate()?;
    let n_states = table.n_states;
    let mut rules = Vec::new();
    for (i, lower) in table.entries.iter().enumerate() {
        status.show(&format!(
            "Building rule tree... ({}%)",
            100 * i / table.entries.len()
        ));
        for upper in &table.entries {
            if !overlaps(lower, upper) {
                continue;
            }
            rules.push(fuse(lower, upper, n_states)?);
        }
    }
    let fused = rules.len();
    for entry in &table.entries {
        rules.push(as_lower_rule(entry, n_states)?);
        rules.push(as_upper_rule(entry, n_states)?);
    }
    debug!(
        "composed {} rules ({} fused, {} fallback) from {} transitions",
        rules.len(),
        fused,
        rules.len() - fused,
        table.entries.len()
    );
    Ok(rules)
}
