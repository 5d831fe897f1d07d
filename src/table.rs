// src/table.rs

//! The input rule-table model and the composed-rule output unit.
//!
//! A `RuleTable` is handed to this crate already parsed: the upstream
//! collaborator owns the on-disk rule-table format. Each `TransitionEntry`
//! is one row of the original triangular table and is orientation-neutral —
//! the composer reads the same entry once as a lower-triangle rule and once
//! as an upper-triangle rule.

use crate::error::EmulationError;
use crate::state::{CombinedState, StateSet, MAX_STATES};
use serde::{Deserialize, Serialize};

/// Neighborhood shape tag supplied by the upstream parser.
///
/// Only `TriangularVonNeumann` tables can be emulated here; the Moore
/// variant has its own geometry and is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    TriangularVonNeumann,
    TriangularMoore,
}

/// One row of the original triangular rule table.
///
/// Every condition is a set of triangle states. `edge` constrains the
/// partner triangle across the shared diagonal of the same square; `far_a`
/// and `far_b` constrain the triangles in adjoining squares — south and west
/// of a lower triangle, north and east of an upper one. `next` must hold
/// exactly one state: the triangle's state after the transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub cell: StateSet,
    pub edge: StateSet,
    pub far_a: StateSet,
    pub far_b: StateSet,
    pub next: StateSet,
}

impl TransitionEntry {
    /// The single output state.
    pub fn single_output(&self) -> Result<u8, EmulationError> {
        self.next
            .solo()
            .ok_or(EmulationError::AmbiguousOutput { found: self.next.len() })
    }

    fn check(&self, n_states: u8) -> Result<(), String> {
        let full = StateSet::full(n_states);
        let components = [
            ("cell", self.cell),
            ("edge", self.edge),
            ("far_a", self.far_a),
            ("far_b", self.far_b),
            ("next", self.next),
        ];
        for (name, set) in components {
            if set.is_empty() {
                return Err(format!("{} condition is empty", name));
            }
            if set.bits() & !full.bits() != 0 {
                return Err(format!(
                    "{} condition {} names states outside 0..{}",
                    name, set, n_states
                ));
            }
        }
        if self.next.len() != 1 {
            return Err(format!(
                "expected exactly one output state, found {}",
                self.next.len()
            ));
        }
        Ok(())
    }
}

/// A parsed triangular rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// State count `N` of the triangular table; the emulated square grid
    /// runs on `N * N` states.
    pub n_states: u8,
    pub neighborhood: Neighborhood,
    pub entries: Vec<TransitionEntry>,
}

impl RuleTable {
    /// Fail-fast contract check over the whole table.
    ///
    /// The composition itself is a pure transformation and has no
    /// recoverable error path, so malformed input is rejected here before
    /// any rule is emitted.
    pub fn validate(&self) -> Result<(), EmulationError> {
        if self.n_states == 0 || self.n_states > MAX_STATES {
            return Err(EmulationError::BadStateCount(self.n_states));
        }
        if self.neighborhood != Neighborhood::TriangularVonNeumann {
            return Err(EmulationError::UnsupportedNeighborhood(self.neighborhood));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if let Err(reason) = entry.check(self.n_states) {
                return Err(EmulationError::InvalidTransition { index, reason });
            }
        }
        Ok(())
    }
}

/// One rule of the emulated square-grid table: five combined-state pattern
/// sets in the rule tree's center/south/east/west/north order, plus the
/// resulting combined state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRule {
    pub center: Vec<CombinedState>,
    pub south: Vec<CombinedState>,
    pub east: Vec<CombinedState>,
    pub west: Vec<CombinedState>,
    pub north: Vec<CombinedState>,
    pub next: CombinedState,
}

impl CombinedRule {
    /// The neighbor pattern in the order the rule-tree builder expects.
    pub fn pattern(&self) -> [&[CombinedState]; 5] {
        [
            self.center.as_slice(),
            self.south.as_slice(),
            self.east.as_slice(),
            self.west.as_slice(),
            self.north.as_slice(),
        ]
    }
}
