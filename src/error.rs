// src/error.rs

//! The crate error type.
//!
//! Everything the emulation itself can reject is a typed variant; failures
//! raised by the host's rule-tree builder or bitmap writer cross the trait
//! seam as `anyhow::Error` and are wrapped without retrying.

use crate::table::Neighborhood;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmulationError {
    #[error("unsupported neighborhood {0:?}: only triangular von Neumann tables can be emulated")]
    UnsupportedNeighborhood(Neighborhood),

    #[error("state count {0} out of range (expected 1..=64)")]
    BadStateCount(u8),

    #[error("transition {index} is malformed: {reason}")]
    InvalidTransition { index: usize, reason: String },

    #[error("transition must name exactly one output state, found {found}")]
    AmbiguousOutput { found: usize },

    #[error("transition condition `{component}` is empty")]
    EmptyCondition { component: &'static str },

    #[error("cannot derive a rule name from {0:?}")]
    BadSourcePath(std::path::PathBuf),

    #[error("no color defined for state {0}")]
    MissingColor(u8),

    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
