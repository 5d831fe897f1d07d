// tests/common/mod.rs
//
// Recording stand-ins for the host collaborators. Each test binary uses its
// own subset of these.
#![allow(dead_code)]

use anyhow::{bail, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tricell::{BitmapWriter, CombinedState, PixelGrid, RuleTreeBuilder, StatusSink};

/// One `add_rule` call as the rule tree saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRule {
    pub pattern: [Vec<CombinedState>; 5],
    pub output: CombinedState,
}

/// Everything a [`MemoryRuleTree`] accumulated by the time it was written.
#[derive(Debug, Clone)]
pub struct TreeRecord {
    pub num_states: usize,
    pub num_neighbors: usize,
    pub rules: Vec<RecordedRule>,
    pub path: PathBuf,
}

thread_local! {
    static WRITTEN_TREE: RefCell<Option<TreeRecord>> = const { RefCell::new(None) };
}

/// Rule-tree collaborator that records rules instead of compiling them.
///
/// The driver constructs and owns the instance, so the recording surfaces
/// through [`take_written_tree`] once the driver has called `write`.
pub struct MemoryRuleTree {
    num_states: usize,
    num_neighbors: usize,
    rules: Vec<RecordedRule>,
}

impl RuleTreeBuilder for MemoryRuleTree {
    fn new(num_states: usize, num_neighbors: usize) -> Result<Self> {
        Ok(Self {
            num_states,
            num_neighbors,
            rules: Vec::new(),
        })
    }

    fn add_rule(&mut self, pattern: [&[CombinedState]; 5], output: CombinedState) -> Result<()> {
        self.rules.push(RecordedRule {
            pattern: pattern.map(|slot| slot.to_vec()),
            output,
        });
        Ok(())
    }

    fn write(&mut self, path: &Path) -> Result<()> {
        WRITTEN_TREE.with(|record| {
            *record.borrow_mut() = Some(TreeRecord {
                num_states: self.num_states,
                num_neighbors: self.num_neighbors,
                rules: self.rules.clone(),
                path: path.to_path_buf(),
            });
        });
        Ok(())
    }
}

/// The tree most recently written on this thread, if any.
pub fn take_written_tree() -> Option<TreeRecord> {
    WRITTEN_TREE.with(|record| record.borrow_mut().take())
}

/// Rule-tree collaborator whose serialization always fails.
#[allow(dead_code)]
pub struct UnwritableRuleTree;

impl RuleTreeBuilder for UnwritableRuleTree {
    fn new(_num_states: usize, _num_neighbors: usize) -> Result<Self> {
        Ok(Self)
    }

    fn add_rule(&mut self, _pattern: [&[CombinedState]; 5], _output: CombinedState) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, path: &Path) -> Result<()> {
        bail!("cannot write rule tree to {}", path.display())
    }
}

/// Bitmap collaborator keeping every grid it was asked to encode.
#[derive(Default)]
pub struct MemoryBitmaps {
    pub written: Vec<(PixelGrid, PathBuf)>,
}

impl BitmapWriter for MemoryBitmaps {
    fn write(&mut self, pixels: &PixelGrid, path: &Path) -> Result<()> {
        self.written.push((pixels.clone(), path.to_path_buf()));
        Ok(())
    }
}

/// Status sink keeping every message in order.
#[derive(Default)]
pub struct Transcript {
    pub messages: Vec<String>,
}

impl StatusSink for Transcript {
    fn show(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
