// tests/colors_test.rs
//
// Sibling color-file resolution against the fixtures directory.

mod common;

use common::{take_written_tree, MemoryBitmaps, MemoryRuleTree};
use std::path::Path;
use test_log::test;
use tricell::{emulate, ColorTable, Neighborhood, NullStatus, Rgb, RuleTable, StateSet, TransitionEntry};

#[test]
fn loads_the_sibling_colors_file() {
    // The table file itself need not exist; only its .colors sibling is read.
    let colors = ColorTable::load(Path::new("tests/fixtures/langton.table"));
    assert_eq!(colors.color(1).unwrap(), Rgb(0, 255, 127));
    // `=` separators parse like whitespace.
    assert_eq!(colors.color(2).unwrap(), Rgb(127, 0, 255));
    // The three-field line and the gradient line are skipped.
    assert!(colors.color(3).is_err());
    assert_eq!(colors.color(4).unwrap(), Rgb(255, 0, 128));
    assert_eq!(colors.forced_background, None);
}

#[test]
fn missing_sibling_falls_back_to_the_default_palette() {
    let colors = ColorTable::load(Path::new("tests/fixtures/no_such.table"));
    assert_eq!(colors, ColorTable::default_palette());
    assert_eq!(colors.color(51).unwrap(), Rgb(189, 0, 94));
}

#[test]
fn forced_background_widens_the_emulated_legend() {
    let full = StateSet::from_states(&[0, 1]);
    let table = RuleTable {
        n_states: 2,
        neighborhood: Neighborhood::TriangularVonNeumann,
        entries: vec![TransitionEntry {
            cell: StateSet::from_states(&[0]),
            edge: full,
            far_a: full,
            far_b: full,
            next: StateSet::from_states(&[1]),
        }],
    };
    let mut bitmaps = MemoryBitmaps::default();

    emulate::<MemoryRuleTree, _>(
        &table,
        Path::new("tests/fixtures/forced.table"),
        Path::new("rules"),
        &mut bitmaps,
        &mut NullStatus,
    )
    .unwrap();
    take_written_tree();

    // 3 icon columns plus the forced-background swatch.
    let (legend, _) = &bitmaps.written[0];
    assert_eq!(legend.width, 60);
    assert_eq!(legend.get(59, 0), Rgb(0, 0, 80));
}
