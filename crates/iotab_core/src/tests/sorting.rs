//! Column sort controller tests.

use crate::dataset::{multiplier_effects, MultiplierRecord};
use crate::sort::{MultiplierColumn, SortConfig, SortDirection};

fn totals(rows: &[MultiplierRecord]) -> Vec<f64> {
    rows.iter().map(|r| r.total).collect()
}

#[test]
fn test_default_state_has_no_active_column() {
    // Constructible for key enums that carry no Default themselves.
    let config = SortConfig::<MultiplierColumn>::default();
    assert_eq!(config.key, None);
    assert_eq!(config.direction, SortDirection::Ascending);
}

#[test]
fn test_no_active_sort_keeps_input_order() {
    let rows = multiplier_effects();
    let config = SortConfig::<MultiplierColumn>::default();

    let sorted = config.apply(&rows);
    assert_eq!(sorted, rows);
}

#[test]
fn test_ascending_sort_by_total() {
    let rows = multiplier_effects();
    let mut config = SortConfig::default();
    config.toggle(MultiplierColumn::Total);

    let sorted = config.apply(&rows);
    assert_eq!(totals(&sorted), vec![1.43, 1.60, 1.76, 1.97]);
    assert_eq!(
        sorted.iter().map(|r| r.sector).collect::<Vec<_>>(),
        vec!["Perdagangan", "Pertanian", "Jasa", "Industri"]
    );
}

#[test]
fn test_descending_is_exact_reverse_of_ascending() {
    let rows = multiplier_effects();
    let mut config = SortConfig::default();

    config.toggle(MultiplierColumn::Total);
    let ascending = config.apply(&rows);

    config.toggle(MultiplierColumn::Total);
    let descending = config.apply(&rows);

    assert_eq!(totals(&descending), vec![1.97, 1.76, 1.60, 1.43]);
    let reversed: Vec<MultiplierRecord> = ascending.into_iter().rev().collect();
    assert_eq!(descending, reversed);
}

#[test]
fn test_triple_toggle_restores_direction() {
    let mut config = SortConfig::default();

    config.toggle(MultiplierColumn::Direct);
    assert_eq!(config.direction, SortDirection::Ascending);

    config.toggle(MultiplierColumn::Direct);
    assert_eq!(config.direction, SortDirection::Descending);

    config.toggle(MultiplierColumn::Direct);
    assert_eq!(config.direction, SortDirection::Ascending);
    assert!(config.is_active(MultiplierColumn::Direct));
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let mut config = SortConfig::default();

    config.toggle(MultiplierColumn::Total);
    config.toggle(MultiplierColumn::Total);
    assert_eq!(config.direction, SortDirection::Descending);

    config.toggle(MultiplierColumn::Indirect);
    assert!(config.is_active(MultiplierColumn::Indirect));
    assert_eq!(config.direction, SortDirection::Ascending);
}

#[test]
fn test_sorted_output_is_a_permutation() {
    let rows = multiplier_effects();
    let mut config = SortConfig::default();
    config.toggle(MultiplierColumn::Indirect);

    let sorted = config.apply(&rows);
    assert_eq!(sorted.len(), rows.len());
    for row in &rows {
        assert_eq!(
            sorted.iter().filter(|r| *r == row).count(),
            1,
            "record for {} lost or duplicated",
            row.sector
        );
    }
}

#[test]
fn test_input_is_not_mutated() {
    let rows = multiplier_effects();
    let before = rows.clone();

    let mut config = SortConfig::default();
    config.toggle(MultiplierColumn::Total);
    let _ = config.apply(&rows);

    assert_eq!(rows, before);
}

#[test]
fn test_ties_keep_input_order() {
    let rows = vec![
        MultiplierRecord { sector: "A", direct: 1.0, indirect: 0.5, total: 1.5 },
        MultiplierRecord { sector: "B", direct: 1.0, indirect: 0.3, total: 1.3 },
        MultiplierRecord { sector: "C", direct: 1.0, indirect: 0.4, total: 1.4 },
    ];
    let mut config = SortConfig::default();
    config.toggle(MultiplierColumn::Direct);

    let sorted = config.apply(&rows);
    // All direct values tie; stable sort keeps A, B, C.
    assert_eq!(
        sorted.iter().map(|r| r.sector).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
}

#[test]
fn test_clear_returns_to_input_order() {
    let rows = multiplier_effects();
    let mut config = SortConfig::default();
    config.toggle(MultiplierColumn::Total);
    config.clear();

    assert_eq!(config.key, None);
    assert_eq!(config.apply(&rows), rows);
}
