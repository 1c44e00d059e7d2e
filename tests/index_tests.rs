mod common;
use common::{activity_rows, e, n, t};
use trackerpane::core::{ActivityIndex, ActivityLayout, resolve_activity_layout};
use trackerpane::models::CellValue;

fn key_first_layout() -> ActivityLayout {
    ActivityLayout {
        issue_id: 0,
        date: 1,
        description: 2,
        missing: Vec::new(),
    }
}

fn descriptions(index: &ActivityIndex, id: i64) -> Vec<String> {
    index
        .lookup(id)
        .iter()
        .map(|a| a.description.clone())
        .collect()
}

#[test]
fn test_lookup_returns_matching_rows_in_order() {
    let rows = vec![
        vec![n(1.0), n(45296.0), t("a")],
        vec![n(2.0), n(45297.0), t("b")],
        vec![n(1.0), n(45298.0), t("c")],
    ];

    let mut index = ActivityIndex::new();
    index.rebuild(&rows, &key_first_layout(), 0, 0.0);

    assert_eq!(descriptions(&index, 1), vec!["a", "c"]);
    assert_eq!(descriptions(&index, 2), vec!["b"]);
    assert!(index.lookup(3).is_empty());
    assert_eq!(index.len(), 3);
    assert_eq!(index.issue_count(), 2);
}

#[test]
fn test_rows_with_empty_key_are_excluded() {
    let rows = vec![
        vec![n(1.0), n(45296.0), t("a")],
        vec![e(), n(45297.0), t("no key")],
        vec![t("   "), n(45297.0), t("blank key")],
        vec![],
    ];

    let mut index = ActivityIndex::new();
    let summary = index.rebuild(&rows, &key_first_layout(), 0, 0.0);

    assert_eq!(summary.indexed, 1);
    assert_eq!(summary.skipped_empty, 3);
    assert_eq!(descriptions(&index, 1), vec!["a"]);
}

#[test]
fn test_fractional_and_text_keys_are_not_indexed() {
    let rows = vec![
        vec![n(1.5), n(45296.0), t("fraction")],
        vec![t("abc"), n(45296.0), t("text")],
        vec![t("7"), n(45296.0), t("numeric text")],
    ];

    let mut index = ActivityIndex::new();
    let summary = index.rebuild(&rows, &key_first_layout(), 0, 0.0);

    assert_eq!(summary.skipped_invalid, 2);
    assert!(index.lookup(1).is_empty());
    assert_eq!(descriptions(&index, 7), vec!["numeric text"]);
}

#[test]
fn test_header_offset_skips_leading_rows() {
    let rows = activity_rows();
    let layout = resolve_activity_layout(&rows[3]);

    let mut index = ActivityIndex::new();
    index.rebuild(&rows, &layout, 4, 0.0);

    assert_eq!(
        descriptions(&index, 1),
        vec!["Rebooted printer", "Replaced toner"]
    );
    assert_eq!(descriptions(&index, 2), vec!["Reset tunnel"]);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_rebuild_is_idempotent() {
    let rows = activity_rows();
    let layout = resolve_activity_layout(&rows[3]);

    let mut index = ActivityIndex::new();
    index.rebuild(&rows, &layout, 4, 0.0);
    let first: Vec<_> = index.lookup(1).to_vec();

    index.rebuild(&rows, &layout, 4, 0.0);
    assert_eq!(index.lookup(1), first.as_slice());
    assert_eq!(index.len(), 3);
}

#[test]
fn test_rebuild_replaces_previous_contents() {
    let mut index = ActivityIndex::new();
    index.rebuild(
        &[vec![n(9.0), n(45296.0), t("old")]],
        &key_first_layout(),
        0,
        0.0,
    );
    assert_eq!(descriptions(&index, 9), vec!["old"]);

    index.rebuild(
        &[vec![n(4.0), n(45296.0), t("new")]],
        &key_first_layout(),
        0,
        0.0,
    );
    assert!(index.lookup(9).is_empty());
    assert_eq!(descriptions(&index, 4), vec!["new"]);
}

#[test]
fn test_dates_are_read_as_whole_day_counts() {
    let rows = vec![
        vec![n(1.0), n(45296.75), t("afternoon")],
        vec![n(1.0), t("someday"), t("no date")],
    ];

    let mut index = ActivityIndex::new();
    index.rebuild(&rows, &key_first_layout(), 0, 0.0);

    let acts = index.lookup(1);
    assert_eq!(acts[0].date, Some(45296));
    assert_eq!(acts[0].date_str(), "5-Jan-2024");
    assert_eq!(acts[1].date, None);
    assert_eq!(acts[1].date_str(), "");
}

#[test]
fn test_short_rows_do_not_panic() {
    let rows = vec![vec![n(3.0)], vec![CellValue::Bool(true)]];

    let mut index = ActivityIndex::new();
    index.rebuild(&rows, &key_first_layout(), 0, 0.0);

    let acts = index.lookup(3);
    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].description, "");
    assert_eq!(acts[0].date, None);
}
