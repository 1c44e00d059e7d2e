mod common;
use common::{e, n, t, tracker_rows};
use trackerpane::core::guard::{REPORT_VALUE, is_correct_file};
use trackerpane::core::{issue_from_row, parse_issue_id, resolve_tracker_layout};
use trackerpane::models::CellValue;

#[test]
fn test_whole_number_ids_are_valid() {
    assert_eq!(parse_issue_id(&n(5.0), 0.0), Some(5));
    assert_eq!(parse_issue_id(&t("12"), 0.0), Some(12));
    assert_eq!(parse_issue_id(&n(0.0), 0.0), Some(0));
}

#[test]
fn test_invalid_ids() {
    assert_eq!(parse_issue_id(&n(5.5), 0.0), None);
    assert_eq!(parse_issue_id(&e(), 0.0), None);
    assert_eq!(parse_issue_id(&t(""), 0.0), None);
    assert_eq!(parse_issue_id(&t("five"), 0.0), None);
    assert_eq!(parse_issue_id(&CellValue::Bool(true), 0.0), None);
}

#[test]
fn test_tolerance_accepts_near_whole_values() {
    let noisy = n(7.000_000_000_1);
    assert_eq!(parse_issue_id(&noisy, 0.0), None);
    assert_eq!(parse_issue_id(&noisy, 1e-6), Some(7));
    assert_eq!(parse_issue_id(&n(6.999_999_9), 1e-6), Some(7));
    assert_eq!(parse_issue_id(&n(5.5), 1e-6), None);
}

#[test]
fn test_issue_from_selected_row() {
    let rows = tracker_rows();
    let layout = resolve_tracker_layout(&rows[3]);

    let issue = issue_from_row(&rows[4], &layout, 0.0).expect("valid issue");
    assert_eq!(issue.id, 1);
    assert_eq!(issue.title, "Printer offline");
    assert_eq!(issue.description, "3rd floor printer");
    assert_eq!(issue.status.as_deref(), Some("Open"));
    assert_eq!(issue.assigned_to.as_deref(), Some("Ann"));
    assert_eq!(issue.due_date.as_deref(), Some("2024-01-10"));

    let short = issue_from_row(&rows[5], &layout, 0.0).expect("valid issue");
    assert_eq!(short.id, 2);
    assert_eq!(short.assigned_to, None);
}

#[test]
fn test_rows_without_valid_id_select_nothing() {
    let rows = tracker_rows();
    let layout = resolve_tracker_layout(&rows[3]);

    assert!(issue_from_row(&rows[6], &layout, 0.0).is_none());
    assert!(issue_from_row(&rows[7], &layout, 0.0).is_none());
    assert!(issue_from_row(&rows[1], &layout, 0.0).is_none());
    // header row itself
    assert!(issue_from_row(&rows[3], &layout, 0.0).is_none());
}

#[test]
fn test_file_guard() {
    assert!(is_correct_file(Some("itcomm-tracker"), REPORT_VALUE));
    assert!(!is_correct_file(Some("ITCOMM-TRACKER"), REPORT_VALUE));
    assert!(!is_correct_file(Some("budget"), REPORT_VALUE));
    assert!(!is_correct_file(None, REPORT_VALUE));
}

#[test]
fn test_tolerance_outside_half_open_range_is_exact() {
    assert_eq!(parse_issue_id(&n(5.5), 0.5), None);
    assert_eq!(parse_issue_id(&n(5.5), f64::NAN), None);
    assert_eq!(parse_issue_id(&n(5.4), 2.0), None);
    assert_eq!(parse_issue_id(&n(5.4), -0.1), None);
    assert_eq!(parse_issue_id(&n(5.0), f64::INFINITY), Some(5));
}

#[test]
fn test_numeric_due_date_renders_as_date() {
    let rows = tracker_rows();
    let layout = resolve_tracker_layout(&rows[3]);

    let mut row = rows[4].clone();
    row[6] = n(45300.0);
    let issue = issue_from_row(&row, &layout, 0.0).expect("valid issue");
    assert_eq!(issue.due_date.as_deref(), Some("9-Jan-2024"));

    row[6] = e();
    let issue = issue_from_row(&row, &layout, 0.0).expect("valid issue");
    assert_eq!(issue.due_date, None);
}
