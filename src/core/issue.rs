use crate::core::layout::TrackerLayout;
use crate::models::{CellValue, Issue, IssueId};
use crate::utils::date::{format_day_count, serial_to_day_count};

/// Identifier held by a cell, if it is a valid issue id.
///
/// The cell must be non-empty, numeric and a whole number. `tolerance` is
/// the accepted distance from the nearest integer; 0.0 demands an exact
/// whole number. A tolerance outside `[0, 0.5)` is treated as 0.0.
///
/// Zero is a valid id: only an empty cell means "no id".
pub fn parse_issue_id(cell: &CellValue, tolerance: f64) -> Option<IssueId> {
    if cell.is_empty() {
        return None;
    }

    let tolerance = if (0.0..0.5).contains(&tolerance) {
        tolerance
    } else {
        0.0
    };

    let n = cell.as_number()?;
    let rounded = n.round();
    if (n - rounded).abs() > tolerance {
        return None;
    }
    if rounded.abs() > i64::MAX as f64 {
        return None;
    }

    Some(rounded as IssueId)
}

fn text_at(row: &[CellValue], col: usize) -> String {
    row.get(col).map(CellValue::as_text).unwrap_or_default()
}

fn optional_text_at(row: &[CellValue], col: Option<usize>) -> Option<String> {
    let cell = row.get(col?)?;
    if cell.is_empty() {
        None
    } else {
        Some(cell.as_text())
    }
}

/// Date column of the tracker: serials render as `D-Mon-YYYY`, text as typed.
fn optional_date_at(row: &[CellValue], col: Option<usize>) -> Option<String> {
    let cell = row.get(col?)?;
    match cell {
        CellValue::Number(n) => serial_to_day_count(*n)
            .map(format_day_count)
            .filter(|s| !s.is_empty()),
        _ if cell.is_empty() => None,
        _ => Some(cell.as_text()),
    }
}

/// Build the issue shown for a selected tracker row.
///
/// Returns `None` ("nothing selected") when the id cell is not a valid id.
pub fn issue_from_row(row: &[CellValue], layout: &TrackerLayout, tolerance: f64) -> Option<Issue> {
    let id = parse_issue_id(row.get(layout.id)?, tolerance)?;

    Some(Issue {
        id,
        title: text_at(row, layout.title),
        description: text_at(row, layout.description),
        status: optional_text_at(row, layout.status),
        assigned_to: optional_text_at(row, layout.assigned_to),
        due_date: optional_date_at(row, layout.due_date),
    })
}
