//! Column layout discovery from header rows.
//!
//! Both sheets carry a header row whose captions name the columns the pane
//! needs. Resolution is a pure function of that row: captions are matched
//! case-insensitively after trimming, unknown captions are ignored and, when
//! a caption appears twice, the right-most one wins.
//!
//! A caption that is not found leaves its column at position 0. That position
//! is almost certainly wrong, so every resolver records the caption in
//! `missing` and callers decide whether to warn or refuse.

use crate::errors::{AppError, AppResult};
use crate::models::CellValue;

pub const TRACKER_ID: &str = "tracker id";
pub const DATE_START: &str = "date start";
pub const ACTIVITY: &str = "activity";

pub const ID: &str = "id";
pub const ISSUE: &str = "issue";
pub const DESCRIPTION: &str = "description";
pub const STATUS: &str = "status";
pub const ASSIGNED_TO: &str = "assigned to";
pub const DUE_DATE: &str = "due date";

/// Column positions inside the activity sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityLayout {
    pub issue_id: usize,
    pub date: usize,
    pub description: usize,
    pub missing: Vec<&'static str>,
}

/// Column positions inside the tracker sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerLayout {
    pub id: usize,
    pub title: usize,
    pub description: usize,
    pub status: Option<usize>,
    pub assigned_to: Option<usize>,
    pub due_date: Option<usize>,
    pub missing: Vec<&'static str>,
}

/// Position of each caption in `header`, right-most match wins.
fn header_positions(header: &[CellValue], captions: &[&str]) -> Vec<Option<usize>> {
    let mut found = vec![None; captions.len()];

    for (col, cell) in header.iter().enumerate() {
        let caption = cell.as_text().trim().to_lowercase();
        if let Some(slot) = captions.iter().position(|c| *c == caption) {
            found[slot] = Some(col);
        }
    }

    found
}

fn required(
    pos: Option<usize>,
    caption: &'static str,
    missing: &mut Vec<&'static str>,
) -> usize {
    pos.unwrap_or_else(|| {
        missing.push(caption);
        0
    })
}

pub fn resolve_activity_layout(header: &[CellValue]) -> ActivityLayout {
    let pos = header_positions(header, &[TRACKER_ID, DATE_START, ACTIVITY]);
    let mut missing = Vec::new();

    ActivityLayout {
        issue_id: required(pos[0], TRACKER_ID, &mut missing),
        date: required(pos[1], DATE_START, &mut missing),
        description: required(pos[2], ACTIVITY, &mut missing),
        missing,
    }
}

pub fn resolve_tracker_layout(header: &[CellValue]) -> TrackerLayout {
    let pos = header_positions(
        header,
        &[ID, ISSUE, DESCRIPTION, STATUS, ASSIGNED_TO, DUE_DATE],
    );
    let mut missing = Vec::new();

    TrackerLayout {
        id: required(pos[0], ID, &mut missing),
        title: required(pos[1], ISSUE, &mut missing),
        description: required(pos[2], DESCRIPTION, &mut missing),
        status: pos[3],
        assigned_to: pos[4],
        due_date: pos[5],
        missing,
    }
}

impl ActivityLayout {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Right-most column the layout reads.
    pub fn last_column(&self) -> usize {
        self.issue_id.max(self.date).max(self.description)
    }

    /// Refuse a layout with unresolved captions.
    pub fn require_complete(&self, sheet: &str) -> AppResult<()> {
        ensure_complete(sheet, &self.missing)
    }
}

impl TrackerLayout {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn require_complete(&self, sheet: &str) -> AppResult<()> {
        ensure_complete(sheet, &self.missing)
    }
}

fn ensure_complete(sheet: &str, missing: &[&'static str]) -> AppResult<()> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::MissingHeader {
        sheet: sheet.to_string(),
        columns: missing.join(", "),
    })
}
