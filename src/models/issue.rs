use serde::Serialize;

/// Whole-number issue identifier shared by the tracker and activity sheets.
pub type IssueId = i64;

/// Snapshot of the selected tracker row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
}
