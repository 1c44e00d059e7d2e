use super::issue::IssueId;
use crate::utils::date::format_day_count;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub issue_id: IssueId, // ⇔ "Tracker ID" column
    pub date: Option<i64>, // ⇔ "Date Start" column, day count since 1899-12-30
    pub description: String, // ⇔ "Activity" column
}

impl Activity {
    pub fn new(issue_id: IssueId, date: Option<i64>, description: impl Into<String>) -> Self {
        Self {
            issue_id,
            date,
            description: description.into(),
        }
    }

    /// `D-Mon-YYYY`, or an empty string when the row had no usable date.
    pub fn date_str(&self) -> String {
        self.date.map(format_day_count).unwrap_or_default()
    }
}
