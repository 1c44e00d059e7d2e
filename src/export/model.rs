// src/export/model.rs

use crate::models::{Activity, Issue};
use serde::Serialize;

/// Flat record of one activity of the exported issue.
#[derive(Serialize, Clone, Debug)]
pub struct ActivityExport {
    pub issue_id: i64,
    pub issue: String,
    pub date: String,
    pub day_count: Option<i64>,
    pub activity: String,
}

impl ActivityExport {
    pub fn from_activity(issue: &Issue, a: &Activity) -> Self {
        Self {
            issue_id: a.issue_id,
            issue: issue.title.clone(),
            date: a.date_str(),
            day_count: a.date,
            activity: a.description.clone(),
        }
    }
}
