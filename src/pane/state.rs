use super::timeline::TimelineItem;
use crate::models::{Issue, IssueId};
use chrono::NaiveDate;

/// Contents of the new-activity form.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub issue_id: IssueId,
    pub date: NaiveDate,
    pub description: String,
}

/// What the pane currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneState {
    /// False when the workbook failed the file guard; nothing else is shown.
    pub enabled: bool,
    pub active_sheet: Option<String>,
    pub issue: Option<Issue>,
    pub timeline: Vec<TimelineItem>,
    pub draft: Option<ActivityDraft>,
    /// Last message for the user (disabled reason, validation problem, ...).
    pub notice: Option<String>,
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            enabled: true,
            active_sheet: None,
            issue: None,
            timeline: Vec::new(),
            draft: None,
            notice: None,
        }
    }
}

impl PaneState {
    pub fn disabled(message: &str) -> Self {
        Self {
            enabled: false,
            notice: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn selected_id(&self) -> Option<IssueId> {
        self.issue.as_ref().map(|i| i.id)
    }

    /// Nothing selected: no issue, no timeline, no open form.
    pub fn cleared(&self) -> Self {
        Self {
            issue: None,
            timeline: Vec::new(),
            draft: None,
            ..self.clone()
        }
    }
}
