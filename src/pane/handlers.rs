//! Pure event handlers.
//!
//! Each handler maps the current state plus whatever the runtime read from
//! the host to a new state and a list of host commands. None of them touch
//! the host.

use super::event::HostCommand;
use super::state::{ActivityDraft, PaneState};
use super::timeline::timeline;
use crate::core::ActivityIndex;
use crate::core::layout::ActivityLayout;
use crate::host::RowFormat;
use crate::models::{Activity, CellValue, Issue};
use crate::utils::date::date_to_day_count;
use chrono::NaiveDate;

pub type Transition = (PaneState, Vec<HostCommand>);

/// Where and how new activity rows are written.
#[derive(Debug, Clone)]
pub struct AppendTarget {
    pub sheet: String,
    pub first_column: usize,
    pub width: usize,
    pub layout: ActivityLayout,
}

impl AppendTarget {
    /// Cells for one activity, spanning at least `width` columns from
    /// `first_column` and always covering every column the layout reads.
    pub fn row_for(&self, activity: &Activity) -> (usize, Vec<CellValue>) {
        let l = &self.layout;
        let start = self
            .first_column
            .min(l.issue_id)
            .min(l.date)
            .min(l.description);
        let end = (self.first_column + self.width).max(l.last_column() + 1);

        let mut cells = vec![CellValue::Empty; end - start];
        cells[l.date - start] = activity.date.map(CellValue::from).unwrap_or_default();
        cells[l.issue_id - start] = CellValue::from(activity.issue_id);
        cells[l.description - start] = CellValue::Text(activity.description.clone());

        (start, cells)
    }

    pub fn format(&self, first_column: usize, width: usize) -> RowFormat {
        RowFormat::activity_row(first_column, width, self.layout.date)
    }
}

pub fn selection_changed(
    state: &PaneState,
    sheet: &str,
    issue: Option<Issue>,
    index: &ActivityIndex,
) -> Transition {
    let mut next = state.cleared();
    next.active_sheet = Some(sheet.to_string());
    next.notice = None;

    if let Some(issue) = issue {
        next.timeline = timeline(index.lookup(issue.id));
        next.issue = Some(issue);
    }

    (next, Vec::new())
}

pub fn sheet_activated(state: &PaneState, sheet: &str, tracker_sheet: &str) -> Transition {
    let mut next = state.clone();
    next.active_sheet = Some(sheet.to_string());

    if sheet == tracker_sheet {
        (next, vec![HostCommand::ReadSelection])
    } else {
        (next, Vec::new())
    }
}

/// Leaving the tracker sheet drops the selection; the issue is only
/// meaningful while its row can be selected.
pub fn sheet_deactivated(state: &PaneState, sheet: &str, tracker_sheet: &str) -> Transition {
    if sheet != tracker_sheet {
        return (state.clone(), Vec::new());
    }

    let mut next = state.cleared();
    next.active_sheet = None;
    (next, Vec::new())
}

/// The activity sheet was reloaded into `index`; refresh the visible list.
pub fn activities_changed(state: &PaneState, index: &ActivityIndex) -> Transition {
    let mut next = state.clone();
    next.timeline = match &state.issue {
        Some(issue) => timeline(index.lookup(issue.id)),
        None => Vec::new(),
    };
    (next, Vec::new())
}

pub fn add_activity(state: &PaneState, today: NaiveDate) -> Transition {
    let mut next = state.clone();

    match &state.issue {
        Some(issue) => {
            next.draft = Some(ActivityDraft {
                issue_id: issue.id,
                date: today,
                description: String::new(),
            });
            next.notice = None;
        }
        None => {
            next.notice = Some("Select an issue before adding activity.".to_string());
        }
    }

    (next, Vec::new())
}

pub fn save_activity(
    state: &PaneState,
    date: Option<NaiveDate>,
    description: &str,
    target: &AppendTarget,
) -> Transition {
    let mut next = state.clone();

    let Some(draft) = &state.draft else {
        next.notice = Some("No activity form is open.".to_string());
        return (next, Vec::new());
    };

    let description = description.trim();
    if description.is_empty() {
        next.notice = Some("Activity description is required.".to_string());
        return (next, Vec::new());
    }

    let date = date.unwrap_or(draft.date);
    let activity = Activity::new(
        draft.issue_id,
        Some(date_to_day_count(date)),
        description,
    );
    let (first_column, values) = target.row_for(&activity);
    let format = target.format(first_column, values.len());

    next.draft = None;
    next.notice = None;

    (
        next,
        vec![
            HostCommand::log(
                "add",
                &target.sheet,
                format!(
                    "Adding activity for issue {} ({})",
                    activity.issue_id,
                    activity.date_str()
                ),
            ),
            HostCommand::AppendRow {
                sheet: target.sheet.clone(),
                first_column,
                values,
                format,
            },
        ],
    )
}
