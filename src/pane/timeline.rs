use super::state::PaneState;
use crate::models::Activity;
use ansi_term::{Colour, Style};
use serde::Serialize;

/// One entry of the rendered activity list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineItem {
    pub date: String,
    pub description: String,
}

impl From<&Activity> for TimelineItem {
    fn from(a: &Activity) -> Self {
        Self {
            date: a.date_str(),
            description: a.description.clone(),
        }
    }
}

pub fn timeline(activities: &[Activity]) -> Vec<TimelineItem> {
    activities.iter().map(TimelineItem::from).collect()
}

/// Text rendering of the pane: issue heading, description, then the
/// activity list with a connector between entries.
pub fn render_pane(state: &PaneState) -> String {
    let mut out = String::new();

    if !state.enabled {
        if let Some(msg) = &state.notice {
            out.push_str(msg);
            out.push('\n');
        }
        return out;
    }

    let Some(issue) = &state.issue else {
        out.push_str("No issue selected.\n");
        return out;
    };

    out.push_str(&format!(
        "{} {}\n",
        Style::new().bold().paint(format!("#{}", issue.id)),
        Style::new().bold().paint(issue.title.as_str())
    ));
    if !issue.description.is_empty() {
        out.push_str(&issue.description);
        out.push('\n');
    }

    let extras: Vec<String> = [
        ("status", &issue.status),
        ("assigned to", &issue.assigned_to),
        ("due", &issue.due_date),
    ]
    .iter()
    .filter_map(|(label, v)| v.as_deref().map(|v| format!("{label}: {v}")))
    .collect();
    if !extras.is_empty() {
        out.push_str(&Colour::Fixed(244).paint(extras.join(" | ")).to_string());
        out.push('\n');
    }

    out.push_str("────────── activity ──────────\n");

    if state.timeline.is_empty() {
        out.push_str(&Colour::Fixed(244).paint("(no activity)").to_string());
        out.push('\n');
    }

    let last = state.timeline.len().saturating_sub(1);
    for (i, item) in state.timeline.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            Colour::Blue.paint("➜"),
            Style::new().bold().paint(item.date.as_str())
        ));
        let gutter = if i == last { " " } else { "│" };
        out.push_str(&format!("{gutter} {}\n", item.description));
    }

    if let Some(msg) = &state.notice {
        out.push('\n');
        out.push_str(msg);
        out.push('\n');
    }

    out
}
