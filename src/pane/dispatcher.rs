//! Single-flow event dispatcher.
//!
//! Events are queued and processed one at a time to completion. For each
//! event the dispatcher reads what it needs from the host, hands the result
//! to a pure handler, then runs the commands the handler returned. Commands
//! that read data back (append, selection refresh) queue follow-up events
//! behind the current one.
//!
//! Host failures never escape: they are written to the host log and the
//! affected part of the pane degrades to empty.

use super::event::{HostCommand, PaneEvent, UserAction};
use super::handlers::{self, AppendTarget, Transition};
use super::state::PaneState;
use crate::config::Config;
use crate::core::guard::{WRONG_FILE_MESSAGE, is_correct_file};
use crate::core::issue::issue_from_row;
use crate::core::ActivityIndex;
use crate::core::layout::{
    ActivityLayout, TrackerLayout, resolve_activity_layout, resolve_tracker_layout,
};
use crate::errors::AppResult;
use crate::host::{Host, RowFormat};
use crate::models::{CellValue, Issue};
use crate::utils::date::today;
use chrono::NaiveDate;
use std::collections::VecDeque;

pub struct Pane {
    cfg: Config,
    index: ActivityIndex,
    state: PaneState,
    tracker_layout: TrackerLayout,
    activity_layout: ActivityLayout,
    queue: VecDeque<PaneEvent>,
    today: Option<NaiveDate>,
}

/// Result of writing an activity row that reached the sheet.
enum Appended {
    Formatted,
    Unformatted,
}

/// Log a host failure and turn it into `None`.
fn best_effort<H: Host, T>(host: &H, target: &str, res: AppResult<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            host.record_log("error", target, &e.to_string());
            None
        }
    }
}

impl Pane {
    pub fn new(cfg: Config, index: ActivityIndex) -> Self {
        Self {
            cfg,
            index,
            state: PaneState::default(),
            tracker_layout: TrackerLayout::default(),
            activity_layout: ActivityLayout::default(),
            queue: VecDeque::new(),
            today: None,
        }
    }

    /// Pin the date used to prefill new activities.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn state(&self) -> &PaneState {
        &self.state
    }

    pub fn index(&self) -> &ActivityIndex {
        &self.index
    }

    pub fn activity_layout(&self) -> &ActivityLayout {
        &self.activity_layout
    }

    pub fn tracker_layout(&self) -> &TrackerLayout {
        &self.tracker_layout
    }

    /// Check the file guard, discover both layouts, load the activity sheet
    /// and pick up the current selection.
    pub fn start<H: Host>(&mut self, host: &mut H) {
        let property = best_effort(
            host,
            &self.cfg.report_property,
            host.custom_property(&self.cfg.report_property),
        )
        .flatten();

        if !is_correct_file(property.as_deref(), &self.cfg.report_value) {
            host.record_log("guard", &self.cfg.report_property, "Workbook rejected by file guard");
            self.disable(WRONG_FILE_MESSAGE);
            return;
        }

        self.state = PaneState::default();
        self.reload_tracker_layout(host);
        if self.state.enabled {
            self.reload_activities(host);
        }
        if !self.state.enabled {
            return;
        }

        self.post(PaneEvent::SheetActivated {
            sheet: best_effort(host, "selection", host.active_sheet()).unwrap_or_default(),
        });
        self.run(host);
    }

    pub fn post(&mut self, event: PaneEvent) {
        self.queue.push_back(event);
    }

    /// Drain the queue. Returns how many events were processed.
    pub fn run<H: Host>(&mut self, host: &mut H) -> usize {
        let mut processed = 0;
        while let Some(event) = self.queue.pop_front() {
            self.step(host, event);
            processed += 1;
        }
        processed
    }

    /// Post one event and process everything it causes.
    pub fn handle<H: Host>(&mut self, host: &mut H, event: PaneEvent) -> &PaneState {
        self.post(event);
        self.run(host);
        &self.state
    }

    fn disable(&mut self, message: &str) {
        self.state = PaneState::disabled(message);
        self.index.clear();
        self.queue.clear();
    }

    fn step<H: Host>(&mut self, host: &mut H, event: PaneEvent) {
        if !self.state.enabled {
            return;
        }

        let (next, commands): Transition = match event {
            PaneEvent::SelectionChanged { sheet, row } => {
                let issue = self.read_issue(host, &sheet, row);
                handlers::selection_changed(&self.state, &sheet, issue, &self.index)
            }
            PaneEvent::SheetActivated { sheet } => {
                handlers::sheet_activated(&self.state, &sheet, &self.cfg.tracker_sheet)
            }
            PaneEvent::SheetDeactivated { sheet } => {
                handlers::sheet_deactivated(&self.state, &sheet, &self.cfg.tracker_sheet)
            }
            PaneEvent::RangeChanged { sheet } => {
                if sheet == self.cfg.activity_sheet {
                    self.reload_activities(host);
                    handlers::activities_changed(&self.state, &self.index)
                } else if sheet == self.cfg.tracker_sheet {
                    self.reload_tracker_layout(host);
                    (self.state.clone(), vec![HostCommand::ReadSelection])
                } else {
                    (self.state.clone(), Vec::new())
                }
            }
            PaneEvent::UserAction(UserAction::AddActivity) => {
                handlers::add_activity(&self.state, self.today.unwrap_or_else(today))
            }
            PaneEvent::UserAction(UserAction::SaveActivity { date, description }) => {
                let target = self.append_target();
                handlers::save_activity(&self.state, date, &description, &target)
            }
        };

        // a failed reload may have disabled the pane mid-step
        if !self.state.enabled {
            return;
        }

        self.state = next;
        for command in commands {
            self.execute(host, command);
        }
    }

    fn execute<H: Host>(&mut self, host: &mut H, command: HostCommand) {
        match command {
            HostCommand::Log {
                operation,
                target,
                message,
            } => host.record_log(&operation, &target, &message),

            HostCommand::ReadSelection => {
                let sheet = best_effort(host, "selection", host.active_sheet());
                let row = best_effort(host, "selection", host.selected_row()).flatten();
                if let Some(sheet) = sheet {
                    self.post(PaneEvent::SelectionChanged { sheet, row });
                }
            }

            HostCommand::AppendRow {
                sheet,
                first_column,
                values,
                format,
            } => {
                match self.append_row(host, &sheet, first_column, &values, &format) {
                    Some(Appended::Formatted) => {}
                    Some(Appended::Unformatted) => {
                        self.state.notice = Some("Activity saved without formatting.".to_string());
                    }
                    None => {
                        self.state.notice = Some("Could not save the activity.".to_string());
                    }
                }
                // read back whether or not the write landed
                self.post(PaneEvent::RangeChanged { sheet });
            }
        }
    }

    fn append_row<H: Host>(
        &mut self,
        host: &mut H,
        sheet: &str,
        first_column: usize,
        values: &[CellValue],
        format: &RowFormat,
    ) -> Option<Appended> {
        let last_row = best_effort(host, sheet, host.used_range(sheet))?.len();
        let res = host.write_row(sheet, last_row, first_column, values);
        best_effort(host, sheet, res)?;
        host.record_log("add", sheet, &format!("Activity written at row {}", last_row + 1));

        // the row is already in the sheet; styling is cosmetic
        match host.format_row(sheet, last_row, format) {
            Ok(()) => Some(Appended::Formatted),
            Err(e) => {
                host.record_log(
                    "warning",
                    sheet,
                    &format!("Row {} written without formatting: {e}", last_row + 1),
                );
                Some(Appended::Unformatted)
            }
        }
    }

    fn append_target(&self) -> AppendTarget {
        AppendTarget {
            sheet: self.cfg.activity_sheet.clone(),
            first_column: self.cfg.activity_first_column,
            width: self.cfg.activity_append_width,
            layout: self.activity_layout.clone(),
        }
    }

    /// Issue in `row` of the tracker sheet; `None` for any other sheet,
    /// an invalid id, or a host failure.
    fn read_issue<H: Host>(&self, host: &H, sheet: &str, row: Option<usize>) -> Option<Issue> {
        if sheet != self.cfg.tracker_sheet {
            return None;
        }

        let rows = best_effort(host, sheet, host.used_range(sheet))?;
        let values = rows.get(row?)?;
        issue_from_row(values, &self.tracker_layout, self.cfg.id_tolerance)
    }

    fn reload_tracker_layout<H: Host>(&mut self, host: &H) {
        let sheet = self.cfg.tracker_sheet.clone();
        let header = best_effort(host, &sheet, host.used_range(&sheet))
            .and_then(|rows| rows.get(self.cfg.tracker_header_row).cloned())
            .unwrap_or_default();

        let layout = resolve_tracker_layout(&header);
        if !layout.is_complete() {
            let err = layout.require_complete(&sheet);
            self.report_layout(host, &sheet, err);
        }
        self.tracker_layout = layout;
    }

    /// Re-read the activity sheet and rebuild the index from it.
    fn reload_activities<H: Host>(&mut self, host: &H) {
        let sheet = self.cfg.activity_sheet.clone();
        let Some(rows) = best_effort(host, &sheet, host.used_range(&sheet)) else {
            self.index.clear();
            return;
        };

        let header = rows
            .get(self.cfg.activity_header_row)
            .cloned()
            .unwrap_or_default();
        let layout = resolve_activity_layout(&header);
        if !layout.is_complete() {
            let err = layout.require_complete(&sheet);
            self.report_layout(host, &sheet, err);
            if !self.state.enabled {
                return;
            }
        }

        let summary = self.index.rebuild(
            &rows,
            &layout,
            self.cfg.activity_data_offset,
            self.cfg.id_tolerance,
        );
        self.activity_layout = layout;

        host.record_log(
            "rebuild",
            &sheet,
            &format!(
                "Indexed {} activities for {} issues ({} without id, {} invalid id)",
                summary.indexed,
                self.index.issue_count(),
                summary.skipped_empty,
                summary.skipped_invalid
            ),
        );
    }

    /// Unresolved headers: warn and carry on, or disable in strict mode.
    fn report_layout<H: Host>(&mut self, host: &H, sheet: &str, err: AppResult<()>) {
        let Err(e) = err else { return };

        if self.cfg.strict_headers {
            host.record_log("error", sheet, &e.to_string());
            self.disable(&e.to_string());
        } else {
            host.record_log("warning", sheet, &format!("{e}; falling back to column 0"));
        }
    }
}
