use crate::host::RowFormat;
use crate::models::CellValue;
use chrono::NaiveDate;

/// Everything the pane reacts to, host notifications and user actions alike.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneEvent {
    SelectionChanged { sheet: String, row: Option<usize> },
    SheetActivated { sheet: String },
    SheetDeactivated { sheet: String },
    RangeChanged { sheet: String },
    UserAction(UserAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Open the new-activity form for the selected issue.
    AddActivity,
    /// Submit the form. `date` overrides the form's default date.
    SaveActivity {
        date: Option<NaiveDate>,
        description: String,
    },
}

/// Work a handler asks the runtime to carry out against the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Write `values` after the last used row of `sheet`, style the row,
    /// then read the sheet back.
    AppendRow {
        sheet: String,
        first_column: usize,
        values: Vec<CellValue>,
        format: RowFormat,
    },
    /// Read the active sheet and selected row and replay them as a
    /// `SelectionChanged` event.
    ReadSelection,
    Log {
        operation: String,
        target: String,
        message: String,
    },
}

impl HostCommand {
    pub fn log(operation: &str, target: &str, message: impl Into<String>) -> Self {
        HostCommand::Log {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        }
    }
}
