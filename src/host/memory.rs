use super::{Host, RowFormat, Rows};
use crate::errors::{AppError, AppResult};
use crate::models::CellValue;
use std::cell::RefCell;
use std::collections::HashMap;

/// Workbook held in memory. Used by tests and by callers embedding the pane
/// behind their own host binding.
#[derive(Debug, Default)]
pub struct MemoryHost {
    sheets: HashMap<String, Rows>,
    properties: HashMap<String, String>,
    active: String,
    selected: Option<usize>,
    formats: Vec<(String, usize, RowFormat)>,
    log: RefCell<Vec<(String, String, String)>>,
    failing: bool,
    failing_format: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: &str, rows: Rows) -> Self {
        self.set_sheet(name, rows);
        self
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn set_sheet(&mut self, name: &str, rows: Rows) {
        self.sheets.insert(name.to_string(), rows);
    }

    pub fn select(&mut self, sheet: &str, row: Option<usize>) {
        self.active = sheet.to_string();
        self.selected = row;
    }

    /// Make every host call fail, as a disconnected host would.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Make only row styling fail; writes still land.
    pub fn set_failing_format(&mut self, failing: bool) {
        self.failing_format = failing;
    }

    pub fn sheet(&self, name: &str) -> Option<&Rows> {
        self.sheets.get(name)
    }

    pub fn formats(&self) -> &[(String, usize, RowFormat)] {
        &self.formats
    }

    pub fn log_entries(&self) -> Vec<(String, String, String)> {
        self.log.borrow().clone()
    }

    fn check(&self) -> AppResult<()> {
        if self.failing {
            Err(AppError::Host("host unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Host for MemoryHost {
    fn used_range(&self, sheet: &str) -> AppResult<Rows> {
        self.check()?;
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| AppError::SheetNotFound(sheet.to_string()))
    }

    fn active_sheet(&self) -> AppResult<String> {
        self.check()?;
        Ok(self.active.clone())
    }

    fn selected_row(&self) -> AppResult<Option<usize>> {
        self.check()?;
        Ok(self.selected)
    }

    fn custom_property(&self, name: &str) -> AppResult<Option<String>> {
        self.check()?;
        Ok(self.properties.get(name).cloned())
    }

    fn write_row(
        &mut self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: &[CellValue],
    ) -> AppResult<()> {
        self.check()?;
        let rows = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| AppError::SheetNotFound(sheet.to_string()))?;

        if rows.len() <= row {
            rows.resize(row + 1, Vec::new());
        }
        let target = &mut rows[row];
        if target.len() < first_column + values.len() {
            target.resize(first_column + values.len(), CellValue::Empty);
        }
        for (offset, value) in values.iter().enumerate() {
            target[first_column + offset] = value.clone();
        }
        Ok(())
    }

    fn format_row(&mut self, sheet: &str, row: usize, format: &RowFormat) -> AppResult<()> {
        self.check()?;
        if self.failing_format {
            return Err(AppError::Host("formatting unavailable".to_string()));
        }
        self.formats.push((sheet.to_string(), row, format.clone()));
        Ok(())
    }

    fn record_log(&self, operation: &str, target: &str, message: &str) {
        self.log.borrow_mut().push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
    }
}
