// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ActivityExport;
use crate::models::{Activity, Issue};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the timeline of `issue`.
    ///
    /// `file` must be an absolute path. Returns the number of rows written.
    pub fn export(
        issue: &Issue,
        activities: &[Activity],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows: Vec<ActivityExport> = activities
            .iter()
            .map(|a| ActivityExport::from_activity(issue, a))
            .collect();

        if rows.is_empty() {
            warning(format!("No activity recorded for issue {}.", issue.id));
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
