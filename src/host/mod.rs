//! Host adapter contract.
//!
//! The pane never talks to a spreadsheet directly. Everything it needs from
//! the workbook goes through [`Host`]: read a sheet's used range, find the
//! selection, look up a custom property, write a row back and style it.
//! Used ranges are anchored at A1, so row/column indexes are absolute.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryHost;
pub use sqlite::SqliteHost;

use crate::errors::AppResult;
use crate::models::CellValue;
use serde::{Deserialize, Serialize};

pub type Rows = Vec<Vec<CellValue>>;

pub trait Host {
    /// Every row of the sheet's used range.
    fn used_range(&self, sheet: &str) -> AppResult<Rows>;

    fn active_sheet(&self) -> AppResult<String>;

    /// Zero-based row of the current selection, if anything is selected.
    fn selected_row(&self) -> AppResult<Option<usize>>;

    fn custom_property(&self, name: &str) -> AppResult<Option<String>>;

    /// Write `values` into `row`, starting at `first_column`.
    fn write_row(
        &mut self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: &[CellValue],
    ) -> AppResult<()>;

    fn format_row(&mut self, sheet: &str, row: usize, format: &RowFormat) -> AppResult<()>;

    /// Record a line in the host's internal log. Must not fail.
    fn record_log(&self, operation: &str, target: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderEdge {
    Top,
    Bottom,
    Left,
    Right,
    InsideVertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderWeight {
    Thin,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub edge: BorderEdge,
    pub weight: BorderWeight,
    /// RGB, e.g. 0x275317.
    pub color: u32,
}

/// Styling applied to a freshly written row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowFormat {
    pub first_column: usize,
    pub width: usize,
    /// (column, number format) pairs; columns are absolute.
    pub number_formats: Vec<(usize, String)>,
    pub borders: Vec<Border>,
}

pub const ACTIVITY_BORDER: u32 = 0x275317;
pub const ACTIVITY_SEPARATOR: u32 = 0xE0E7DB;

impl RowFormat {
    /// Look of an appended activity row: green frame, light top separator,
    /// date cell shown as `dd-mmm-yyyy`.
    pub fn activity_row(first_column: usize, width: usize, date_column: usize) -> Self {
        let edge = |edge, weight, color| Border {
            edge,
            weight,
            color,
        };

        Self {
            first_column,
            width,
            number_formats: vec![(
                date_column,
                crate::utils::date::SHEET_DATE_FORMAT.to_string(),
            )],
            borders: vec![
                edge(BorderEdge::Bottom, BorderWeight::Medium, ACTIVITY_BORDER),
                edge(BorderEdge::Left, BorderWeight::Medium, ACTIVITY_BORDER),
                edge(BorderEdge::Right, BorderWeight::Medium, ACTIVITY_BORDER),
                edge(BorderEdge::Top, BorderWeight::Thin, ACTIVITY_SEPARATOR),
                edge(BorderEdge::InsideVertical, BorderWeight::Thin, ACTIVITY_BORDER),
            ],
        }
    }
}
