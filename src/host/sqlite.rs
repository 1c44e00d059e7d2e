use super::{Host, RowFormat, Rows};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::CellValue;
use crate::ui::messages::warning;

/// Workbook persisted in a SQLite file; backs the command-line front-end.
pub struct SqliteHost {
    pool: DbPool,
}

impl SqliteHost {
    /// Open (and migrate) the store at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    pub fn import_sheet(&mut self, sheet: &str, rows: &[Vec<CellValue>]) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        queries::replace_sheet(&tx, sheet, rows)?;
        tx.commit()?;
        Ok(())
    }

    pub fn ensure_sheet(&mut self, sheet: &str) -> AppResult<()> {
        queries::ensure_sheet(&self.pool.conn, sheet)
    }

    pub fn set_property(&mut self, name: &str, value: &str) -> AppResult<()> {
        queries::set_property(&self.pool.conn, name, value)
    }

    pub fn select(&mut self, sheet: &str, row: Option<usize>) -> AppResult<()> {
        queries::set_selection(&self.pool.conn, sheet, row)
    }

    pub fn row_format(&self, sheet: &str, row: usize) -> AppResult<Option<RowFormat>> {
        queries::load_row_format(&self.pool.conn, sheet, row)
    }
}

impl Host for SqliteHost {
    fn used_range(&self, sheet: &str) -> AppResult<Rows> {
        queries::load_used_range(&self.pool.conn, sheet)
    }

    fn active_sheet(&self) -> AppResult<String> {
        Ok(queries::get_selection(&self.pool.conn)?.0)
    }

    fn selected_row(&self) -> AppResult<Option<usize>> {
        Ok(queries::get_selection(&self.pool.conn)?.1)
    }

    fn custom_property(&self, name: &str) -> AppResult<Option<String>> {
        queries::get_property(&self.pool.conn, name)
    }

    fn write_row(
        &mut self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: &[CellValue],
    ) -> AppResult<()> {
        queries::write_cells(&self.pool.conn, sheet, row, first_column, values)
    }

    fn format_row(&mut self, sheet: &str, row: usize, format: &RowFormat) -> AppResult<()> {
        queries::save_row_format(&self.pool.conn, sheet, row, format)
    }

    fn record_log(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
