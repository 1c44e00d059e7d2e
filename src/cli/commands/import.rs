use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::host::{Host, SqliteHost};
use crate::models::CellValue;
use crate::ui::messages::success;
use std::path::Path;

/// Read a CSV file as sheet rows. No header handling: line 1 is row 1.
pub fn read_csv_rows(path: &Path) -> AppResult<Vec<Vec<CellValue>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from_raw).collect());
    }
    Ok(rows)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { sheet, file } = cmd {
        let rows = read_csv_rows(Path::new(file))?;

        let mut host = SqliteHost::open(&cfg.database)?;
        host.import_sheet(sheet, &rows)?;
        host.record_log(
            "import",
            sheet,
            &format!("Imported {} rows from {}", rows.len(), file),
        );

        success(format!("Imported {} rows into '{}'", rows.len(), sheet));
    }
    Ok(())
}
