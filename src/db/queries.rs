use crate::errors::{AppError, AppResult};
use crate::host::{RowFormat, Rows};
use crate::models::CellValue;
use rusqlite::{Connection, OptionalExtension, params};

pub fn sheet_exists(conn: &Connection, sheet: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM sheets WHERE name = ?1", [sheet], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

pub fn ensure_sheet(conn: &Connection, sheet: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO sheets (name, position)
         VALUES (?1, (SELECT IFNULL(MAX(position), -1) + 1 FROM sheets))",
        [sheet],
    )?;
    Ok(())
}

fn encode(value: &CellValue) -> Option<(&'static str, Option<f64>, Option<String>)> {
    match value {
        CellValue::Empty => None,
        CellValue::Number(n) => Some(("n", Some(*n), None)),
        CellValue::Bool(b) => Some(("b", Some(if *b { 1.0 } else { 0.0 }), None)),
        CellValue::Text(s) => Some(("s", None, Some(s.clone()))),
    }
}

fn decode(kind: &str, num: Option<f64>, txt: Option<String>) -> CellValue {
    match kind {
        "n" => num.map(CellValue::Number).unwrap_or_default(),
        "b" => CellValue::Bool(num.unwrap_or(0.0) != 0.0),
        _ => txt.map(CellValue::Text).unwrap_or_default(),
    }
}

/// The sheet's used range, anchored at A1.
pub fn load_used_range(conn: &Connection, sheet: &str) -> AppResult<Rows> {
    if !sheet_exists(conn, sheet)? {
        return Err(AppError::SheetNotFound(sheet.to_string()));
    }

    let mut stmt = conn.prepare_cached(
        "SELECT row, col, kind, num, txt FROM cells WHERE sheet = ?1 ORDER BY row, col",
    )?;
    let cells = stmt.query_map([sheet], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<f64>>(3)?,
            row.get::<_, Option<String>>(4)?,
        ))
    })?;

    let mut rows: Rows = Vec::new();
    let mut width = 0usize;
    for c in cells {
        let (r, col, kind, num, txt) = c?;
        let (r, col) = (r as usize, col as usize);

        if rows.len() <= r {
            rows.resize(r + 1, Vec::new());
        }
        if rows[r].len() <= col {
            rows[r].resize(col + 1, CellValue::Empty);
        }
        rows[r][col] = decode(&kind, num, txt);
        width = width.max(col + 1);
    }

    // rectangular, like a real used range
    for row in rows.iter_mut() {
        row.resize(width, CellValue::Empty);
    }

    Ok(rows)
}

/// Write one row of cells atomically: either every cell lands or none does.
pub fn write_cells(
    conn: &Connection,
    sheet: &str,
    row: usize,
    first_column: usize,
    values: &[CellValue],
) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    store_cells(&tx, sheet, row, first_column, values)?;
    tx.commit()?;
    Ok(())
}

/// Cell upserts without a transaction of their own; callers provide one.
fn store_cells(
    conn: &Connection,
    sheet: &str,
    row: usize,
    first_column: usize,
    values: &[CellValue],
) -> AppResult<()> {
    if !sheet_exists(conn, sheet)? {
        return Err(AppError::SheetNotFound(sheet.to_string()));
    }

    let mut upsert = conn.prepare_cached(
        "INSERT INTO cells (sheet, row, col, kind, num, txt)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(sheet, row, col) DO UPDATE SET
            kind = excluded.kind, num = excluded.num, txt = excluded.txt",
    )?;
    let mut delete =
        conn.prepare_cached("DELETE FROM cells WHERE sheet = ?1 AND row = ?2 AND col = ?3")?;

    for (offset, value) in values.iter().enumerate() {
        let col = (first_column + offset) as i64;
        match encode(value) {
            Some((kind, num, txt)) => {
                upsert.execute(params![sheet, row as i64, col, kind, num, txt])?;
            }
            None => {
                delete.execute(params![sheet, row as i64, col])?;
            }
        }
    }

    Ok(())
}

/// Drop every cell of `sheet` and store `rows` in its place.
pub fn replace_sheet(conn: &Connection, sheet: &str, rows: &[Vec<CellValue>]) -> AppResult<()> {
    ensure_sheet(conn, sheet)?;
    conn.execute("DELETE FROM cells WHERE sheet = ?1", [sheet])?;
    conn.execute("DELETE FROM row_formats WHERE sheet = ?1", [sheet])?;

    for (r, values) in rows.iter().enumerate() {
        store_cells(conn, sheet, r, 0, values)?;
    }
    Ok(())
}

pub fn get_property(conn: &Connection, name: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row("SELECT value FROM properties WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?)
}

pub fn set_property(conn: &Connection, name: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO properties (name, value) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET value = excluded.value",
        params![name, value],
    )?;
    Ok(())
}

/// Active sheet and selected row. An empty store has nothing active.
pub fn get_selection(conn: &Connection) -> AppResult<(String, Option<usize>)> {
    let sel: Option<(String, Option<i64>)> = conn
        .query_row("SELECT sheet, row FROM selection WHERE id = 1", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    Ok(match sel {
        Some((sheet, row)) => (sheet, row.map(|r| r as usize)),
        None => (String::new(), None),
    })
}

pub fn set_selection(conn: &Connection, sheet: &str, row: Option<usize>) -> AppResult<()> {
    conn.execute(
        "INSERT INTO selection (id, sheet, row) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET sheet = excluded.sheet, row = excluded.row",
        params![sheet, row.map(|r| r as i64)],
    )?;
    Ok(())
}

pub fn save_row_format(
    conn: &Connection,
    sheet: &str,
    row: usize,
    format: &RowFormat,
) -> AppResult<()> {
    let json = serde_json::to_string(format).map_err(|e| AppError::Other(e.to_string()))?;
    conn.execute(
        "INSERT INTO row_formats (sheet, row, format) VALUES (?1, ?2, ?3)
         ON CONFLICT(sheet, row) DO UPDATE SET format = excluded.format",
        params![sheet, row as i64, json],
    )?;
    Ok(())
}

pub fn load_row_format(conn: &Connection, sheet: &str, row: usize) -> AppResult<Option<RowFormat>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT format FROM row_formats WHERE sheet = ?1 AND row = ?2",
            params![sheet, row as i64],
            |r| r.get(0),
        )
        .optional()?;

    json.map(|j| serde_json::from_str(&j).map_err(|e| AppError::Other(e.to_string())))
        .transpose()
}
