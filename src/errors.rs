//! Unified application error type.
//! All modules (db, core, host, pane, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Host adapter
    // ---------------------------
    #[error("Host error: {0}")]
    Host(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Missing header column(s) in '{sheet}': {columns}")]
    MissingHeader { sheet: String, columns: String },

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Pane state
    // ---------------------------
    #[error("No issue selected")]
    NoSelection,

    #[error("Workbook is not an issue tracker report")]
    WrongFile,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
