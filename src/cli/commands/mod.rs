pub mod add;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod property;
pub mod select;
pub mod show;

use crate::config::Config;
use crate::core::ActivityIndex;
use crate::errors::AppResult;
use crate::host::SqliteHost;
use crate::pane::Pane;

/// Open the configured workbook store and start a pane on it.
pub(crate) fn open_pane(cfg: &Config) -> AppResult<(SqliteHost, Pane)> {
    let mut host = SqliteHost::open(&cfg.database)?;
    let mut pane = Pane::new(cfg.clone(), ActivityIndex::new());
    pane.start(&mut host);
    Ok((host, pane))
}
