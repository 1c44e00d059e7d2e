use crate::cli::commands::open_pane;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::pane::{PaneEvent, render_pane};

/// Move the selection, replaying the host events a spreadsheet would fire.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { row, sheet } = cmd {
        if *row == 0 {
            return Err(AppError::Other("rows are numbered from 1".to_string()));
        }
        let sheet = sheet.clone().unwrap_or_else(|| cfg.tracker_sheet.clone());
        let row = Some(row - 1);

        let (mut host, mut pane) = open_pane(cfg)?;
        let previous = pane.state().active_sheet.clone();

        host.select(&sheet, row)?;

        if previous.as_deref() != Some(sheet.as_str()) {
            if let Some(prev) = previous {
                pane.post(PaneEvent::SheetDeactivated { sheet: prev });
            }
            pane.post(PaneEvent::SheetActivated {
                sheet: sheet.clone(),
            });
        }
        pane.post(PaneEvent::SelectionChanged { sheet, row });
        pane.run(&mut host);

        print!("{}", render_pane(pane.state()));
    }
    Ok(())
}
