use crate::cli::commands::open_pane;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::host::Host;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (host, pane) = open_pane(cfg)?;
        let state = pane.state();
        if !state.enabled {
            return Err(AppError::WrongFile);
        }
        let issue = state.issue.as_ref().ok_or(AppError::NoSelection)?;

        let written =
            ExportLogic::export(issue, pane.index().lookup(issue.id), format, file, *force)?;
        host.record_log(
            "export",
            format.as_str(),
            &format!("Exported {written} activities of issue {} to {file}", issue.id),
        );
    }
    Ok(())
}
