use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::host::{Host, SqliteHost};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the workbook store with the tracker and activity sheets
///  - the `Report` property, when `--report` is given
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Init { report } = &cli.command else {
        return Ok(());
    };

    cfg.save(cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Workbook    : {}", cfg.database));

    let mut host = SqliteHost::open(&cfg.database)?;
    host.ensure_sheet(&cfg.tracker_sheet)?;
    host.ensure_sheet(&cfg.activity_sheet)?;

    if let Some(value) = report {
        host.set_property(&cfg.report_property, value)?;
        info(format!("{} = {}", cfg.report_property, value));
    }

    host.record_log(
        "init",
        "Workbook initialized",
        &format!("Workbook store initialized at {}", cfg.database),
    );

    success("trackerpane initialization completed!");
    Ok(())
}
