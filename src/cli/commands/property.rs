use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::host::{Host, SqliteHost};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Property { name, value } = cmd {
        let mut host = SqliteHost::open(&cfg.database)?;

        match value {
            Some(v) => {
                host.set_property(name, v)?;
                host.record_log("property", name, v);
                success(format!("{name} = {v}"));
            }
            None => match host.custom_property(name)? {
                Some(v) => println!("{name} = {v}"),
                None => warning(format!("Property '{name}' is not set")),
            },
        }
    }
    Ok(())
}
