use crate::cli::commands::open_pane;
use crate::config::Config;
use crate::errors::AppResult;
use crate::pane::render_pane;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_host, pane) = open_pane(cfg)?;
    print!("{}", render_pane(pane.state()));
    Ok(())
}
