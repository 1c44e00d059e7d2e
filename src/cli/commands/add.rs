use crate::cli::commands::open_pane;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::pane::{PaneEvent, UserAction, render_pane};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_user_date;

/// Open the activity form for the selected issue and submit it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { description, date } = cmd {
        let date = date.as_deref().map(parse_user_date).transpose()?;
        if description.trim().is_empty() {
            return Err(AppError::InvalidActivity(
                "description must not be empty".to_string(),
            ));
        }

        let (mut host, mut pane) = open_pane(cfg)?;
        if !pane.state().enabled {
            print!("{}", render_pane(pane.state()));
            return Err(AppError::WrongFile);
        }

        pane.handle(&mut host, PaneEvent::UserAction(UserAction::AddActivity));
        if pane.state().draft.is_none() {
            return Err(AppError::NoSelection);
        }

        let before = pane.state().timeline.len();
        pane.handle(
            &mut host,
            PaneEvent::UserAction(UserAction::SaveActivity {
                date,
                description: description.clone(),
            }),
        );

        let state = pane.state();
        if state.timeline.len() > before {
            success("Activity added");
        } else if let Some(notice) = &state.notice {
            warning(notice);
        }

        print!("{}", render_pane(state));
    }
    Ok(())
}
