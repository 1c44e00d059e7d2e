use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::host::SqliteHost;
use ansi_term::Colour;

const OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex");
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "error" => Colour::Red,
        "warning" | "guard" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "rebuild" => Colour::Blue,
        "import" | "property" | "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let host = SqliteHost::open(&cfg.database)?;
    let entries = load_log(host.conn())?;

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in &entries {
        let date = chrono::DateTime::parse_from_rfc3339(&e.date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or_else(|_| e.date.clone());

        let mut op_target = if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        };
        if op_target.chars().count() > OP_WIDTH {
            op_target = op_target.chars().take(OP_WIDTH - 3).collect::<String>() + "...";
        }

        let rest = op_target[e.operation.len().min(op_target.len())..].to_string();
        let colored = format!(
            "{}{}",
            color_for_operation(&e.operation).paint(e.operation.as_str()),
            rest
        );
        let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            date,
            colored,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
