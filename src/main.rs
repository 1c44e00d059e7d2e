//! trackerpane main entrypoint.

use trackerpane::run;

fn main() {
    if let Err(e) = run() {
        trackerpane::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
