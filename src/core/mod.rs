pub mod guard;
pub mod index;
pub mod issue;
pub mod layout;

pub use guard::is_correct_file;
pub use index::{ActivityIndex, RebuildSummary};
pub use issue::{issue_from_row, parse_issue_id};
pub use layout::{ActivityLayout, TrackerLayout, resolve_activity_layout, resolve_tracker_layout};
