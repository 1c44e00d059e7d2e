pub mod activity;
pub mod cell;
pub mod issue;

pub use activity::Activity;
pub use cell::CellValue;
pub use issue::{Issue, IssueId};
