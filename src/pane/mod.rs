//! The task pane: state, events and the single-flow dispatcher.

pub mod dispatcher;
pub mod event;
pub mod handlers;
pub mod state;
pub mod timeline;

pub use dispatcher::Pane;
pub use event::{HostCommand, PaneEvent, UserAction};
pub use state::{ActivityDraft, PaneState};
pub use timeline::{TimelineItem, render_pane};
