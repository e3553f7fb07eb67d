//! Terminal viewer for a finished run, built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: viewer state and the keyboard event loop
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from a [`Snapshot`](crate::snapshot::Snapshot) and call
//! [`App::run`](app::App::run). Execution has already finished by then; the
//! viewer only displays its result.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
