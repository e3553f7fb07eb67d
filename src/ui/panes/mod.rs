//! TUI pane rendering modules
//!
//! - [`source`]: program text with command highlighting
//! - [`memory`]: the cell tape with the final pointer marked
//! - [`terminal`]: program output and the fault, if any
//! - [`status`]: run summary and keybindings
//!
//! Each module exports a stateless `render_*` function; scroll offsets live in
//! [`App`](crate::ui::App) and are clamped by the pane that owns them.

pub mod memory;
pub mod source;
pub mod status;
pub mod terminal;

pub use memory::{render_memory_pane, MemoryRenderData};
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;
