//! Memory tape pane
//!
//! One row per addressable cell: index, region, signed value and the
//! character `.` would print. The final pointer of `mn` is marked.

use crate::memory::cell::{self, Cell};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Everything the memory pane needs from a finished run
pub struct MemoryRenderData<'a> {
    pub cells: &'a [Cell],
    pub limit: usize,
    pub global: usize,
    pub pointer: Option<usize>,
}

/// Printable preview of the character a cell holds
pub(crate) fn char_preview(value: Cell) -> String {
    let c = cell::output_char(value);
    if c.is_control() {
        format!("\\u{{{:x}}}", value)
    } else {
        format!("'{}'", c)
    }
}

fn cell_line(index: usize, value: Cell, data: &MemoryRenderData) -> Line<'static> {
    let is_global = index < data.global;
    let is_pointer = data.pointer == Some(index);

    let marker = if is_pointer { "▶ " } else { "  " };
    let region = if is_global { "G" } else { " " };
    let region_color = if is_global {
        DEFAULT_THEME.global_cell
    } else {
        DEFAULT_THEME.muted
    };
    let value_style = if value == 0 {
        Style::default().fg(DEFAULT_THEME.muted)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.cell_value)
            .add_modifier(Modifier::BOLD)
    };

    let mut line = Line::from(vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.warning)),
        Span::styled(format!("{:>3} ", index), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(format!("{} ", region), Style::default().fg(region_color)),
        Span::styled(format!("{:>6}  ", value), value_style),
        Span::styled(char_preview(value), Style::default().fg(DEFAULT_THEME.io)),
    ]);
    if is_pointer {
        line = line.style(Style::default().bg(DEFAULT_THEME.highlight_bg));
    }
    line
}

/// Render the memory pane
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    data: &MemoryRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = format!(" Memory ({} cells, {} global) ", data.limit, data.global);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let addressable = data.limit.min(data.cells.len());
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(addressable.saturating_sub(visible_height));

    let items: Vec<ListItem> = data.cells[..addressable]
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, &value)| ListItem::new(cell_line(index, value, data)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
