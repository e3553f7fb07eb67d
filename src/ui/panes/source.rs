//! Source code pane rendering with syntax highlighting
//!
//! Commands are coloured by kind, function names in declarations and calls
//! are highlighted, and everything the parser would drop is shown as a
//! comment. That includes command characters outside any declaration, so the
//! highlighter carries an open-declaration flag from one line to the next.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn command_style(c: char) -> Option<Style> {
    let color = match c {
        '+' | '-' => DEFAULT_THEME.arithmetic,
        '<' | '>' => DEFAULT_THEME.movement,
        '[' | ']' => DEFAULT_THEME.loop_bracket,
        '.' | ',' | '"' => DEFAULT_THEME.io,
        ';' => DEFAULT_THEME.return_value,
        _ => return None,
    };
    Some(Style::default().fg(color))
}

/// Highlight one line of BrainF++ source.
///
/// `in_declaration` says whether a `{` is still open at the start of the line
/// and is updated for the next one.
pub(crate) fn highlight_source_line(line: &str, in_declaration: &mut bool) -> Line<'static> {
    let function_style = Style::default()
        .fg(DEFAULT_THEME.call)
        .add_modifier(Modifier::BOLD);
    let comment_style = Style::default().fg(DEFAULT_THEME.muted);

    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut comment = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Outside a declaration only `{` means anything
        let opens_name = if *in_declaration { c == '(' } else { c == '{' };
        let is_name = opens_name
            && chars.get(i + 1).is_some_and(|c| c.is_ascii_alphabetic())
            && chars.get(i + 2).is_some_and(|c| c.is_ascii_alphabetic());

        let style = if is_name || opens_name {
            Some(function_style)
        } else if *in_declaration {
            match c {
                '{' | '}' | ')' => Some(function_style),
                _ => command_style(c),
            }
        } else {
            None
        };

        let Some(style) = style else {
            comment.push(c);
            i += 1;
            continue;
        };
        if !comment.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut comment), comment_style));
        }

        match c {
            '{' => *in_declaration = true,
            '}' => *in_declaration = false,
            _ => {}
        }

        let width = if is_name { 3 } else { 1 };
        spans.push(Span::styled(chars[i..i + width].iter().collect::<String>(), style));
        i += width;
    }

    if !comment.is_empty() {
        spans.push(Span::styled(comment, comment_style));
    }

    Line::from(spans)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
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

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_lines = source.lines().count();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(total_lines.saturating_sub(visible_height));

    let number_width = total_lines.max(1).to_string().len();
    let mut in_declaration = false;
    let lines: Vec<Line> = source
        .lines()
        .enumerate()
        .map(|(index, text)| (index, highlight_source_line(text, &mut in_declaration)))
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, mut line)| {
            line.spans.insert(
                0,
                Span::styled(
                    format!("{:>width$} ", index + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
            );
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
