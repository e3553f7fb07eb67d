use ratatui::style::Color;

/// Colors for the viewer, grouped by what they mark
pub struct Theme {
    pub fg: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // Source highlighting, one per command family
    pub arithmetic: Color,
    pub movement: Color,
    pub loop_bracket: Color,
    pub io: Color,
    pub return_value: Color,
    pub call: Color,

    // Memory pane
    pub cell_value: Color,
    pub global_cell: Color,

    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(250, 179, 135),

    arithmetic: Color::Rgb(250, 179, 135),
    movement: Color::Rgb(137, 180, 250),
    loop_bracket: Color::Rgb(203, 166, 247),
    io: Color::Rgb(166, 227, 161),
    return_value: Color::Rgb(245, 194, 231),
    call: Color::Rgb(249, 226, 175),

    cell_value: Color::Rgb(250, 179, 135),
    global_cell: Color::Rgb(148, 226, 213),

    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    highlight_bg: Color::Rgb(50, 50, 70),
};
