use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;

/// Helper function to create a centered rect using up certain percentage of the available rect `r`
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area left after `padding` percent on every side.
#[must_use]
pub fn padded_rect(padding: u16, r: Rect) -> Rect {
    let percent = 100 - padding.min(45) * 2;
    centered_rect(percent, percent, r)
}

/// Key hints for the bottom border.
#[must_use]
pub fn help_line(keybinds: &[Keybind], theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, bind) in keybinds.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme.dimmed_style));
        }
        spans.push(Span::styled(bind.key, theme.border_style));
        spans.push(Span::styled(format!(" {}", bind.label), theme.dimmed_style));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}
