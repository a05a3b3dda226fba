use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

/// Rect covering `percent_x` x `percent_y` of `area`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Rect of `width` x `height` placed beside a pointer position, flipped to
/// the other side and clamped when it would leave `frame`.
pub fn anchored_rect(pointer: (u16, u16), width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    let (col, row) = pointer;

    let mut x = col.saturating_add(2);
    if x.saturating_add(width) > frame.right() {
        x = col.saturating_sub(width.saturating_add(1));
    }

    let mut y = row.saturating_add(1);
    if y.saturating_add(height) > frame.bottom() {
        y = row.saturating_sub(height);
    }

    let max_x = frame.right().saturating_sub(width).max(frame.x);
    let max_y = frame.bottom().saturating_sub(height).max(frame.y);

    Rect {
        x: x.clamp(frame.x, max_x),
        y: y.clamp(frame.y, max_y),
        width,
        height,
    }
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}
