use crate::app::App;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

pub fn render_loading(app: &App, f: &mut Frame<'_>) {
    let frame = f.area().inner(Margin::new(2, 1));
    let block = Block::default()
        .title("== Global Temperature Heatmap ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, frame);

    let area = centered_rect(60, 30, frame);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let throbber = Throbber::default()
        .label("Fetching dataset...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    if let Ok(mut state) = app.throbber.lock() {
        f.render_stateful_widget(throbber, rows[0], &mut state);
    }

    let url = Paragraph::new(app.data_url.clone())
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(url, rows[1]);

    let hint = Paragraph::new("q to quit")
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[2]);
}
