use crate::app::App;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// A failed fetch or a malformed dataset lands here instead of a blank
/// screen; `r` retries, `q` quits.
pub fn render_error(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 40, f.area());

    let block = Block::default()
        .title(" Error ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let message = app.last_error.as_deref().unwrap_or("Unknown error");

    let lines = vec![
        TextLine::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("Dataset: {}", app.data_url),
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "r retry | q quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
