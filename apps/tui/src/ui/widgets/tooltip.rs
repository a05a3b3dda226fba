//! Hover tooltip: year, month, absolute temperature, and variance for the
//! cell under the pointer, shown beside it and faded in on hover change.

use ratatui::style::{Color, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

use crate::app::App;
use crate::domain;
use crate::heatmap::{Cell, HeatmapModel};
use crate::ui::screens::heatmap::ScreenLayout;
use crate::ui::widgets::popup::{anchored_rect, ClearWidget};

pub fn render_tooltip(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout, model: &HeatmapModel) {
    let Some(hover) = app.hover else {
        return;
    };
    let Some(cell) = model.cell_lookup(hover.year, hover.month) else {
        return;
    };

    let lines = tooltip_lines(cell);
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16
        + 2;
    let height = lines.len() as u16 + 2;

    let pointer = hover.pointer.unwrap_or_else(|| cell_anchor(cell, layout));
    let area = anchored_rect(pointer, width, height, f.area());

    let paragraph = Paragraph::new(lines.into_iter().map(TextLine::from).collect::<Vec<_>>())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(ClearWidget, area);
    f.render_widget(paragraph, area);

    if let Ok(mut effect) = app.tooltip_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, area, app.last_tick);
        }
    }
}

/// The four displayed lines: year, full month name, absolute temperature
/// and variance to two decimals.
fn tooltip_lines(cell: &Cell) -> Vec<String> {
    let month = domain::month_name(cell.month).unwrap_or("?");
    vec![
        format!("Year: {}", cell.year),
        format!("Month: {month}"),
        format!("Temp: {:.2}℃", cell.temperature),
        format!("Variance: {:.2}℃", cell.variance),
    ]
}

/// Anchor for arrow-key hovers: the center of the hovered cell, mapped from
/// chart space to terminal coordinates.
fn cell_anchor(cell: &Cell, layout: &ScreenLayout) -> (u16, u16) {
    let col = layout.chart.x + (cell.x + cell.width / 2.0) as u16;
    let row = layout.chart.y + (cell.y + cell.height / 2.0) as u16;
    (
        col.min(layout.chart.right().saturating_sub(1)),
        row.min(layout.chart.bottom().saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_shows_the_documented_example() {
        // base 8.66, {year: 1753, month: 1, variance: -1.366}
        let cell = Cell {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 45.0,
            year: 1753,
            month: 0,
            temperature: 8.66 + -1.366,
            variance: -1.366,
        };

        let lines = tooltip_lines(&cell);
        assert_eq!(lines[0], "Year: 1753");
        assert_eq!(lines[1], "Month: January");
        assert_eq!(lines[2], "Temp: 7.29℃");
        assert_eq!(lines[3], "Variance: -1.37℃");
    }
}
