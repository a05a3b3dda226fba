//! Grid and axis rendering. The model is computed for the chart Rect, so
//! every terminal cell samples the band slot under its own center; month
//! padding gaps stay unfilled and read as row separators.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::domain;
use crate::heatmap::HeatmapModel;

pub fn render_grid(model: &HeatmapModel, f: &mut Frame<'_>, area: Rect) {
    let buf = f.buffer_mut();

    for row in 0..area.height {
        for col in 0..area.width {
            let Some(cell) = model.cell_at(f64::from(col) + 0.5, f64::from(row) + 0.5) else {
                continue;
            };
            let color = model.cell_color(cell);
            if let Some(slot) = buf.cell_mut((area.x + col, area.y + row)) {
                slot.set_bg(color);
            }
        }
    }
}

/// Full month names along the left edge, one per band, right-aligned.
pub fn render_month_axis(model: &HeatmapModel, f: &mut Frame<'_>, area: Rect) {
    if area.width < 2 {
        return;
    }

    let buf = f.buffer_mut();
    let style = Style::default().fg(Color::Gray);
    let scale = model.month_scale();
    let width = usize::from(area.width - 1);

    for index in 0..scale.len() {
        let center = scale.position_of(index) + scale.bandwidth() / 2.0;
        let row = center as u16;
        if row >= area.height {
            continue;
        }
        let Some(name) = domain::month_name(index as u32) else {
            continue;
        };
        let label = format!("{name:>width$}");
        buf.set_string(area.x, area.y + row, label, style);
    }
}

/// Decade tick labels under the grid, centered on their bands; labels that
/// would collide with the previous one are skipped.
pub fn render_year_axis(model: &HeatmapModel, f: &mut Frame<'_>, area: Rect) {
    let buf = f.buffer_mut();
    let style = Style::default().fg(Color::Gray);
    let scale = model.year_scale();
    let mut last_end: i32 = i32::MIN;

    for year in model.tick_years() {
        let Some(position) = scale.position(year) else {
            continue;
        };
        let label = year.to_string();
        let center = position + scale.bandwidth() / 2.0;
        let col = center.round() as i32 - label.len() as i32 / 2;

        if col <= last_end + 1 || col < 0 {
            continue;
        }
        if col + label.len() as i32 > i32::from(area.width) {
            break;
        }

        buf.set_string(area.x + col as u16, area.y, &label, style);
        last_end = col + label.len() as i32;
    }
}
