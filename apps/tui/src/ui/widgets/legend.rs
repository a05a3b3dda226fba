//! The ten-step color legend: a contiguous swatch strip with a one-decimal
//! axis underneath, centered in its area.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::heatmap::HeatmapModel;

pub fn render_legend(model: &HeatmapModel, f: &mut Frame<'_>, area: Rect) {
    if area.height < 2 || area.width < 8 {
        return;
    }

    let strip = (model.geometry().legend_width as u16).clamp(1, area.width);
    let start_x = area.x + (area.width - strip) / 2;
    let buf = f.buffer_mut();

    let swatches = model.legend();
    if swatches.is_empty() {
        return;
    }

    // swatch strip: each column takes the color of the swatch under it
    for col in 0..strip {
        let index = (usize::from(col) * swatches.len()) / usize::from(strip);
        let (r, g, b) = swatches[index.min(swatches.len() - 1)].color;
        if let Some(slot) = buf.cell_mut((start_x + col, area.y)) {
            slot.set_bg(Color::Rgb(r, g, b));
        }
    }

    // axis: lower bound of each swatch at its left edge
    let scale = model.legend_scale();
    let style = Style::default().fg(Color::Gray);
    let mut last_end: i32 = i32::MIN;

    for swatch in &swatches {
        let label = format!("{:.1}", swatch.lower);
        let col = scale.scale(swatch.lower).round() as i32;
        if col <= last_end + 1 {
            continue;
        }
        if col + label.len() as i32 > i32::from(strip) {
            break;
        }
        buf.set_string(start_x + col as u16, area.y + 1, &label, style);
        last_end = col + label.len() as i32;
    }

    // close the axis with the domain maximum when there is room
    let (_, max) = model.color_scale().domain();
    let label = format!("{max:.1}");
    let col = i32::from(strip) - label.len() as i32;
    if col > last_end + 1 {
        buf.set_string(start_x + col as u16, area.y + 1, &label, style);
    }
}
