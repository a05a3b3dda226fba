// UI module for heatgrid
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, Screen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        Screen::Loading => screens::loading::render_loading(app, f),
        Screen::Heatmap => screens::heatmap::render_heatmap_screen(app, f),
        Screen::Error => screens::error::render_error(app, f),
    }
}
