use std::error::Error as _;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use ratatui::style::Color;
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;

use crate::config;
use crate::data::DataError;
use crate::domain::Dataset;
use crate::heatmap::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Heatmap,
    Error,
}

/// The cell the pointer (or arrow-key cursor) is over. `pointer` is the
/// terminal position for mouse hovers; arrow-key hovers anchor the tooltip
/// to the cell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    pub year: i32,
    pub month: u32,
    pub pointer: Option<(u16, u16)>,
}

pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub data_url: String,
    pub palette: Palette,
    pub dataset: Option<Dataset>,
    pub hover: Option<HoverTarget>,
    pub status_message: String,
    pub last_error: Option<String>,
    pub show_help: bool,
    pub reload_requested: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub tooltip_fx: Mutex<Option<Effect>>,
    pub throbber: Mutex<ThrobberState>,
}

impl App {
    pub fn new() -> Self {
        let (data_url, palette) = config::init_app_config();

        Self {
            running: true,
            screen: Screen::Loading,
            data_url,
            palette,
            dataset: None,
            hover: None,
            status_message: String::new(),
            last_error: None,
            show_help: false,
            reload_requested: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            tooltip_fx: Mutex::new(None),
            throbber: Mutex::new(ThrobberState::default()),
        }
    }

    /// Advance the animation clock. Called once per event-loop iteration.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if let Ok(mut throbber) = self.throbber.lock() {
            throbber.calc_next();
        }
    }

    /// Install a freshly fetched dataset and switch to the chart.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        self.status_message = format!("Loaded {} observations", dataset.len());
        self.dataset = Some(dataset);
        self.last_error = None;
        self.hover = None;
        self.screen = Screen::Heatmap;
    }

    pub fn set_error(&mut self, error: &DataError) {
        self.set_error_message(error_chain(error));
    }

    pub fn set_error_message(&mut self, message: String) {
        self.last_error = Some(message);
        self.screen = Screen::Error;
    }

    pub fn request_reload(&mut self) {
        self.reload_requested = true;
        self.status_message = "Reloading dataset...".to_string();
    }

    /// Update the hover target; entering a different cell restarts the
    /// tooltip fade, leaving clears it.
    pub fn set_hover(&mut self, target: Option<HoverTarget>) {
        let previous = self.hover.map(|hover| (hover.year, hover.month));
        let current = target.map(|hover| (hover.year, hover.month));

        if previous != current {
            if let Ok(mut effect) = self.tooltip_fx.lock() {
                *effect = current.map(|_| {
                    fx::fade_from(
                        Color::Black,
                        Color::Black,
                        (200, Interpolation::SineOut),
                    )
                });
            }
        }

        self.hover = target;
    }

    /// Move the arrow-key hover cursor by whole cells. Years clamp at the
    /// dataset edges, months wrap around the calendar.
    pub fn move_hover(&mut self, year_delta: i32, month_delta: i32) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let years = dataset.years();
        if years.is_empty() {
            return;
        }

        let (year_index, month) = match self.hover {
            Some(hover) => (
                years
                    .iter()
                    .position(|year| *year == hover.year)
                    .unwrap_or(0) as i32,
                hover.month as i32,
            ),
            None => (0, 0),
        };

        let year_index = (year_index + year_delta).clamp(0, years.len() as i32 - 1);
        let month = (month + month_delta).rem_euclid(12);

        self.set_hover(Some(HoverTarget {
            year: years[year_index as usize],
            month: month as u32,
            pointer: None,
        }));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an error with its source chain on one line.
fn error_chain(error: &DataError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use chrono::Month;

    fn app_with_dataset() -> App {
        let mut app = App::new();
        app.install_dataset(Dataset {
            base_temperature: 8.66,
            observations: vec![
                Observation {
                    year: 1753,
                    month: Month::January,
                    variance: -1.366,
                },
                Observation {
                    year: 1754,
                    month: Month::January,
                    variance: 0.1,
                },
                Observation {
                    year: 1760,
                    month: Month::February,
                    variance: 0.2,
                },
            ],
        });
        app
    }

    #[test]
    fn installing_a_dataset_switches_to_the_chart() {
        let app = app_with_dataset();
        assert_eq!(app.screen, Screen::Heatmap);
        assert!(app.status_message.contains("3 observations"));
    }

    #[test]
    fn move_hover_starts_at_the_first_cell() {
        let mut app = app_with_dataset();
        app.move_hover(0, 0);
        let hover = app.hover.unwrap();
        assert_eq!((hover.year, hover.month), (1753, 0));
    }

    #[test]
    fn move_hover_clamps_years_and_wraps_months() {
        let mut app = app_with_dataset();
        app.move_hover(0, 0);
        app.move_hover(-1, 0);
        assert_eq!(app.hover.unwrap().year, 1753);

        app.move_hover(10, 0);
        assert_eq!(app.hover.unwrap().year, 1760);

        app.move_hover(0, -1);
        assert_eq!(app.hover.unwrap().month, 11);
        app.move_hover(0, 1);
        assert_eq!(app.hover.unwrap().month, 0);
    }

    #[test]
    fn entering_a_cell_arms_the_tooltip_fade() {
        let mut app = app_with_dataset();
        app.set_hover(Some(HoverTarget {
            year: 1753,
            month: 0,
            pointer: Some((10, 5)),
        }));
        assert!(app.tooltip_fx.lock().unwrap().is_some());

        app.set_hover(None);
        assert!(app.tooltip_fx.lock().unwrap().is_none());
    }

    #[test]
    fn error_messages_carry_the_source_chain() {
        let mut app = App::new();
        let error = DataError::InvalidMonth {
            year: 1900,
            month: 13,
        };
        app.set_error(&error);
        assert_eq!(app.screen, Screen::Error);
        assert!(app.last_error.unwrap().contains("month 13"));
    }
}
