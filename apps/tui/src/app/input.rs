use crossterm::event::KeyCode;

use crate::app::state::{App, Screen};

/// Keyboard handling, shared by every screen.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        match key {
            KeyCode::Char('h') | KeyCode::Esc | KeyCode::Enter => app.show_help = false,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => {
            // Esc clears an active hover before it quits
            if app.hover.is_some() {
                app.set_hover(None);
            } else {
                app.running = false;
            }
        }
        KeyCode::Char('h') => app.show_help = true,
        KeyCode::Char('r') => {
            if app.screen != Screen::Loading {
                app.request_reload();
            }
        }
        KeyCode::Char('p') => {
            app.palette = app.palette.next();
            app.status_message = format!("Palette: {}", app.palette.label());
        }
        KeyCode::Left => app.move_hover(-1, 0),
        KeyCode::Right => app.move_hover(1, 0),
        KeyCode::Up => app.move_hover(0, -1),
        KeyCode::Down => app.move_hover(0, 1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::HoverTarget;
    use crate::domain::{Dataset, Observation};
    use crate::heatmap::Palette;
    use chrono::Month;

    fn app() -> App {
        let mut app = App::new();
        app.palette = Palette::Cool;
        app.install_dataset(Dataset {
            base_temperature: 8.66,
            observations: vec![Observation {
                year: 1753,
                month: Month::January,
                variance: -1.366,
            }],
        });
        app
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn esc_clears_hover_before_quitting() {
        let mut app = app();
        app.set_hover(Some(HoverTarget {
            year: 1753,
            month: 0,
            pointer: None,
        }));

        handle_input(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert!(app.hover.is_none());

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn p_cycles_the_palette() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('p'));
        assert_eq!(app.palette, Palette::Viridis);
        assert!(app.status_message.contains("Viridis"));
    }

    #[test]
    fn r_requests_a_reload_outside_loading() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('r'));
        assert!(app.reload_requested);

        let mut loading = App::new();
        loading.screen = Screen::Loading;
        handle_input(&mut loading, KeyCode::Char('r'));
        assert!(!loading.reload_requested);
    }

    #[test]
    fn help_swallows_navigation_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('h'));
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Left);
        assert!(app.hover.is_none());

        handle_input(&mut app, KeyCode::Char('h'));
        assert!(!app.show_help);
    }

    #[test]
    fn arrows_move_the_hover_cursor() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Right);
        let hover = app.hover.unwrap();
        assert_eq!((hover.year, hover.month), (1753, 0));

        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.hover.unwrap().month, 1);
    }
}
