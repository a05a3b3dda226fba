use color_eyre::Result;
use crossterm::event::{self, Event, MouseEvent, MouseEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::app::{handle_input, App, HoverTarget, Screen};
use crate::data::{self, DataError};
use crate::domain::Dataset;
use crate::heatmap::{hover_target, Cell, ChartGeometry, HeatmapModel, LegendSwatch, Palette};
use crate::ui;
use crate::ui::screens::heatmap::{chart_geometry, screen_layout};

type FetchHandle = JoinHandle<Result<Dataset, DataError>>;

/// The one asynchronous operation: fetch the dataset off the event loop;
/// the loop polls the handle and renders on receipt.
fn spawn_fetch(url: &str) -> FetchHandle {
    let url = url.to_string();
    tokio::spawn(async move { data::fetch_dataset(&url).await })
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.screen = Screen::Loading;
    let mut fetch: Option<FetchHandle> = Some(spawn_fetch(&app.data_url));

    loop {
        // Update animations
        app.update();

        // Install a finished fetch before drawing
        if fetch.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = fetch.take() {
                match handle.await {
                    Ok(Ok(dataset)) => app.install_dataset(dataset),
                    Ok(Err(error)) => app.set_error(&error),
                    Err(error) => app.set_error_message(format!("Fetch task failed: {error}")),
                }
            }
        }

        if app.reload_requested && fetch.is_none() {
            app.reload_requested = false;
            app.set_hover(None);
            app.screen = Screen::Loading;
            fetch = Some(spawn_fetch(&app.data_url));
        }

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    if let Ok(size) = terminal.size() {
                        let frame = Rect::new(0, 0, size.width, size.height);
                        handle_mouse(app, &mouse, frame);
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::FocusGained | Event::FocusLost | Event::Paste(_)) | Err(_) => {
                    // Ignore the rest
                }
            }
        }
    }
    Ok(())
}

/// Pointer-enter over a cell sets the hover target (tooltip shows);
/// leaving the grid or entering a padding gap clears it (tooltip hides).
fn handle_mouse(app: &mut App, mouse: &MouseEvent, frame: Rect) {
    if mouse.kind != MouseEventKind::Moved {
        return;
    }

    if app.screen != Screen::Heatmap {
        app.set_hover(None);
        return;
    }

    let layout = screen_layout(frame);
    let chart = layout.chart;
    let inside = mouse.column >= chart.x
        && mouse.column < chart.right()
        && mouse.row >= chart.y
        && mouse.row < chart.bottom();

    if !inside {
        app.set_hover(None);
        return;
    }

    let x = f64::from(mouse.column - chart.x) + 0.5;
    let y = f64::from(mouse.row - chart.y) + 0.5;
    let geometry = chart_geometry(&layout);

    let target = app
        .dataset
        .as_ref()
        .and_then(|dataset| hover_target(dataset, geometry, x, y))
        .map(|(year, month)| HoverTarget {
            year,
            month,
            pointer: Some((mouse.column, mouse.row)),
        });

    app.set_hover(target);
}

/// Run without a terminal: fetch, build the canonical 1200x600 model, and
/// print a summary (or the full model as JSON).
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let dataset = data::fetch_dataset(&app.data_url).await?;
    let report = build_report(&dataset, app.palette);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    base_temperature: f64,
    observations: usize,
    years: usize,
    year_range: Option<(i32, i32)>,
    temperature_range: Option<(f64, f64)>,
    palette: &'static str,
    geometry: ChartGeometry,
    tick_years: Vec<i32>,
    legend: Vec<LegendSwatch>,
    cells: Vec<Cell>,
}

fn build_report(dataset: &Dataset, palette: Palette) -> HeadlessReport {
    let geometry = ChartGeometry::default();
    let model = HeatmapModel::new(dataset, geometry, palette);

    HeadlessReport {
        base_temperature: dataset.base_temperature,
        observations: dataset.len(),
        years: dataset.years().len(),
        year_range: dataset.year_range(),
        temperature_range: dataset.temperature_extent(),
        palette: palette.as_str(),
        geometry,
        tick_years: model.tick_years(),
        legend: model.legend(),
        cells: model.cells().to_vec(),
    }
}

fn print_report(report: &HeadlessReport) {
    println!("\nGlobal Temperature Heatmap");
    println!("==========================");
    println!("Base temperature: {:.2}℃", report.base_temperature);
    println!("Observations: {}", report.observations);

    match report.year_range {
        Some((first, last)) => println!("Years: {} ({first}-{last})", report.years),
        None => println!("Years: 0"),
    }

    if let Some((min, max)) = report.temperature_range {
        println!("Temperature range: {min:.2}℃ to {max:.2}℃");
    }

    println!("Palette: {}", report.palette);
    println!("Decade ticks: {}", report.tick_years.len());
    println!(
        "Legend: {} swatches over {} units",
        report.legend.len(),
        report.geometry.legend_width
    );
}
