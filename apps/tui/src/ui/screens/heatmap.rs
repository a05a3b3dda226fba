use crate::app::App;
use crate::domain::Dataset;
use crate::heatmap::{ChartGeometry, HeatmapModel};
use crate::ui::widgets::heatmap::{render_grid, render_month_axis, render_year_axis};
use crate::ui::widgets::legend::render_legend;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::tooltip::render_tooltip;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Width of the month-name column left of the grid.
const MONTH_AXIS_WIDTH: u16 = 10;

/// The screen's rectangles. Computed from the frame area alone so the
/// mouse handler can rebuild the same layout for hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub title: Rect,
    pub chart_block: Rect,
    pub y_axis: Rect,
    pub chart: Rect,
    pub x_axis: Rect,
    pub legend_block: Rect,
    pub legend: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(8),    // Chart area
            Constraint::Length(4), // Legend area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(2, 1)));

    let chart_inner = sections[1].inner(Margin::new(1, 1));
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MONTH_AXIS_WIDTH), Constraint::Min(10)])
        .split(chart_inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(columns[1]);

    let y_axis = Rect {
        height: rows[0].height,
        ..columns[0]
    };

    ScreenLayout {
        title: sections[0],
        chart_block: sections[1],
        y_axis,
        chart: rows[0],
        x_axis: rows[1],
        legend_block: sections[2],
        legend: sections[2].inner(Margin::new(1, 1)),
        status: sections[3],
        shortcuts: sections[4],
    }
}

/// Model geometry for the current layout: scales over the chart Rect, the
/// legend strip bounded by its block.
pub fn chart_geometry(layout: &ScreenLayout) -> ChartGeometry {
    let strip = layout.legend.width.saturating_sub(2).clamp(10, 60);
    ChartGeometry::terminal(layout.chart.width, layout.chart.height, strip)
}

pub fn render_heatmap_screen(app: &App, f: &mut Frame<'_>) {
    let layout = screen_layout(f.area());

    if app.show_help {
        render_help_popup(app, f);
        return;
    }

    render_title_section(app, f, layout.title);

    let Some(dataset) = app.dataset.as_ref() else {
        render_empty_state(f, layout.chart_block, "No dataset loaded");
        render_status_section(app, f, layout.status, None);
        render_shortcuts(f, layout.shortcuts);
        return;
    };

    if dataset.is_empty() {
        render_empty_state(f, layout.chart_block, "No observations available");
        render_status_section(app, f, layout.status, Some(dataset));
        render_shortcuts(f, layout.shortcuts);
        return;
    }

    let model = HeatmapModel::new(dataset, chart_geometry(&layout), app.palette);

    render_chart_section(f, &layout, &model);
    render_legend_section(f, &layout, &model);
    render_status_section(app, f, layout.status, Some(dataset));
    render_shortcuts(f, layout.shortcuts);

    // tooltip last so it sits above the grid
    render_tooltip(app, f, &layout, &model);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Global Temperature Heatmap ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let subtitle = app.dataset.as_ref().map_or_else(
        || "Monthly land-surface variance".to_string(),
        |dataset| match dataset.year_range() {
            Some((first, last)) => {
                format!("{first}-{last}, base {:.2}℃", dataset.base_temperature)
            }
            None => format!("base {:.2}℃", dataset.base_temperature),
        },
    );

    let title_paragraph = Paragraph::new(Text::from(vec![TextLine::from(vec![
        Span::styled(
            "Monthly Variance ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle, Style::default().fg(Color::White)),
    ])]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, chunks[0]);

    render_palette_ribbon(app, f, chunks[1]);
}

/// Animated strip of the active palette, drifting with the animation clock.
fn render_palette_ribbon(app: &App, f: &mut Frame<'_>, area: Rect) {
    if area.width < 4 || area.height < 1 {
        return;
    }

    let buf = f.buffer_mut();
    let row = area.y + area.height / 2;
    let phase = app.animation_counter / (2.0 * std::f64::consts::PI);

    for col in 0..area.width {
        let t = (f64::from(col) / f64::from(area.width.max(1)) + phase) % 1.0;
        if let Some(slot) = buf.cell_mut((area.x + col, row)) {
            slot.set_bg(app.palette.color(t));
        }
    }
}

fn render_chart_section(f: &mut Frame<'_>, layout: &ScreenLayout, model: &HeatmapModel) {
    let chart_block = Block::default()
        .title(" Monthly Global Land-Surface Temperature ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(chart_block, layout.chart_block);

    render_month_axis(model, f, layout.y_axis);
    render_grid(model, f, layout.chart);
    render_year_axis(model, f, layout.x_axis);
}

fn render_legend_section(f: &mut Frame<'_>, layout: &ScreenLayout, model: &HeatmapModel) {
    let legend_block = Block::default()
        .title(" Legend ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(legend_block, layout.legend_block);

    render_legend(model, f, layout.legend);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect, dataset: Option<&Dataset>) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = hover_summary(app, dataset).unwrap_or_else(|| {
        if app.status_message.is_empty() {
            dataset.map_or_else(String::new, |dataset| {
                format!("{} observations", dataset.len())
            })
        } else {
            app.status_message.clone()
        }
    });

    let style = if text.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(Text::from(Span::styled(text, style)))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn hover_summary(app: &App, dataset: Option<&Dataset>) -> Option<String> {
    let hover = app.hover?;
    let dataset = dataset?;
    let observation = dataset
        .observations
        .iter()
        .rev()
        .find(|observation| {
            observation.year == hover.year && observation.month_index() == hover.month
        })?;

    Some(format!(
        "{} {}: {:.2}℃ ({:+.3}℃ from base)",
        observation.month.name(),
        observation.year,
        dataset.absolute_temp(observation),
        observation.variance,
    ))
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit | "),
        Span::styled("h", Style::default().fg(Color::Yellow)),
        Span::raw(" help | "),
        Span::styled("p", Style::default().fg(Color::Yellow)),
        Span::raw(" palette | "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" reload | "),
        Span::styled("arrows/mouse", Style::default().fg(Color::Yellow)),
        Span::raw(" hover"),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_empty_state(f: &mut Frame<'_>, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Monthly Global Land-Surface Temperature ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_help_popup(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        TextLine::from("Keys"),
        TextLine::from("  q / Esc     quit (Esc clears the hover first)"),
        TextLine::from("  h           toggle this help"),
        TextLine::from("  p           cycle the color palette"),
        TextLine::from("  r           refetch the dataset"),
        TextLine::from("  arrow keys  move the hover cursor"),
        TextLine::from("  mouse       hover a cell for its tooltip"),
        TextLine::from(""),
        TextLine::from(format!("Palette: {}", app.palette.label())),
        TextLine::from(format!("Dataset: {}", app.data_url)),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
