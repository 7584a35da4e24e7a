//! Readout panel with slider gauges for the operating point.

use crate::app::App;
use crate::colormap::normalize;
use crate::ui::formatters::format_stat_value;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draw the header: current values plus one gauge per slider.
pub(super) fn draw_readout(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Rheoscope - extrusion viscosity explorer ")
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let t_bounds = app.config.temperature.bounds;
    let temperature_gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors.label).bg(colors.status_bg))
        .ratio(normalize(app.point.temperature, t_bounds.min, t_bounds.max))
        .label(format!("Temperature: {} C", app.point.temperature));
    f.render_widget(temperature_gauge, chunks[0]);

    let g_bounds = app.config.shear_rate.bounds;
    let shear_gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors.label).bg(colors.status_bg))
        .ratio(normalize(app.point.shear_rate, g_bounds.min, g_bounds.max))
        .label(format!("Shear rate: {} 1/s", app.point.shear_rate));
    f.render_widget(shear_gauge, chunks[1]);

    let viscosity_line = Line::from(vec![
        Span::styled("Viscosity: ", Style::default().fg(colors.label)),
        Span::styled(
            format!("{} Pa.s", format_stat_value(app.viscosity)),
            Style::default()
                .fg(colors.value)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(viscosity_line).style(Style::default().bg(colors.bg)),
        chunks[2],
    );
}
