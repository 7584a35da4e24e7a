//! Sweep charts for the two independent variables.

use crate::app::App;
use crate::series::Series1D;
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw both sweep charts side by side.
pub(super) fn draw_charts(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_sweep_chart(
        f,
        chunks[0],
        &app.temperature_series,
        app.viscosity,
        " Viscosity vs temperature ",
        "T (C)",
        colors,
    );
    draw_sweep_chart(
        f,
        chunks[1],
        &app.shear_series,
        app.viscosity,
        " Viscosity vs shear rate ",
        "gamma (1/s)",
        colors,
    );
}

fn draw_sweep_chart(
    f: &mut Frame<'_>,
    area: Rect,
    series: &Series1D,
    current_viscosity: f64,
    title: &str,
    x_title: &str,
    colors: &ThemeColors,
) {
    let Some((min_val, max_val)) = series.min_max() else {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    };

    // 15% margin keeps the curve off the chart frame.
    let padding = (max_val - min_val).abs() * 0.15;
    let (y_min, y_max) = (min_val - padding, max_val + padding);

    let x_min = series.points[0].0;
    let x_max = series.points[series.points.len() - 1].0;

    let mut datasets = vec![Dataset::default()
        .name("viscosity")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.value))
        .data(&series.points)];

    // Highlight the sample at or just beyond the current value, as the
    // slider sits between samples most of the time.
    let highlight: Vec<(f64, f64)> = series
        .current_index
        .map(|idx| vec![(series.points[idx].0, current_viscosity)])
        .unwrap_or_default();
    if !highlight.is_empty() {
        datasets.push(
            Dataset::default()
                .name("current")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.marker))
                .data(&highlight),
        );
    }

    let x_axis = Axis::default()
        .title(x_title.to_string())
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .title("eta (Pa.s)")
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title.to_string())
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
