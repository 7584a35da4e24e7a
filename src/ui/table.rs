//! Neighborhood table rendering.

use crate::app::App;
use crate::colormap::heat_color;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw the neighborhood table with band-colored viscosity cells.
pub(super) fn draw_table(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let header = Row::new(vec![
        Cell::from("T (C)"),
        Cell::from("gamma (1/s)"),
        Cell::from("eta (Pa.s)"),
        Cell::from("band"),
    ])
    .style(
        Style::default()
            .fg(colors.label)
            .add_modifier(Modifier::BOLD),
    );

    let is_current = |t: f64, g: f64| t == app.point.temperature && g == app.point.shear_rate;

    let rows: Vec<Row<'_>> = app
        .table_rows
        .iter()
        .map(|row| {
            let band_color = heat_color(row.band.midpoint()).to_color();
            let base = if is_current(row.temperature, row.shear_rate) {
                Style::default()
                    .fg(colors.marker)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Row::new(vec![
                Cell::from(format!("{:>8.1}", row.temperature)).style(base),
                Cell::from(format!("{:>8.1}", row.shear_rate)).style(base),
                Cell::from(format!("{:>10.2}", row.viscosity))
                    .style(Style::default().fg(band_color)),
                Cell::from(row.band.name()).style(Style::default().fg(band_color)),
            ])
        })
        .collect();

    let title = format!(
        " Neighborhood of T={} C, gamma={} 1/s ({} rows) ",
        app.point.temperature,
        app.point.shear_rate,
        app.table_rows.len()
    );

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(Style::default().fg(colors.heading)),
        )
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(table, area);
}
