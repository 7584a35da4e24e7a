//! Heatmap rendering of the viscosity lattice.

use crate::app::App;
use crate::colormap::{heat_color, normalize};
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 3;
const LEFT_MARGIN: u16 = 7;

/// Draw the lattice heatmap with a colorbar and the current-point marker.
pub(super) fn draw_heatmap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let grid = &app.grid;

    let title = match grid.min_max {
        Some((min, max)) => format!(
            " Viscosity over T x gamma | {} .. {} Pa.s ",
            format_axis_label(min),
            format_axis_label(max)
        ),
        None => " Viscosity over T x gamma ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if grid.is_empty() {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return;
    }

    let Some((min_val, max_val)) = grid.min_max else {
        return;
    };

    let rows = grid.shear_rates.len();
    let cols = grid.temperatures.len();

    // Row 0 of the drawing area carries the colorbar; the lattice needs one
    // terminal row per shear-rate sample plus one row of axis labels.
    let needed_height = rows as u16 + 2;
    let needed_width = LEFT_MARGIN + cols as u16 * CELL_WIDTH;
    if inner.height < needed_height || inner.width < needed_width {
        let para = Paragraph::new("Terminal too small for the heatmap")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return;
    }

    draw_colorbar(f, inner, min_val, max_val, colors);

    // Highest shear rate on the top row so the Y axis ascends upward.
    let lattice_top = inner.y + 1;
    for (gi, _) in grid.shear_rates.iter().enumerate() {
        let screen_y = lattice_top + (rows - 1 - gi) as u16;
        for (ti, _) in grid.temperatures.iter().enumerate() {
            let eta = grid.values[[ti, gi]];
            let color = heat_color(normalize(eta, min_val, max_val)).to_color();
            for i in 0..CELL_WIDTH {
                let screen_x = inner.x + LEFT_MARGIN + ti as u16 * CELL_WIDTH + i;
                if let Some(cell) = f.buffer_mut().cell_mut((screen_x, screen_y)) {
                    cell.set_char('█').set_fg(color);
                }
            }
        }
    }

    draw_current_marker(f, inner, app, lattice_top, colors);
    draw_axis_labels(f, inner, app, lattice_top, colors);
}

fn draw_colorbar(f: &mut Frame<'_>, inner: Rect, min_val: f64, max_val: f64, colors: &ThemeColors) {
    let min_label = format_axis_label(min_val);
    let max_label = format_axis_label(max_val);
    let bar_width = (inner.width as usize)
        .saturating_sub(min_label.len() + max_label.len() + LEFT_MARGIN as usize + 4)
        .min(40);
    let bar_start = inner.x + LEFT_MARGIN + min_label.len() as u16 + 1;

    for (i, ch) in min_label.chars().enumerate() {
        let x = inner.x + LEFT_MARGIN + i as u16;
        if let Some(cell) = f.buffer_mut().cell_mut((x, inner.y)) {
            cell.set_char(ch).set_fg(colors.label);
        }
    }

    for i in 0..bar_width {
        let t = i as f64 / bar_width.max(1) as f64;
        let color = heat_color(t).to_color();
        let x = bar_start + i as u16;
        if x < inner.x + inner.width {
            if let Some(cell) = f.buffer_mut().cell_mut((x, inner.y)) {
                cell.set_char('█').set_fg(color);
            }
        }
    }

    for (i, ch) in max_label.chars().enumerate() {
        let x = bar_start + bar_width as u16 + 1 + i as u16;
        if x < inner.x + inner.width {
            if let Some(cell) = f.buffer_mut().cell_mut((x, inner.y)) {
                cell.set_char(ch).set_fg(colors.label);
            }
        }
    }
}

/// Mark the lattice cell nearest to the current operating point.
fn draw_current_marker(
    f: &mut Frame<'_>,
    inner: Rect,
    app: &App,
    lattice_top: u16,
    colors: &ThemeColors,
) {
    let grid = &app.grid;
    let rows = grid.shear_rates.len();

    let nearest = |samples: &[f64], value: f64| -> usize {
        samples
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (**a - value)
                    .abs()
                    .partial_cmp(&(**b - value).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    };

    let ti = nearest(&grid.temperatures, app.point.temperature);
    let gi = nearest(&grid.shear_rates, app.point.shear_rate);

    let screen_x = inner.x + LEFT_MARGIN + ti as u16 * CELL_WIDTH + CELL_WIDTH / 2;
    let screen_y = lattice_top + (rows - 1 - gi) as u16;
    if let Some(cell) = f.buffer_mut().cell_mut((screen_x, screen_y)) {
        cell.set_char('◆').set_fg(colors.marker);
    }
}

fn draw_axis_labels(
    f: &mut Frame<'_>,
    inner: Rect,
    app: &App,
    lattice_top: u16,
    colors: &ThemeColors,
) {
    let grid = &app.grid;
    let rows = grid.shear_rates.len();
    let cols = grid.temperatures.len();

    // Shear-rate labels on the left at the bottom, middle and top rows.
    for gi in [0, rows / 2, rows - 1] {
        let label = format_axis_label(grid.shear_rates[gi]);
        let screen_y = lattice_top + (rows - 1 - gi) as u16;
        for (i, ch) in label.chars().enumerate() {
            let x = inner.x + i as u16;
            if x < inner.x + LEFT_MARGIN {
                if let Some(cell) = f.buffer_mut().cell_mut((x, screen_y)) {
                    cell.set_char(ch).set_fg(colors.label);
                }
            }
        }
    }

    // Temperature labels under the first, middle and last columns.
    let label_y = lattice_top + rows as u16;
    for ti in [0, cols / 2, cols - 1] {
        let label = format_axis_label(grid.temperatures[ti]);
        let start_x = inner.x + LEFT_MARGIN + ti as u16 * CELL_WIDTH;
        for (i, ch) in label.chars().enumerate() {
            let x = start_x + i as u16;
            if x < inner.x + inner.width {
                if let Some(cell) = f.buffer_mut().cell_mut((x, label_y)) {
                    cell.set_char(ch).set_fg(colors.label);
                }
            }
        }
    }
}
