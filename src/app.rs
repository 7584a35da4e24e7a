//! Application state and logic.

use std::path::Path;

use crate::clipboard;
use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::model::{viscosity, ModelParameters, OperatingPoint};
use crate::report::format_report;
use crate::series::{
    shear_sweep, temperature_sweep, viscosity_grid, Series1D, ViscosityGrid,
};
use crate::table::{neighborhood_table, TableRow};

/// Default file the interactive export writes to.
pub const EXPORT_FILE: &str = "extrusion_data.csv";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// View mode for the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Temperature and shear-rate sweep charts side by side.
    #[default]
    Charts,
    /// Neighborhood table with banded viscosity cells.
    Table,
    /// Heatmap over the temperature × shear-rate lattice.
    Heatmap,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Charts => ViewMode::Table,
            ViewMode::Table => ViewMode::Heatmap,
            ViewMode::Heatmap => ViewMode::Charts,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Charts => "Charts",
            ViewMode::Table => "Table",
            ViewMode::Heatmap => "Heatmap",
        }
    }
}

/// Application state.
///
/// All derived datasets are regenerated on every operating-point change;
/// nothing here is memoized across changes.
#[derive(Debug)]
pub struct App {
    /// Axis bounds, steps and offsets.
    pub config: ExplorerConfig,
    /// Model calibration constants.
    pub params: ModelParameters,
    /// Current operating point, always within the configured bounds.
    pub point: OperatingPoint,
    /// Viscosity at the current point.
    pub viscosity: f64,
    /// Temperature sweep at the current shear rate.
    pub temperature_series: Series1D,
    /// Shear-rate sweep at the current temperature.
    pub shear_series: Series1D,
    /// Neighborhood table around the current point.
    pub table_rows: Vec<TableRow>,
    /// Lattice for the heatmap view.
    pub grid: ViscosityGrid,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance at the given operating point,
    /// clamped to the configured bounds.
    pub fn new(
        config: ExplorerConfig,
        params: ModelParameters,
        point: OperatingPoint,
    ) -> Result<Self> {
        let mut app = Self {
            point: point.clamped_to(&config),
            config,
            params,
            viscosity: 0.0,
            temperature_series: Series1D {
                points: Vec::new(),
                current_index: None,
            },
            shear_series: Series1D {
                points: Vec::new(),
                current_index: None,
            },
            table_rows: Vec::new(),
            grid: ViscosityGrid {
                temperatures: Vec::new(),
                shear_rates: Vec::new(),
                values: ndarray::Array2::zeros((0, 0)),
                min_max: None,
            },
            view_mode: ViewMode::default(),
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
        };
        app.refresh()?;
        Ok(app)
    }

    /// Regenerate every derived dataset from the current point.
    pub fn refresh(&mut self) -> Result<()> {
        self.viscosity = viscosity(self.point.temperature, self.point.shear_rate, &self.params)?;
        self.temperature_series = temperature_sweep(
            self.point.shear_rate,
            &self.config.temperature_chart_range(),
            self.point.temperature,
            &self.params,
        )?;
        self.shear_series = shear_sweep(
            self.point.temperature,
            &self.config.shear_chart_range(),
            self.point.shear_rate,
            &self.params,
        )?;
        self.table_rows = neighborhood_table(
            self.point.temperature,
            self.point.shear_rate,
            &self.config.temperature.bounds,
            &self.config.shear_rate.bounds,
            &self.params,
        )?;
        self.grid = viscosity_grid(
            &self.config.temperature_grid_range(),
            &self.config.shear_grid_range(),
            &self.params,
        )?;
        Ok(())
    }

    fn refresh_or_report(&mut self) {
        if let Err(e) = self.refresh() {
            tracing::error!("Refresh failed: {}", e);
            self.status = format!("Refresh failed: {}", e);
        }
    }

    /// Step the temperature by `steps` slider increments, clamped.
    pub fn nudge_temperature(&mut self, steps: f64) {
        let next = self.point.temperature + steps * self.config.slider_step;
        self.point.temperature = self.config.temperature.bounds.clamp(next);
        self.refresh_or_report();
    }

    /// Step the shear rate by `steps` slider increments, clamped.
    pub fn nudge_shear_rate(&mut self, steps: f64) {
        let next = self.point.shear_rate + steps * self.config.slider_step;
        self.point.shear_rate = self.config.shear_rate.bounds.clamp(next);
        self.refresh_or_report();
    }

    /// Restore the default operating point.
    pub fn reset(&mut self) {
        self.point = OperatingPoint::default().clamped_to(&self.config);
        self.refresh_or_report();
        self.status = "Reset to defaults".to_string();
    }

    /// Cycle to the next view mode.
    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
        self.status = format!("View: {}", self.view_mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Build the export report for the current point.
    ///
    /// The report sweeps use the coarse report step rather than the chart
    /// step.
    pub fn build_report(&self) -> Result<String> {
        let temperature_series = temperature_sweep(
            self.point.shear_rate,
            &self.config.temperature_report_range(),
            self.point.temperature,
            &self.params,
        )?;
        let shear_series = shear_sweep(
            self.point.temperature,
            &self.config.shear_report_range(),
            self.point.shear_rate,
            &self.params,
        )?;
        format_report(&self.point, &self.params, &temperature_series, &shear_series)
    }

    /// Write the report to a file.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let report = self.build_report()?;
        std::fs::write(path, report)?;
        Ok(())
    }

    /// Write the report to [`EXPORT_FILE`], updating the status line.
    pub fn export_report(&mut self) {
        match self.export_to(Path::new(EXPORT_FILE)) {
            Ok(_) => {
                tracing::info!("Report exported to {}", EXPORT_FILE);
                self.status = format!("Exported to {}", EXPORT_FILE);
            },
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.status = format!("Export failed: {}", e);
            },
        }
    }

    /// Copy the report to the clipboard, updating the status line.
    pub fn copy_report(&mut self) {
        let report = match self.build_report() {
            Ok(r) => r,
            Err(e) => {
                self.status = format!("Copy failed: {}", e);
                return;
            },
        };
        match clipboard::copy_to_clipboard(&report) {
            Ok(_) => self.status = "Report copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Show the key help line.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, h/l=temperature, j/k=shear rate, Tab=view, r=reset, e=export, c=copy, T=theme"
                .to_string();
    }
}
