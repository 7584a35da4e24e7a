//! Configuration constants for the explorer.
//!
//! All bounds, step sizes and offsets are compile-time defaults; the model
//! itself never clamps, so callers pass these explicitly.

use crate::series::SweepRange;

/// Inclusive display bounds for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Check whether a value lies within the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to the bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Configuration for the temperature axis.
#[derive(Debug, Clone)]
pub struct TemperatureAxisConfig {
    /// Display bounds in degrees Celsius.
    pub bounds: Bounds,
    /// Step for the 1-D chart sweep.
    pub chart_step: f64,
    /// Step for the 2-D grid sweep.
    pub grid_step: f64,
}

impl Default for TemperatureAxisConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds {
                min: 175.0,
                max: 205.0,
            },
            chart_step: 2.0,
            grid_step: 3.0,
        }
    }
}

/// Configuration for the shear-rate axis.
#[derive(Debug, Clone)]
pub struct ShearAxisConfig {
    /// Display bounds in 1/s.
    pub bounds: Bounds,
    /// Step for the 1-D chart sweep.
    pub chart_step: f64,
    /// Step for the 2-D grid sweep.
    pub grid_step: f64,
}

impl Default for ShearAxisConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds {
                min: 30.0,
                max: 60.0,
            },
            chart_step: 2.0,
            grid_step: 3.0,
        }
    }
}

/// Combined configuration for the explorer.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Temperature axis bounds and steps.
    pub temperature: TemperatureAxisConfig,
    /// Shear-rate axis bounds and steps.
    pub shear_rate: ShearAxisConfig,
    /// Coarse step used by the exported report sweeps.
    pub report_step: f64,
    /// Increment applied per keypress when adjusting a slider.
    pub slider_step: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureAxisConfig::default(),
            shear_rate: ShearAxisConfig::default(),
            report_step: 5.0,
            slider_step: 1.0,
        }
    }
}

impl ExplorerConfig {
    /// Sweep range for the temperature chart.
    pub fn temperature_chart_range(&self) -> SweepRange {
        SweepRange {
            min: self.temperature.bounds.min,
            max: self.temperature.bounds.max,
            step: self.temperature.chart_step,
        }
    }

    /// Sweep range for the shear-rate chart.
    pub fn shear_chart_range(&self) -> SweepRange {
        SweepRange {
            min: self.shear_rate.bounds.min,
            max: self.shear_rate.bounds.max,
            step: self.shear_rate.chart_step,
        }
    }

    /// Sweep range for the temperature axis of the heatmap grid.
    pub fn temperature_grid_range(&self) -> SweepRange {
        SweepRange {
            min: self.temperature.bounds.min,
            max: self.temperature.bounds.max,
            step: self.temperature.grid_step,
        }
    }

    /// Sweep range for the shear-rate axis of the heatmap grid.
    pub fn shear_grid_range(&self) -> SweepRange {
        SweepRange {
            min: self.shear_rate.bounds.min,
            max: self.shear_rate.bounds.max,
            step: self.shear_rate.grid_step,
        }
    }

    /// Sweep range for the temperature section of the report.
    pub fn temperature_report_range(&self) -> SweepRange {
        SweepRange {
            min: self.temperature.bounds.min,
            max: self.temperature.bounds.max,
            step: self.report_step,
        }
    }

    /// Sweep range for the shear-rate section of the report.
    pub fn shear_report_range(&self) -> SweepRange {
        SweepRange {
            min: self.shear_rate.bounds.min,
            max: self.shear_rate.bounds.max,
            step: self.report_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_endpoints() {
        let b = Bounds {
            min: 175.0,
            max: 205.0,
        };
        assert!(b.contains(175.0));
        assert!(b.contains(205.0));
        assert!(!b.contains(174.9));
        assert!(!b.contains(205.1));
    }

    #[test]
    fn bounds_clamp() {
        let b = Bounds {
            min: 30.0,
            max: 60.0,
        };
        assert_eq!(b.clamp(25.0), 30.0);
        assert_eq!(b.clamp(65.0), 60.0);
        assert_eq!(b.clamp(45.0), 45.0);
    }

    #[test]
    fn default_ranges_match_reference_configuration() {
        let config = ExplorerConfig::default();
        assert_eq!(config.temperature_chart_range().values().len(), 16);
        assert_eq!(config.shear_chart_range().values().len(), 16);
        assert_eq!(config.temperature_grid_range().values().len(), 11);
        assert_eq!(config.shear_grid_range().values().len(), 11);
        assert_eq!(config.temperature_report_range().values().len(), 7);
        assert_eq!(config.shear_report_range().values().len(), 7);
    }
}
