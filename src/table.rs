//! Neighborhood table around the current operating point.
//!
//! The table samples a 5×5 cross of offsets around the current point,
//! clipped to the axis bounds, and classifies each viscosity into one of
//! five bands relative to the table's own value range.

use crate::colormap::normalize;
use crate::config::Bounds;
use crate::error::Result;
use crate::model::{viscosity, ModelParameters};

/// Offsets applied around the current point on both axes.
pub const NEIGHBORHOOD_OFFSETS: [f64; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];

/// Relative magnitude band of a viscosity value within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViscosityBand {
    /// Normalized value at or below 0.2 (and the degenerate all-equal case).
    Low,
    /// Normalized value above 0.2.
    MediumLow,
    /// Normalized value above 0.4.
    Medium,
    /// Normalized value above 0.6.
    MediumHigh,
    /// Normalized value above 0.8.
    High,
}

impl ViscosityBand {
    /// Classify a normalized value into a band.
    ///
    /// Comparisons are strict, so values exactly on a threshold fall to the
    /// lower band. A non-finite input (0/0 from an all-equal table) is
    /// treated as the lowest band.
    pub fn classify(normalized: f64) -> Self {
        if !normalized.is_finite() {
            return Self::Low;
        }
        if normalized > 0.8 {
            Self::High
        } else if normalized > 0.6 {
            Self::MediumHigh
        } else if normalized > 0.4 {
            Self::Medium
        } else if normalized > 0.2 {
            Self::MediumLow
        } else {
            Self::Low
        }
    }

    /// Get the band name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::MediumLow => "medium-low",
            Self::Medium => "medium",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
        }
    }

    /// Midpoint of the band on the normalized scale, for color mapping.
    pub fn midpoint(self) -> f64 {
        match self {
            Self::Low => 0.1,
            Self::MediumLow => 0.3,
            Self::Medium => 0.5,
            Self::MediumHigh => 0.7,
            Self::High => 0.9,
        }
    }
}

/// One classified row of the neighborhood table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Temperature, °C.
    pub temperature: f64,
    /// Shear rate, 1/s.
    pub shear_rate: f64,
    /// Viscosity, Pa·s.
    pub viscosity: f64,
    /// Magnitude band within this table.
    pub band: ViscosityBand,
}

fn candidates(current: f64, bounds: &Bounds) -> Vec<f64> {
    NEIGHBORHOOD_OFFSETS
        .iter()
        .map(|offset| current + offset)
        .filter(|value| bounds.contains(*value))
        .collect()
}

/// Build the classified neighborhood table for the current point.
///
/// Rows are ordered with the outer loop over temperatures and the inner
/// loop over shear rates. Bands are assigned against the min/max of this
/// table's own viscosities; when every row is equal all rows land in the
/// lowest band.
pub fn neighborhood_table(
    current_temperature: f64,
    current_shear_rate: f64,
    temperature_bounds: &Bounds,
    shear_bounds: &Bounds,
    params: &ModelParameters,
) -> Result<Vec<TableRow>> {
    let temperatures = candidates(current_temperature, temperature_bounds);
    let shear_rates = candidates(current_shear_rate, shear_bounds);

    let mut rows = Vec::with_capacity(temperatures.len() * shear_rates.len());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &t in &temperatures {
        for &gamma in &shear_rates {
            let eta = viscosity(t, gamma, params)?;
            if eta < min {
                min = eta;
            }
            if eta > max {
                max = eta;
            }
            rows.push(TableRow {
                temperature: t,
                shear_rate: gamma,
                viscosity: eta,
                band: ViscosityBand::Low,
            });
        }
    }

    for row in &mut rows {
        row.band = ViscosityBand::classify(normalize(row.viscosity, min, max));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;

    fn reference_bounds() -> (Bounds, Bounds) {
        let config = ExplorerConfig::default();
        (config.temperature.bounds, config.shear_rate.bounds)
    }

    #[test]
    fn out_of_bounds_offsets_are_excluded() {
        let params = ModelParameters::default();
        let (t_bounds, g_bounds) = reference_bounds();
        let rows = neighborhood_table(180.0, 40.0, &t_bounds, &g_bounds, &params).unwrap();

        // 170 falls below the 175 lower bound, so only four temperatures
        // survive; all five shear candidates are in range.
        assert_eq!(rows.len(), 4 * 5);
        assert!(rows.iter().all(|r| r.temperature >= 175.0));
        assert!(!rows.iter().any(|r| r.temperature == 170.0));

        let temps: Vec<f64> = rows.iter().map(|r| r.temperature).collect();
        for expected in [175.0, 180.0, 185.0, 190.0] {
            assert!(temps.contains(&expected));
        }
    }

    #[test]
    fn rows_are_ordered_outer_temperature_inner_shear() {
        let params = ModelParameters::default();
        let (t_bounds, g_bounds) = reference_bounds();
        let rows = neighborhood_table(190.0, 45.0, &t_bounds, &g_bounds, &params).unwrap();

        assert_eq!(rows.len(), 25);
        assert_eq!(rows[0].temperature, 180.0);
        assert_eq!(rows[0].shear_rate, 35.0);
        assert_eq!(rows[4].shear_rate, 55.0);
        assert_eq!(rows[5].temperature, 185.0);
        assert_eq!(rows[24].temperature, 200.0);
        assert_eq!(rows[24].shear_rate, 55.0);
    }

    #[test]
    fn extremes_map_to_outer_bands() {
        let params = ModelParameters::default();
        let (t_bounds, g_bounds) = reference_bounds();
        let rows = neighborhood_table(190.0, 45.0, &t_bounds, &g_bounds, &params).unwrap();

        // Coldest/slowest corner has the largest viscosity.
        let max_row = rows
            .iter()
            .find(|r| r.temperature == 180.0 && r.shear_rate == 35.0)
            .unwrap();
        assert_eq!(max_row.band, ViscosityBand::High);

        let min_row = rows
            .iter()
            .find(|r| r.temperature == 200.0 && r.shear_rate == 55.0)
            .unwrap();
        assert_eq!(min_row.band, ViscosityBand::Low);
    }

    #[test]
    fn constant_model_yields_lowest_band_everywhere() {
        // b = 0 and n = 1 make the model constant, so min == max and the
        // 0/0 normalization must not surface as NaN.
        let params = ModelParameters::new(1550.0, 0.0, 180.0, 1.0).unwrap();
        let (t_bounds, g_bounds) = reference_bounds();
        let rows = neighborhood_table(190.0, 45.0, &t_bounds, &g_bounds, &params).unwrap();

        assert_eq!(rows.len(), 25);
        for row in &rows {
            assert_eq!(row.band, ViscosityBand::Low);
            assert!(row.viscosity.is_finite());
        }
    }

    #[test]
    fn threshold_values_fall_to_the_lower_band() {
        assert_eq!(ViscosityBand::classify(0.8), ViscosityBand::MediumHigh);
        assert_eq!(ViscosityBand::classify(0.6), ViscosityBand::Medium);
        assert_eq!(ViscosityBand::classify(0.4), ViscosityBand::MediumLow);
        assert_eq!(ViscosityBand::classify(0.2), ViscosityBand::Low);
        assert_eq!(ViscosityBand::classify(0.81), ViscosityBand::High);
        assert_eq!(ViscosityBand::classify(f64::NAN), ViscosityBand::Low);
    }
}
