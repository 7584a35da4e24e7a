//! Derived sample series and grids.
//!
//! Everything here is regenerated from scratch on each operating-point
//! change: series are cheap, deterministic functions of their inputs and
//! carry no hidden state.

use ndarray::Array2;

use crate::error::{Result, RheoscopeError};
use crate::model::{viscosity, ModelParameters};

/// An inclusive stepped range over one axis.
///
/// `max < min` describes a valid, empty range. Sampling helpers assume the
/// step has been validated; the generation functions in this module do that
/// validation and fail fast on a non-positive step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    /// First sample (inclusive).
    pub min: f64,
    /// Last admissible sample (inclusive).
    pub max: f64,
    /// Distance between consecutive samples.
    pub step: f64,
}

impl SweepRange {
    /// Create a validated range.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    /// Check that the step is positive and all fields are finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("range min", self.min), ("range max", self.max)] {
            if !value.is_finite() {
                return Err(RheoscopeError::non_finite(name, value));
            }
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(RheoscopeError::non_positive_step(self.step));
        }
        Ok(())
    }

    /// Sample values `min, min + step, ...` up to and including `max`.
    ///
    /// Samples are computed as `min + i * step` rather than by accumulation,
    /// so identical inputs always produce bit-identical sequences.
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::new();
        if !(self.step > 0.0) {
            return values;
        }
        let mut i = 0u32;
        loop {
            let value = self.min + f64::from(i) * self.step;
            if value > self.max {
                break;
            }
            values.push(value);
            i += 1;
        }
        values
    }
}

/// A 1-D sweep of viscosity against one independent variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Series1D {
    /// `(independent variable, viscosity)` pairs in ascending x order.
    pub points: Vec<(f64, f64)>,
    /// Index of the first sample at or beyond the caller's current value,
    /// if the current value does not exceed the last sample.
    pub current_index: Option<usize>,
}

impl Series1D {
    /// Smallest and largest viscosity in the series, if non-empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, eta)| eta)
            .fold(None, |acc, eta| match acc {
                None => Some((eta, eta)),
                Some((min, max)) => Some((min.min(eta), max.max(eta))),
            })
    }
}

fn sweep(
    range: &SweepRange,
    current: f64,
    mut eval: impl FnMut(f64) -> Result<f64>,
) -> Result<Series1D> {
    range.validate()?;

    let xs = range.values();
    let mut points = Vec::with_capacity(xs.len());
    for x in xs {
        points.push((x, eval(x)?));
    }

    let current_index = points.iter().position(|&(x, _)| x >= current);
    Ok(Series1D {
        points,
        current_index,
    })
}

/// Viscosity against temperature at a fixed shear rate.
///
/// `current_temperature` only drives [`Series1D::current_index`] for
/// highlighting; it does not otherwise affect the samples.
pub fn temperature_sweep(
    fixed_shear_rate: f64,
    range: &SweepRange,
    current_temperature: f64,
    params: &ModelParameters,
) -> Result<Series1D> {
    sweep(range, current_temperature, |t| {
        viscosity(t, fixed_shear_rate, params)
    })
}

/// Viscosity against shear rate at a fixed temperature.
pub fn shear_sweep(
    fixed_temperature: f64,
    range: &SweepRange,
    current_shear_rate: f64,
    params: &ModelParameters,
) -> Result<Series1D> {
    sweep(range, current_shear_rate, |gamma| {
        viscosity(fixed_temperature, gamma, params)
    })
}

/// Viscosity sampled over the full temperature × shear-rate lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct ViscosityGrid {
    /// Temperature samples (ascending).
    pub temperatures: Vec<f64>,
    /// Shear-rate samples (ascending).
    pub shear_rates: Vec<f64>,
    /// Viscosity values, indexed `[temperature index, shear-rate index]`.
    pub values: Array2<f64>,
    /// Smallest and largest viscosity over the lattice (pre-computed),
    /// `None` when the lattice is empty.
    pub min_max: Option<(f64, f64)>,
}

impl ViscosityGrid {
    /// Iterate `(temperature, shear rate, viscosity)` triples, outer loop
    /// over temperatures, inner over shear rates.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.temperatures.iter().enumerate().flat_map(move |(ti, &t)| {
            self.shear_rates
                .iter()
                .enumerate()
                .map(move |(gi, &gamma)| (t, gamma, self.values[[ti, gi]]))
        })
    }

    /// True when either axis produced no samples.
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty() || self.shear_rates.is_empty()
    }
}

/// Sample the model over the cross product of two ranges.
pub fn viscosity_grid(
    temperature_range: &SweepRange,
    shear_range: &SweepRange,
    params: &ModelParameters,
) -> Result<ViscosityGrid> {
    temperature_range.validate()?;
    shear_range.validate()?;

    let temperatures = temperature_range.values();
    let shear_rates = shear_range.values();

    let mut values = Array2::zeros((temperatures.len(), shear_rates.len()));
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (ti, &t) in temperatures.iter().enumerate() {
        for (gi, &gamma) in shear_rates.iter().enumerate() {
            let eta = viscosity(t, gamma, params)?;
            values[[ti, gi]] = eta;
            if eta < min {
                min = eta;
            }
            if eta > max {
                max = eta;
            }
        }
    }

    let min_max = if values.is_empty() {
        None
    } else {
        Some((min, max))
    };

    Ok(ViscosityGrid {
        temperatures,
        shear_rates,
        values,
        min_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_range() -> SweepRange {
        SweepRange {
            min: 175.0,
            max: 205.0,
            step: 2.0,
        }
    }

    #[test]
    fn temperature_sweep_has_sixteen_strictly_decreasing_points() {
        let params = ModelParameters::default();
        let series = temperature_sweep(40.0, &reference_range(), 180.0, &params).unwrap();

        assert_eq!(series.points.len(), 16);
        assert_relative_eq!(series.points[0].0, 175.0);
        assert_relative_eq!(series.points[15].0, 205.0);
        for pair in series.points.windows(2) {
            assert!(pair[1].1 < pair[0].1);
        }
    }

    #[test]
    fn current_index_is_first_sample_at_or_beyond_current() {
        let params = ModelParameters::default();

        let series = temperature_sweep(40.0, &reference_range(), 180.0, &params).unwrap();
        // Samples are 175, 177, 179, 181, ...; 180 is not a sample, so the
        // highlight lands on 181.
        assert_eq!(series.current_index, Some(3));
        assert_relative_eq!(series.points[3].0, 181.0);

        let at_sample = temperature_sweep(40.0, &reference_range(), 175.0, &params).unwrap();
        assert_eq!(at_sample.current_index, Some(0));
    }

    #[test]
    fn current_beyond_last_sample_is_unhighlighted() {
        let params = ModelParameters::default();
        let series = temperature_sweep(40.0, &reference_range(), 206.0, &params).unwrap();
        assert_eq!(series.current_index, None);
    }

    #[test]
    fn shear_sweep_is_symmetric_to_temperature_sweep() {
        let params = ModelParameters::default();
        let range = SweepRange {
            min: 30.0,
            max: 60.0,
            step: 2.0,
        };
        let series = shear_sweep(190.0, &range, 40.0, &params).unwrap();
        assert_eq!(series.points.len(), 16);
        assert_eq!(series.current_index, Some(5));
        for pair in series.points.windows(2) {
            assert!(pair[1].1 < pair[0].1, "shear thinning expected");
        }
    }

    #[test]
    fn inverted_range_yields_empty_series() {
        let params = ModelParameters::default();
        let range = SweepRange {
            min: 205.0,
            max: 175.0,
            step: 2.0,
        };
        let series = temperature_sweep(40.0, &range, 180.0, &params).unwrap();
        assert!(series.points.is_empty());
        assert_eq!(series.current_index, None);
        assert_eq!(series.min_max(), None);
    }

    #[test]
    fn non_positive_step_fails_fast() {
        let params = ModelParameters::default();
        for step in [0.0, -1.0] {
            let range = SweepRange {
                min: 175.0,
                max: 205.0,
                step,
            };
            assert!(matches!(
                temperature_sweep(40.0, &range, 180.0, &params),
                Err(RheoscopeError::NonPositiveStep { .. })
            ));
            assert!(matches!(
                viscosity_grid(&range, &range, &params),
                Err(RheoscopeError::NonPositiveStep { .. })
            ));
        }
    }

    #[test]
    fn invalid_fixed_shear_rate_propagates_from_the_model() {
        let params = ModelParameters::default();
        assert!(matches!(
            temperature_sweep(0.0, &reference_range(), 180.0, &params),
            Err(RheoscopeError::NonPositiveShearRate { .. })
        ));
    }

    #[test]
    fn grid_covers_the_reference_lattice() {
        let params = ModelParameters::default();
        let t_range = SweepRange {
            min: 175.0,
            max: 205.0,
            step: 3.0,
        };
        let g_range = SweepRange {
            min: 30.0,
            max: 60.0,
            step: 3.0,
        };
        let grid = viscosity_grid(&t_range, &g_range, &params).unwrap();

        assert_eq!(grid.temperatures.len(), 11);
        assert_eq!(grid.shear_rates.len(), 11);
        assert_eq!(grid.values.dim(), (11, 11));
        assert_eq!(grid.points().count(), 121);

        // b > 0 and n < 1, so the extremes sit at the lattice corners.
        let (min, max) = grid.min_max.unwrap();
        assert_relative_eq!(min, viscosity(205.0, 60.0, &params).unwrap());
        assert_relative_eq!(max, viscosity(175.0, 30.0, &params).unwrap());
    }

    #[test]
    fn grid_iteration_order_is_outer_temperature_inner_shear() {
        let params = ModelParameters::default();
        let t_range = SweepRange {
            min: 175.0,
            max: 181.0,
            step: 3.0,
        };
        let g_range = SweepRange {
            min: 30.0,
            max: 36.0,
            step: 3.0,
        };
        let grid = viscosity_grid(&t_range, &g_range, &params).unwrap();
        let points: Vec<_> = grid.points().collect();
        let coords: Vec<(f64, f64)> = points.iter().map(|&(t, g, _)| (t, g)).collect();
        assert_eq!(
            coords,
            vec![
                (175.0, 30.0),
                (175.0, 33.0),
                (175.0, 36.0),
                (178.0, 30.0),
                (178.0, 33.0),
                (178.0, 36.0),
                (181.0, 30.0),
                (181.0, 33.0),
                (181.0, 36.0),
            ]
        );
    }

    #[test]
    fn identical_inputs_produce_identical_series() {
        let params = ModelParameters::default();
        let a = temperature_sweep(40.0, &reference_range(), 181.0, &params).unwrap();
        let b = temperature_sweep(40.0, &reference_range(), 181.0, &params).unwrap();
        assert_eq!(a, b);
    }
}
