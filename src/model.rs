//! The rheological model.
//!
//! Viscosity follows a power law with an exponential temperature shift:
//!
//! `eta = mu_0 * exp(-b * (T - T_0)) * gamma^(n - 1)`
//!
//! The evaluator is pure: it never clamps its inputs and keeps no state.
//! Callers are expected to hold the operating point inside the configured
//! display bounds; the model only rejects inputs for which the formula
//! itself is undefined.

use crate::config::ExplorerConfig;
use crate::error::{Result, RheoscopeError};

/// Calibration constants of the viscosity model. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Consistency/reference viscosity at `T_0` and unit shear rate, Pa·s^n.
    pub mu_0: f64,
    /// Temperature shift constant, 1/°C.
    pub b: f64,
    /// Reference temperature, °C.
    pub t_ref: f64,
    /// Power-law flow index (dimensionless).
    pub n: f64,
}

impl ModelParameters {
    /// Create validated model parameters.
    ///
    /// `mu_0` must be strictly positive and every constant must be finite.
    pub fn new(mu_0: f64, b: f64, t_ref: f64, n: f64) -> Result<Self> {
        if !mu_0.is_finite() || mu_0 <= 0.0 {
            return Err(RheoscopeError::invalid_parameters(format!(
                "mu_0 must be a positive finite number, got {mu_0}"
            )));
        }
        for (name, value) in [("b", b), ("t_ref", t_ref), ("n", n)] {
            if !value.is_finite() {
                return Err(RheoscopeError::invalid_parameters(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(Self { mu_0, b, t_ref, n })
    }
}

impl Default for ModelParameters {
    /// Reference calibration for the modeled extrusion melt.
    fn default() -> Self {
        Self {
            mu_0: 1550.0,
            b: 0.0146,
            t_ref: 180.0,
            n: 0.395,
        }
    }
}

/// The point the operator is currently inspecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Melt temperature, °C.
    pub temperature: f64,
    /// Shear rate, 1/s.
    pub shear_rate: f64,
}

impl OperatingPoint {
    /// Return a copy clamped to the configured axis bounds.
    pub fn clamped_to(&self, config: &ExplorerConfig) -> Self {
        Self {
            temperature: config.temperature.bounds.clamp(self.temperature),
            shear_rate: config.shear_rate.bounds.clamp(self.shear_rate),
        }
    }
}

impl Default for OperatingPoint {
    /// Default operating point of the explorer.
    fn default() -> Self {
        Self {
            temperature: 180.0,
            shear_rate: 40.0,
        }
    }
}

/// Evaluate the viscosity model at a temperature and shear rate.
///
/// Returns a domain error for a non-positive shear rate (the power term is
/// undefined there) or for any non-finite input; NaN never propagates into
/// the result.
pub fn viscosity(temperature: f64, shear_rate: f64, params: &ModelParameters) -> Result<f64> {
    if !temperature.is_finite() {
        return Err(RheoscopeError::non_finite("temperature", temperature));
    }
    if !shear_rate.is_finite() {
        return Err(RheoscopeError::non_finite("shear rate", shear_rate));
    }
    if shear_rate <= 0.0 {
        return Err(RheoscopeError::non_positive_shear_rate(shear_rate));
    }

    let shift = (-params.b * (temperature - params.t_ref)).exp();
    let power = shear_rate.powf(params.n - 1.0);
    Ok(params.mu_0 * shift * power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_point_matches_closed_form() {
        let params = ModelParameters::default();
        let eta = viscosity(180.0, 40.0, &params).unwrap();

        // At T = T_0 the exponential term is exactly 1.
        let expected = 1550.0 * 40f64.powf(0.395 - 1.0);
        assert_relative_eq!(eta, expected, max_relative = 1e-12);
        assert_relative_eq!(eta, 166.39, max_relative = 1e-4);
    }

    #[test]
    fn viscosity_decreases_with_temperature_for_positive_b() {
        let params = ModelParameters::default();
        let mut previous = f64::INFINITY;
        for i in 0..=30 {
            let t = 175.0 + i as f64;
            let eta = viscosity(t, 40.0, &params).unwrap();
            assert!(eta < previous, "eta not decreasing at T={t}");
            previous = eta;
        }
    }

    #[test]
    fn viscosity_decreases_with_shear_rate_for_thinning_index() {
        let params = ModelParameters::default();
        assert!(params.n < 1.0);
        let mut previous = f64::INFINITY;
        for i in 0..=30 {
            let gamma = 30.0 + i as f64;
            let eta = viscosity(190.0, gamma, &params).unwrap();
            assert!(eta < previous, "eta not decreasing at gamma={gamma}");
            previous = eta;
        }
    }

    #[test]
    fn zero_and_negative_shear_rates_are_domain_errors() {
        let params = ModelParameters::default();
        assert!(matches!(
            viscosity(180.0, 0.0, &params),
            Err(RheoscopeError::NonPositiveShearRate { .. })
        ));
        assert!(matches!(
            viscosity(180.0, -5.0, &params),
            Err(RheoscopeError::NonPositiveShearRate { .. })
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let params = ModelParameters::default();
        assert!(matches!(
            viscosity(f64::NAN, 40.0, &params),
            Err(RheoscopeError::NonFiniteInput { .. })
        ));
        assert!(matches!(
            viscosity(180.0, f64::INFINITY, &params),
            Err(RheoscopeError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn parameter_validation_rejects_bad_constants() {
        assert!(ModelParameters::new(0.0, 0.0146, 180.0, 0.395).is_err());
        assert!(ModelParameters::new(-1.0, 0.0146, 180.0, 0.395).is_err());
        assert!(ModelParameters::new(1550.0, f64::NAN, 180.0, 0.395).is_err());
        assert!(ModelParameters::new(1550.0, 0.0146, 180.0, 0.395).is_ok());
    }

    #[test]
    fn operating_point_clamps_to_bounds() {
        let config = ExplorerConfig::default();
        let point = OperatingPoint {
            temperature: 300.0,
            shear_rate: 10.0,
        };
        let clamped = point.clamped_to(&config);
        assert_eq!(clamped.temperature, 205.0);
        assert_eq!(clamped.shear_rate, 30.0);
    }
}
