//! Plain-text report of the current state.
//!
//! Serialization only; writing the result to a file or the clipboard is the
//! caller's business.

use crate::error::Result;
use crate::model::{viscosity, ModelParameters, OperatingPoint};
use crate::series::Series1D;

/// Format a CSV-style report of the current operating point, the model
/// constants, and the two coarse sweeps around the current point.
///
/// Axis values print exactly as passed in; viscosities print with two
/// decimals.
pub fn format_report(
    point: &OperatingPoint,
    params: &ModelParameters,
    temperature_series: &Series1D,
    shear_series: &Series1D,
) -> Result<String> {
    let eta = viscosity(point.temperature, point.shear_rate, params)?;

    let mut out = String::new();
    out.push_str("Extrusion process data export\n\n");

    out.push_str("Current parameters:\n");
    out.push_str(&format!("Temperature (C),{}\n", point.temperature));
    out.push_str(&format!("Shear rate (1/s),{}\n", point.shear_rate));
    out.push_str(&format!("Viscosity (Pa.s),{eta:.2}\n\n"));

    out.push_str("Model parameters:\n");
    out.push_str(&format!("mu_0 (Pa.s^n),{}\n", params.mu_0));
    out.push_str(&format!("b (1/C),{}\n", params.b));
    out.push_str(&format!("T_0 (C),{}\n", params.t_ref));
    out.push_str(&format!("n,{}\n\n", params.n));

    out.push_str(&format!(
        "Viscosity vs temperature (shear rate = {}):\n",
        point.shear_rate
    ));
    out.push_str("T (C),eta (Pa.s)\n");
    for &(t, eta) in &temperature_series.points {
        out.push_str(&format!("{t},{eta:.2}\n"));
    }

    out.push_str(&format!(
        "\nViscosity vs shear rate (temperature = {}):\n",
        point.temperature
    ));
    out.push_str("gamma (1/s),eta (Pa.s)\n");
    for &(gamma, eta) in &shear_series.points {
        out.push_str(&format!("{gamma},{eta:.2}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::series::{shear_sweep, temperature_sweep};

    fn reference_report(point: OperatingPoint) -> String {
        let config = ExplorerConfig::default();
        let params = ModelParameters::default();
        let t_series = temperature_sweep(
            point.shear_rate,
            &config.temperature_report_range(),
            point.temperature,
            &params,
        )
        .unwrap();
        let g_series = shear_sweep(
            point.temperature,
            &config.shear_report_range(),
            point.shear_rate,
            &params,
        )
        .unwrap();
        format_report(&point, &params, &t_series, &g_series).unwrap()
    }

    #[test]
    fn report_contains_current_point_and_model_constants() {
        let report = reference_report(OperatingPoint {
            temperature: 190.0,
            shear_rate: 42.0,
        });

        assert!(report.contains("Temperature (C),190\n"));
        assert!(report.contains("Shear rate (1/s),42\n"));
        assert!(report.contains("mu_0 (Pa.s^n),1550\n"));
        assert!(report.contains("b (1/C),0.0146\n"));
        assert!(report.contains("T_0 (C),180\n"));
        assert!(report.contains("n,0.395\n"));
    }

    #[test]
    fn report_has_seven_rows_per_sweep_at_the_coarse_step() {
        let report = reference_report(OperatingPoint::default());

        let temperature_rows = report
            .lines()
            .skip_while(|l| *l != "T (C),eta (Pa.s)")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(temperature_rows, 7);

        let shear_rows = report
            .lines()
            .skip_while(|l| *l != "gamma (1/s),eta (Pa.s)")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(shear_rows, 7);
    }

    #[test]
    fn sweep_rows_print_two_decimal_viscosities() {
        let report = reference_report(OperatingPoint::default());
        let row = report
            .lines()
            .skip_while(|l| *l != "T (C),eta (Pa.s)")
            .nth(1)
            .unwrap();
        let (t, eta) = row.split_once(',').unwrap();
        assert_eq!(t, "175");
        let decimals = eta.split_once('.').unwrap().1;
        assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn invalid_operating_point_fails_instead_of_serializing_nan() {
        let params = ModelParameters::default();
        let empty = Series1D {
            points: Vec::new(),
            current_index: None,
        };
        let bad = OperatingPoint {
            temperature: 190.0,
            shear_rate: 0.0,
        };
        assert!(format_report(&bad, &params, &empty, &empty).is_err());
    }
}
