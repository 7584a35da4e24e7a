//! Error types for Rheoscope.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Rheoscope operations.
pub type Result<T> = std::result::Result<T, RheoscopeError>;

/// Errors that can occur in Rheoscope.
#[derive(Debug, Error)]
pub enum RheoscopeError {
    /// Shear rate at or below zero; the power-law term is undefined there.
    #[error("Shear rate must be positive, got {value}")]
    NonPositiveShearRate {
        /// The offending shear rate.
        value: f64,
    },

    /// A model input was NaN or infinite.
    #[error("Non-finite {name}: {value}")]
    NonFiniteInput {
        /// Name of the offending input.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Model calibration constants failed validation.
    #[error("Invalid model parameters: {reason}")]
    InvalidParameters {
        /// Why validation rejected the constants.
        reason: String,
    },

    /// A sweep was configured with a zero or negative step.
    #[error("Sweep step must be positive, got {step}")]
    NonPositiveStep {
        /// The offending step.
        step: f64,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RheoscopeError {
    /// Create a NonPositiveShearRate error.
    pub fn non_positive_shear_rate(value: f64) -> Self {
        Self::NonPositiveShearRate { value }
    }

    /// Create a NonFiniteInput error.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteInput { name, value }
    }

    /// Create an InvalidParameters error.
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Create a NonPositiveStep error.
    pub fn non_positive_step(step: f64) -> Self {
        Self::NonPositiveStep { step }
    }
}
