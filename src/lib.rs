//! Rheoscope - a terminal-based extrusion viscosity explorer.
//!
//! Rheoscope evaluates a power-law viscosity model with an exponential
//! temperature shift and visualizes it interactively: sweep charts, a
//! banded neighborhood table and a heatmap update as the operating point
//! moves.
//!
//! # Features
//!
//! - Pure, validated model evaluation
//! - Sweep series and lattice generation over configurable ranges
//! - Five-band classification of a neighborhood table
//! - Deterministic heat-ramp color mapping
//! - CSV-style report export (file or clipboard)
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use rheoscope::model::{viscosity, ModelParameters};
//!
//! let params = ModelParameters::default();
//! let eta = viscosity(190.0, 45.0, &params)?;
//! assert!(eta > 0.0);
//! # Ok::<(), rheoscope::RheoscopeError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod colormap;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod series;
pub mod table;
pub mod ui;

pub use error::{Result, RheoscopeError};
