//! Chart configuration for the support timeline
//!
//! This module provides:
//! - Declarative chart configuration types (serializable)
//! - The builder mapping release records onto bars, legend and annotation
//! - The color palette shared with the terminal preview

mod builder;
mod config;
mod palette;

pub use builder::{
    axis_bounds, build_chart, extended_tooltip, standard_tooltip, ChartBuilder,
    EXTENDED_DATASET_LABEL, STANDARD_DATASET_LABEL,
};
pub use config::*;
pub use palette::{Palette, Rgba};
