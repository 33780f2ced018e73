//! Output formatting for renders
//!
//! This module provides:
//! - Text output: a colored terminal timeline and product menu
//! - JSON output: the chart configuration for the charting library

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::cli::DEFAULT_WIDTH;
use crate::menu::Menu;
use crate::orchestrator::{Render, TimelineReport};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal timeline
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    CompactJson,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors (when supported)
    pub color: bool,
    /// Terminal timeline width in columns
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
            width: DEFAULT_WIDTH,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(
        json: bool,
        compact: bool,
        verbose: bool,
        quiet: bool,
        no_color: bool,
        width: usize,
    ) -> Self {
        let format = match (json, compact) {
            (true, true) => OutputFormat::CompactJson,
            (true, false) => OutputFormat::Json,
            (false, _) => OutputFormat::Text,
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color: !no_color,
            width,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a product timeline
    fn format_timeline(
        &self,
        report: &TimelineReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write the product menu
    fn format_menu(
        &self,
        menu: &Menu,
        selected: Option<&str>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write a notice for an unknown product
    fn format_not_found(
        &self,
        target: &str,
        menu: &Menu,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Format and write any render
    fn format(&self, render: &Render, writer: &mut dyn Write) -> std::io::Result<()> {
        match render {
            Render::Menu { menu, selected } => self.format_menu(menu, selected.as_deref(), writer),
            Render::Timeline(report) => self.format_timeline(report, writer),
            Render::NotFound { target, menu } => self.format_not_found(target, menu, writer),
        }
    }
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(
            config.verbosity,
            config.width,
            config.color,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::CompactJson => Box::new(JsonFormatter::new(false)),
    }
}
