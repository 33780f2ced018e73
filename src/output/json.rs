//! JSON output formatter for machine processing
//!
//! The timeline document carries the chart configuration under `chart`,
//! ready to be handed to the charting library, next to the normalized
//! releases and where they came from.

use crate::chart::ChartConfig;
use crate::domain::ReleaseRecord;
use crate::fetcher::DataOrigin;
use crate::menu::{Menu, MenuGroup, Route, Section};
use crate::orchestrator::TimelineReport;
use crate::output::OutputFormatter;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Pretty-print instead of a single line
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn write_json<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}

/// JSON representation of a timeline
#[derive(Serialize)]
struct JsonTimeline<'a> {
    /// Visible page section
    section: Section,
    /// Product id
    product: &'a str,
    /// Product display name
    label: &'a str,
    /// Reference date
    today: NaiveDate,
    /// Where the releases came from
    origin: DataOrigin,
    /// Fetch failure behind a fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a str>,
    /// Supported releases, newest first
    releases: &'a [ReleaseRecord],
    /// Chart configuration
    chart: &'a ChartConfig,
}

/// JSON representation of the menu
#[derive(Serialize)]
struct JsonMenu<'a> {
    section: Section,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a str>,
    groups: &'a [MenuGroup],
}

/// JSON representation of an unknown product
#[derive(Serialize)]
struct JsonNotFound<'a> {
    section: Section,
    error: String,
    hash: String,
    available: Vec<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format_timeline(
        &self,
        report: &TimelineReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonTimeline {
            section: Section::Chart,
            product: &report.outcome.product,
            label: &report.label,
            today: report.today,
            origin: report.outcome.origin,
            failure: report.outcome.failure.as_deref(),
            releases: &report.outcome.releases,
            chart: &report.chart,
        };

        self.write_json(&output, writer)
    }

    fn format_menu(
        &self,
        menu: &Menu,
        selected: Option<&str>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonMenu {
            section: Route::Home.visible_section(),
            selected,
            groups: &menu.groups,
        };

        self.write_json(&output, writer)
    }

    fn format_not_found(
        &self,
        target: &str,
        menu: &Menu,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let route = Route::NotFound(target.to_string());
        let output = JsonNotFound {
            section: route.visible_section(),
            error: format!("unknown product '{}'", target),
            hash: route.hash(),
            available: menu
                .groups
                .iter()
                .flat_map(|g| g.items.iter().map(|i| i.id.as_str()))
                .collect(),
        };

        self.write_json(&output, writer)
    }
}
