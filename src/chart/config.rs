//! Declarative chart configuration
//!
//! These types serialize to the configuration object of a Chart.js-style
//! horizontal bar chart with a time axis and the annotation plugin. Tooltip
//! text is precomputed per data point (`tooltip`) because callbacks cannot
//! be expressed in a static configuration.

use super::palette::Rgba;
use chrono::NaiveDate;
use serde::Serialize;

/// Top-level chart configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One series of floating bars
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<BarPoint>,
    pub background_color: Vec<Rgba>,
    pub border_color: Vec<Rgba>,
    pub border_width: u32,
}

/// A bar spanning `x[0]..x[1]` on the row labelled `y`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub x: [NaiveDate; 2],
    pub y: String,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: &'static str,
    pub scales: Scales,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: TimeScale,
    pub y: CategoryScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeScale {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub time: TimeOptions,
    pub min: NaiveDate,
    pub max: NaiveDate,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions {
    pub unit: &'static str,
    pub display_formats: DisplayFormats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFormats {
    pub year: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScale {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub annotation: Annotation,
    pub title: Title,
}

/// Legend with a fixed set of entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub text: &'static str,
    pub fill_style: Rgba,
    pub stroke_style: Rgba,
    pub line_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub annotations: Annotations,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations {
    pub current_date: LineAnnotation,
}

/// Vertical line marking a date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnnotation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x_min: NaiveDate,
    pub x_max: NaiveDate,
    pub border_color: Rgba,
    pub border_width: u32,
    pub label: AnnotationLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationLabel {
    pub content: &'static str,
    pub enabled: bool,
    pub position: &'static str,
    pub background_color: Rgba,
    pub color: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub weight: &'static str,
}
