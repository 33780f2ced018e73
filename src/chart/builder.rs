//! Chart configuration builder
//!
//! Pure mapping from a release list to a ChartConfig. Two datasets are
//! produced: standard support for every release, and extended support for
//! the releases that have it.

use super::config::*;
use super::palette::{Palette, Rgba};
use crate::domain::ReleaseRecord;
use chrono::{Datelike, NaiveDate};

pub const STANDARD_DATASET_LABEL: &str = "Standard Support";
pub const EXTENDED_DATASET_LABEL: &str = "Extended Support (ESM)";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the chart configuration for a product's releases
pub fn build_chart(
    product_label: &str,
    releases: &[ReleaseRecord],
    today: NaiveDate,
) -> ChartConfig {
    ChartBuilder::new(product_label, today).build(releases)
}

/// Chart builder bound to a product and a reference date
pub struct ChartBuilder<'a> {
    product_label: &'a str,
    today: NaiveDate,
    palette: Palette,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(product_label: &'a str, today: NaiveDate) -> Self {
        Self {
            product_label,
            today,
            palette: Palette::default(),
        }
    }

    pub fn build(&self, releases: &[ReleaseRecord]) -> ChartConfig {
        let (min, max) = axis_bounds(releases, self.today);

        ChartConfig {
            kind: "bar",
            data: ChartData {
                labels: releases.iter().map(|r| r.version.clone()).collect(),
                datasets: vec![
                    self.standard_dataset(releases),
                    self.extended_dataset(releases),
                ],
            },
            options: ChartOptions {
                index_axis: "y",
                scales: Scales {
                    x: TimeScale {
                        kind: "time",
                        time: TimeOptions {
                            unit: "year",
                            display_formats: DisplayFormats { year: "yyyy" },
                        },
                        min,
                        max,
                        title: Title::new("Support Timeline"),
                    },
                    y: CategoryScale {
                        title: Title::new(format!("{} Version", self.product_label)),
                    },
                },
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: self.legend(),
                    annotation: self.today_annotation(),
                    title: Title::new(format!("{} Release Lifecycle", self.product_label)),
                },
            },
        }
    }

    fn standard_dataset(&self, releases: &[ReleaseRecord]) -> Dataset {
        Dataset {
            label: STANDARD_DATASET_LABEL.to_string(),
            data: releases
                .iter()
                .map(|r| BarPoint {
                    x: [r.release, r.end_of_support],
                    y: r.version.clone(),
                    tooltip: standard_tooltip(r),
                })
                .collect(),
            background_color: releases
                .iter()
                .map(|r| self.palette.standard(r.lts).fill())
                .collect(),
            border_color: releases
                .iter()
                .map(|r| self.palette.standard(r.lts))
                .collect(),
            border_width: 1,
        }
    }

    fn extended_dataset(&self, releases: &[ReleaseRecord]) -> Dataset {
        let data: Vec<BarPoint> = releases
            .iter()
            .filter_map(|r| {
                let eoes = r.end_of_extended_support?;
                Some(BarPoint {
                    x: [r.end_of_support, eoes],
                    y: r.version.clone(),
                    tooltip: extended_tooltip(r),
                })
            })
            .collect();

        Dataset {
            label: EXTENDED_DATASET_LABEL.to_string(),
            background_color: vec![self.palette.extended.fill(); data.len()],
            border_color: vec![self.palette.extended; data.len()],
            data,
            border_width: 1,
        }
    }

    fn legend(&self) -> Legend {
        let entry = |text, color: Rgba, line_width| LegendEntry {
            text,
            fill_style: color.fill(),
            stroke_style: color,
            line_width,
        };

        Legend {
            position: "top",
            labels: LegendLabels {
                entries: vec![
                    entry("LTS Standard Support", self.palette.lts, 1),
                    entry("Regular Release", self.palette.regular, 1),
                    entry("Extended Security Maintenance (ESM)", self.palette.extended, 1),
                    LegendEntry {
                        text: "Current Date",
                        fill_style: self.palette.today,
                        stroke_style: self.palette.today,
                        line_width: 3,
                    },
                ],
            },
        }
    }

    fn today_annotation(&self) -> Annotation {
        Annotation {
            annotations: Annotations {
                current_date: LineAnnotation {
                    kind: "line",
                    x_min: self.today,
                    x_max: self.today,
                    border_color: self.palette.today,
                    border_width: 3,
                    label: AnnotationLabel {
                        content: "Today",
                        enabled: true,
                        position: "top",
                        background_color: self.palette.today.with_alpha(0.8),
                        color: "white",
                        font: Font { weight: "bold" },
                    },
                },
            },
        }
    }
}

/// Time axis range: whole years covering every bar and today
pub fn axis_bounds(releases: &[ReleaseRecord], today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_year = releases
        .iter()
        .map(|r| r.release.year())
        .min()
        .unwrap_or(today.year())
        .min(today.year());
    let last_year = releases
        .iter()
        .map(|r| r.last_supported_day().year())
        .max()
        .unwrap_or(today.year())
        .max(today.year());

    (
        NaiveDate::from_ymd_opt(first_year, 1, 1).unwrap_or(today),
        NaiveDate::from_ymd_opt(last_year, 12, 31).unwrap_or(today),
    )
}

/// Tooltip lines for a standard support bar
pub fn standard_tooltip(release: &ReleaseRecord) -> Vec<String> {
    vec![
        format!("Release: {}", release.release.format(DATE_FORMAT)),
        format!(
            "End of Standard Support: {}",
            release.end_of_support.format(DATE_FORMAT)
        ),
        format!("Standard Support Duration: {}", release.standard_duration()),
        if release.lts {
            "Type: Long Term Support (LTS)".to_string()
        } else {
            "Type: Regular Release".to_string()
        },
    ]
}

/// Tooltip lines for an extended support bar
pub fn extended_tooltip(release: &ReleaseRecord) -> Vec<String> {
    let end = release
        .end_of_extended_support
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "N/A".to_string());

    vec![
        format!(
            "Extended Support Start: {}",
            release.end_of_support.format(DATE_FORMAT)
        ),
        format!("Extended Support End: {}", end),
        format!("Extended Support Duration: {}", release.extended_duration()),
        format!("Version: {}", release.version),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn releases() -> Vec<ReleaseRecord> {
        vec![
            ReleaseRecord::new(
                "24.10",
                date(2024, 10, 10),
                Some(date(2025, 7, 10)),
                None,
                false,
                today(),
            )
            .unwrap(),
            ReleaseRecord::new(
                "24.04 LTS",
                date(2024, 4, 25),
                Some(date(2029, 5, 31)),
                Some(date(2034, 4, 25)),
                true,
                today(),
            )
            .unwrap(),
            ReleaseRecord::new(
                "20.04 LTS",
                date(2020, 4, 23),
                Some(date(2025, 5, 29)),
                Some(date(2030, 4, 2)),
                true,
                today(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_standard_dataset_covers_every_release() {
        let chart = build_chart("Ubuntu", &releases(), today());
        let standard = &chart.data.datasets[0];
        assert_eq!(standard.label, STANDARD_DATASET_LABEL);
        assert_eq!(standard.data.len(), 3);
        assert_eq!(standard.data[0].x, [date(2024, 10, 10), date(2025, 7, 10)]);
        assert_eq!(standard.background_color.len(), 3);
        assert_eq!(standard.background_color[0].to_string(), "rgba(119, 41, 83, 0.7)");
        assert_eq!(standard.border_color[1].to_string(), "rgba(233, 84, 32, 1)");
    }

    #[test]
    fn test_release_without_esm_only_missing_from_extended() {
        let chart = build_chart("Ubuntu", &releases(), today());
        let extended = &chart.data.datasets[1];
        assert_eq!(extended.label, EXTENDED_DATASET_LABEL);
        assert_eq!(extended.data.len(), 2);
        assert!(extended.data.iter().all(|p| p.y != "24.10"));
        assert_eq!(extended.background_color.len(), 2);
        assert_eq!(extended.border_color.len(), 2);
        assert_eq!(extended.data[0].x, [date(2029, 5, 31), date(2034, 4, 25)]);
        assert!(chart.data.datasets[0].data.iter().any(|p| p.y == "24.10"));
    }

    #[test]
    fn test_labels_and_titles() {
        let chart = build_chart("Ubuntu", &releases(), today());
        assert_eq!(chart.kind, "bar");
        assert_eq!(chart.data.labels, vec!["24.10", "24.04 LTS", "20.04 LTS"]);
        assert_eq!(chart.options.plugins.title.text, "Ubuntu Release Lifecycle");
        assert_eq!(chart.options.scales.y.title.text, "Ubuntu Version");
        assert_eq!(chart.options.index_axis, "y");
    }

    #[test]
    fn test_axis_bounds_cover_all_bars() {
        let (min, max) = axis_bounds(&releases(), today());
        assert_eq!(min, date(2020, 1, 1));
        assert_eq!(max, date(2034, 12, 31));
    }

    #[test]
    fn test_axis_bounds_empty_list() {
        let (min, max) = axis_bounds(&[], today());
        assert_eq!(min, date(2025, 1, 1));
        assert_eq!(max, date(2025, 12, 31));
    }

    #[test]
    fn test_legend_and_annotation() {
        let chart = build_chart("Ubuntu", &releases(), today());
        let legend = &chart.options.plugins.legend.labels.entries;
        assert_eq!(legend.len(), 4);
        assert_eq!(legend[3].text, "Current Date");
        assert_eq!(legend[3].line_width, 3);

        let line = &chart.options.plugins.annotation.annotations.current_date;
        assert_eq!(line.x_min, today());
        assert_eq!(line.x_max, today());
        assert_eq!(line.border_color.to_string(), "rgba(76, 175, 80, 1)");
    }

    #[test]
    fn test_tooltips() {
        let all = releases();
        let lines = standard_tooltip(&all[1]);
        assert_eq!(lines[0], "Release: 2024-04-25");
        assert_eq!(lines[1], "End of Standard Support: 2029-05-31");
        assert_eq!(lines[3], "Type: Long Term Support (LTS)");

        let lines = extended_tooltip(&all[1]);
        assert_eq!(lines[0], "Extended Support Start: 2029-05-31");
        assert_eq!(lines[1], "Extended Support End: 2034-04-25");
        assert_eq!(lines[3], "Version: 24.04 LTS");
    }

    #[test]
    fn test_serialized_shape() {
        let chart = build_chart("Ubuntu", &releases(), today());
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["options"]["indexAxis"], "y");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["x"]["type"], "time");
        assert_eq!(json["options"]["scales"]["x"]["min"], "2020-01-01");
        assert_eq!(
            json["options"]["scales"]["x"]["time"]["displayFormats"]["year"],
            "yyyy"
        );
        assert_eq!(json["data"]["datasets"][0]["data"][0]["x"][0], "2024-10-10");
        assert_eq!(json["data"]["datasets"][0]["borderWidth"], 1);
        assert_eq!(
            json["options"]["plugins"]["annotation"]["annotations"]["currentDate"]["xMin"],
            "2025-06-01"
        );
    }

    #[test]
    fn test_empty_release_list() {
        let chart = build_chart("Debian", &[], today());
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets.iter().all(|d| d.data.is_empty()));
    }
}
