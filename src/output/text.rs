//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A horizontal support timeline drawn with block characters
//! - A year axis and a marker for today
//! - Tooltip details per release in verbose mode
//! - The product menu grouped by category

use crate::chart::{axis_bounds, extended_tooltip, standard_tooltip, Palette, Rgba};
use crate::domain::ReleaseRecord;
use crate::fetcher::DataOrigin;
use crate::menu::Menu;
use crate::orchestrator::TimelineReport;
use crate::output::{OutputFormatter, Verbosity};
use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use std::io::Write;

const STANDARD_CHAR: char = '█';
const EXTENDED_CHAR: char = '▒';
const TODAY_CHAR: char = '│';

/// Widest label column before labels are truncated
const MAX_LABEL_WIDTH: usize = 32;

/// What a timeline cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Standard { lts: bool },
    Extended,
    Today,
}

/// Maps dates onto timeline columns
#[derive(Debug, Clone, Copy)]
struct Scale {
    start: NaiveDate,
    span_days: i64,
    columns: usize,
}

impl Scale {
    fn new(start: NaiveDate, end: NaiveDate, columns: usize) -> Self {
        Self {
            start,
            span_days: (end - start).num_days().max(1),
            columns: columns.max(1),
        }
    }

    fn column(&self, date: NaiveDate) -> usize {
        let offset = (date - self.start).num_days().clamp(0, self.span_days);
        (offset as usize * (self.columns - 1)) / self.span_days as usize
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Total line width
    width: usize,
    /// Whether to use colors
    color: bool,
    /// Bar colors
    palette: Palette,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, width: usize) -> Self {
        Self::with_color(verbosity, width, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, width: usize, color: bool) -> Self {
        Self {
            verbosity,
            width,
            color,
            palette: Palette::default(),
        }
    }

    fn label_width(&self, releases: &[ReleaseRecord]) -> usize {
        releases
            .iter()
            .map(|r| r.version.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH)
    }

    fn paint(&self, text: &str, color: Rgba) -> String {
        if self.color {
            text.truecolor(color.r, color.g, color.b).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_cell(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => " ".to_string(),
            Cell::Standard { lts } => {
                self.paint(&STANDARD_CHAR.to_string(), self.palette.standard(lts))
            }
            Cell::Extended => self.paint(&EXTENDED_CHAR.to_string(), self.palette.extended),
            Cell::Today => self.paint(&TODAY_CHAR.to_string(), self.palette.today),
        }
    }

    /// Cells of one release row
    fn row_cells(&self, release: &ReleaseRecord, scale: &Scale, today: NaiveDate) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; scale.columns];

        let start = scale.column(release.release);
        let end = scale.column(release.end_of_support);
        for cell in &mut cells[start..=end] {
            *cell = Cell::Standard { lts: release.lts };
        }

        if let Some(eoes) = release.end_of_extended_support {
            let ext_end = scale.column(eoes);
            if ext_end > end {
                for cell in &mut cells[end + 1..=ext_end] {
                    *cell = Cell::Extended;
                }
            }
        }

        let marker = scale.column(today);
        if cells[marker] == Cell::Empty {
            cells[marker] = Cell::Today;
        }

        cells
    }

    /// Year labels positioned on the axis
    fn axis_line(&self, scale: &Scale, first_year: i32, last_year: i32) -> String {
        let mut line = vec![' '; scale.columns];
        let mut next_free = 0;

        for year in first_year..=last_year {
            let Some(jan_first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
                continue;
            };
            let column = scale.column(jan_first);
            let text = year.to_string();
            if column < next_free || column + text.len() > scale.columns {
                continue;
            }
            for (i, ch) in text.chars().enumerate() {
                line[column + i] = ch;
            }
            next_free = column + text.len() + 1;
        }

        line.into_iter().collect()
    }

    fn write_header(
        &self,
        report: &TimelineReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let title = format!("{} Release Lifecycle", report.label);
        if self.color {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{}", title)?;
        }

        let notice = match report.outcome.origin {
            DataOrigin::Live => None,
            DataOrigin::Fallback => Some("Showing built-in release data"),
            DataOrigin::Empty => Some("No release data available"),
        };
        if let Some(notice) = notice {
            let reason = report
                .outcome
                .failure
                .as_deref()
                .map(|f| format!(" ({})", f))
                .unwrap_or_default();
            let line = format!("{}{}", notice, reason);
            if self.color {
                writeln!(writer, "{}", line.yellow())?;
            } else {
                writeln!(writer, "{}", line)?;
            }
        }

        Ok(())
    }

    /// Legend entries, wrapped to the configured width
    fn write_legend(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let entries = [
            (STANDARD_CHAR, self.palette.lts, "LTS Standard Support"),
            (STANDARD_CHAR, self.palette.regular, "Regular Release"),
            (EXTENDED_CHAR, self.palette.extended, "Extended Security Maintenance (ESM)"),
            (TODAY_CHAR, self.palette.today, "Current Date"),
        ];

        let mut line = String::new();
        let mut line_len = 0;
        for (ch, color, text) in entries {
            let entry_len = text.chars().count() + 2;
            if line_len > 0 && line_len + 2 + entry_len > self.width {
                writeln!(writer, "{}", line)?;
                line.clear();
                line_len = 0;
            }
            if line_len > 0 {
                line.push_str("  ");
                line_len += 2;
            }
            line.push_str(&format!("{} {}", self.paint(&ch.to_string(), color), text));
            line_len += entry_len;
        }

        writeln!(writer, "{}", line)
    }

    fn write_details(
        &self,
        release: &ReleaseRecord,
        indent: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let mut lines = standard_tooltip(release);
        if release.has_extended_support() {
            lines.extend(extended_tooltip(release).into_iter().take(3));
        }

        for line in lines {
            if self.color {
                writeln!(writer, "{:indent$}{}", "", line.dimmed(), indent = indent)?;
            } else {
                writeln!(writer, "{:indent$}{}", "", line, indent = indent)?;
            }
        }

        Ok(())
    }
}

/// Truncate a label to `width` characters
fn fit_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return format!("{:width$}", label, width = width);
    }
    let mut fitted: String = label.chars().take(width.saturating_sub(1)).collect();
    fitted.push('…');
    fitted
}

impl OutputFormatter for TextFormatter {
    fn format_timeline(
        &self,
        report: &TimelineReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let releases = &report.outcome.releases;

        if self.verbosity != Verbosity::Quiet {
            self.write_header(report, writer)?;
            writeln!(writer)?;
        }

        if releases.is_empty() {
            writeln!(writer, "No supported releases.")?;
            return Ok(());
        }

        let label_width = self.label_width(releases);
        let columns = self.width.saturating_sub(label_width + 2).max(10);
        let (min, max) = axis_bounds(releases, report.today);
        let scale = Scale::new(min, max, columns);

        if self.verbosity != Verbosity::Quiet {
            writeln!(
                writer,
                "{:label_width$}  {}",
                "",
                self.axis_line(&scale, min.year(), max.year()),
                label_width = label_width
            )?;
        }

        for release in releases {
            let bar: String = self
                .row_cells(release, &scale, report.today)
                .into_iter()
                .map(|cell| self.render_cell(cell))
                .collect();
            let label = fit_label(&release.version, label_width);
            if self.color && release.lts {
                writeln!(writer, "{}  {}", label.bold(), bar)?;
            } else {
                writeln!(writer, "{}  {}", label, bar)?;
            }

            if self.verbosity == Verbosity::Verbose {
                self.write_details(release, label_width + 2, writer)?;
            }
        }

        if self.verbosity != Verbosity::Quiet {
            writeln!(writer)?;
            self.write_legend(writer)?;
        }

        Ok(())
    }

    fn format_menu(
        &self,
        menu: &Menu,
        selected: Option<&str>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let id_width = menu
            .groups
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|i| i.id.len())
            .max()
            .unwrap_or(0);

        for (index, group) in menu.groups.iter().enumerate() {
            if self.verbosity == Verbosity::Quiet {
                for item in &group.items {
                    writeln!(writer, "{}", item.id)?;
                }
                continue;
            }

            if index > 0 {
                writeln!(writer)?;
            }
            if self.color {
                writeln!(writer, "{}", group.title.bold())?;
            } else {
                writeln!(writer, "{}", group.title)?;
            }

            for item in &group.items {
                let is_selected = selected.is_some_and(|s| s.eq_ignore_ascii_case(&item.id));
                let marker = if is_selected { "▸" } else { " " };
                let id = format!("{:width$}", item.id, width = id_width);
                if self.color && is_selected {
                    writeln!(
                        writer,
                        "{} {}  {}",
                        marker.green(),
                        id.green().bold(),
                        item.label
                    )?;
                } else if self.color {
                    writeln!(writer, "{} {}  {}", marker, id.cyan(), item.label.dimmed())?;
                } else {
                    writeln!(writer, "{} {}  {}", marker, id, item.label)?;
                }
            }
        }

        Ok(())
    }

    fn format_not_found(
        &self,
        target: &str,
        menu: &Menu,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let message = format!("Unknown product '{}'. Available products:", target);
        if self.color {
            writeln!(writer, "{}", message.red())?;
        } else {
            writeln!(writer, "{}", message)?;
        }
        writeln!(writer)?;
        self.format_menu(menu, None, writer)
    }
}
