//! Render orchestrator coordinating one invocation
//!
//! This module provides:
//! - Workflow coordination: resolve route → fetch → filter → build chart
//! - Source selection (live API or offline)
//! - Menu rendering for the home route and `--list`

use crate::api::{EndOfLifeSource, HttpClient, OfflineSource, ReleaseSource};
use crate::chart::{build_chart, ChartConfig};
use crate::cli::CliArgs;
use crate::error::AppError;
use crate::fetcher::{fetch_supported_releases, FetchOutcome};
use crate::menu::{Menu, MenuState, ProductManifest, Route};
use crate::progress::Progress;
use chrono::NaiveDate;
use std::time::Duration;

/// Everything needed to display one product timeline
#[derive(Debug, Clone)]
pub struct TimelineReport {
    /// Product display name
    pub label: String,
    /// Reference date used for filtering and the today marker
    pub today: NaiveDate,
    /// Fetched releases and where they came from
    pub outcome: FetchOutcome,
    /// Chart configuration built from the releases
    pub chart: ChartConfig,
}

/// What an invocation produced
#[derive(Debug, Clone)]
pub enum Render {
    /// Product menu, optionally with a highlighted product
    Menu {
        menu: Menu,
        selected: Option<String>,
    },
    /// Support timeline of one product
    Timeline(Box<TimelineReport>),
    /// The target names no product of the manifest
    NotFound { target: String, menu: Menu },
}

/// Orchestrator for one render
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Products known to the menu
    manifest: ProductManifest,
    /// Lifecycle data source
    source: Box<dyn ReleaseSource>,
}

impl Orchestrator {
    /// Create an orchestrator from CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let manifest = ProductManifest::load_or_embedded(args.manifest.as_deref())?;

        let source: Box<dyn ReleaseSource> = if args.offline {
            Box::new(OfflineSource)
        } else {
            let client = HttpClient::with_timeout(Duration::from_secs(args.timeout))?
                .with_max_retries(args.retries);
            Box::new(EndOfLifeSource::with_base_url(
                client,
                &args.api_url,
                args.api,
            ))
        };

        Ok(Self::with_source(args, manifest, source))
    }

    /// Create an orchestrator with a custom source (for testing)
    pub fn with_source(
        args: CliArgs,
        manifest: ProductManifest,
        source: Box<dyn ReleaseSource>,
    ) -> Self {
        Self {
            args,
            manifest,
            source,
        }
    }

    /// Route selected by the command line target
    pub fn route(&self) -> Route {
        Route::from_hash(&self.args.target, &self.manifest)
    }

    /// Run the render workflow
    pub async fn run(&self) -> Result<Render, AppError> {
        let route = self.route();
        let menu = Menu::from_manifest(&self.manifest);
        tracing::debug!(%route, "resolved route");

        if self.args.list {
            let mut state = MenuState::new();
            state.follow(&route);
            return Ok(Render::Menu {
                menu,
                selected: state.selected().map(str::to_string),
            });
        }

        match route {
            Route::Home => Ok(Render::Menu {
                menu,
                selected: None,
            }),
            Route::NotFound(target) => Ok(Render::NotFound { target, menu }),
            Route::Product(id) => {
                let report = self.render_timeline(&id).await?;
                Ok(Render::Timeline(Box::new(report)))
            }
        }
    }

    /// Fetch and chart one product
    async fn render_timeline(&self, product: &str) -> Result<TimelineReport, AppError> {
        let today = self.args.reference_date();
        let label = self.manifest.label_for(product).to_string();

        let mut progress = Progress::new(self.args.show_progress());
        progress.spinner(&format!("Loading {} release data...", label));
        let outcome =
            fetch_supported_releases(&*self.source, product, today, self.args.fallback).await;
        progress.finish_and_clear();
        let outcome = outcome?;

        let chart = build_chart(&label, &outcome.releases, today);

        Ok(TimelineReport {
            label,
            today,
            outcome,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::DataOrigin;
    use clap::Parser;

    fn orchestrator(argv: &[&str]) -> Orchestrator {
        let args = CliArgs::parse_from(argv);
        let manifest = ProductManifest::embedded().unwrap();
        Orchestrator::with_source(args, manifest, Box::new(OfflineSource))
    }

    #[tokio::test]
    async fn test_home_route_renders_menu() {
        let render = orchestrator(&["eol-timeline", "#home"]).run().await.unwrap();
        assert!(matches!(render, Render::Menu { selected: None, .. }));
    }

    #[tokio::test]
    async fn test_list_highlights_target() {
        let render = orchestrator(&["eol-timeline", "--list", "debian"])
            .run()
            .await
            .unwrap();
        match render {
            Render::Menu { selected, .. } => assert_eq!(selected.as_deref(), Some("debian")),
            other => panic!("unexpected render: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_target() {
        let render = orchestrator(&["eol-timeline", "#amiga"]).run().await.unwrap();
        match render {
            Render::NotFound { target, .. } => assert_eq!(target, "amiga"),
            other => panic!("unexpected render: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_offline_ubuntu_uses_fallback() {
        let render = orchestrator(&["eol-timeline", "ubuntu", "--offline", "--today", "2025-06-01"])
            .run()
            .await
            .unwrap();
        match render {
            Render::Timeline(report) => {
                assert_eq!(report.label, "Ubuntu");
                assert_eq!(report.outcome.origin, DataOrigin::Fallback);
                assert_eq!(
                    report.chart.options.plugins.title.text,
                    "Ubuntu Release Lifecycle"
                );
            }
            other => panic!("unexpected render: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_policy_fails_render() {
        let result = orchestrator(&["eol-timeline", "ubuntu", "--fallback", "error"])
            .run()
            .await;
        assert!(matches!(result, Err(AppError::Api(_))));
    }
}
