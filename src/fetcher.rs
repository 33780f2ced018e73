//! Release data fetcher
//!
//! Fetches a product's releases from a ReleaseSource, keeps the ones that
//! are still supported, and sorts them newest-first. Fetch failures are
//! resolved by an explicit FallbackPolicy.

use crate::api::{static_releases, ReleaseSource};
use crate::domain::ReleaseRecord;
use crate::error::ApiError;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// What to do when the lifecycle API cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FallbackPolicy {
    /// Use the built-in dataset when one exists, otherwise an empty list
    #[default]
    Static,
    /// Use an empty list
    Empty,
    /// Fail the whole render
    Error,
}

/// Where the rendered releases came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// Live API data
    Live,
    /// Built-in static dataset
    Fallback,
    /// Nothing could be loaded
    Empty,
}

/// Result of fetching releases for one render
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Product identifier that was requested
    pub product: String,
    /// Supported releases, newest first
    pub releases: Vec<ReleaseRecord>,
    /// Where the releases came from
    pub origin: DataOrigin,
    /// The fetch failure that triggered a fallback, if any
    pub failure: Option<String>,
}

impl FetchOutcome {
    /// Returns true if live data could not be used
    pub fn is_degraded(&self) -> bool {
        self.origin != DataOrigin::Live
    }
}

/// Keep releases whose standard or extended support ends after `today`,
/// sorted by release date descending
pub fn select_supported(releases: Vec<ReleaseRecord>, today: NaiveDate) -> Vec<ReleaseRecord> {
    let mut supported: Vec<ReleaseRecord> = releases
        .into_iter()
        .filter(|r| r.is_supported_on(today))
        .collect();
    supported.sort_by(ReleaseRecord::newest_first);
    supported
}

/// Fetch the currently supported releases of a product
pub async fn fetch_supported_releases(
    source: &dyn ReleaseSource,
    product: &str,
    today: NaiveDate,
    policy: FallbackPolicy,
) -> Result<FetchOutcome, ApiError> {
    match source.fetch_releases(product, today).await {
        Ok(releases) => {
            let total = releases.len();
            let releases = select_supported(releases, today);
            tracing::debug!(
                product,
                total,
                supported = releases.len(),
                "filtered releases"
            );

            Ok(FetchOutcome {
                product: product.to_string(),
                releases,
                origin: DataOrigin::Live,
                failure: None,
            })
        }
        Err(e) => {
            tracing::warn!(product, source = source.source_name(), error = %e, "fetch failed");
            fall_back(product, today, policy, e)
        }
    }
}

fn fall_back(
    product: &str,
    today: NaiveDate,
    policy: FallbackPolicy,
    error: ApiError,
) -> Result<FetchOutcome, ApiError> {
    let fallback = match policy {
        FallbackPolicy::Error => return Err(error),
        FallbackPolicy::Static => static_releases(product, today),
        FallbackPolicy::Empty => None,
    };

    let (releases, origin) = match fallback {
        Some(releases) => {
            tracing::warn!(product, "using built-in release data");
            (select_supported(releases, today), DataOrigin::Fallback)
        }
        None => {
            tracing::warn!(product, "no release data available");
            (Vec::new(), DataOrigin::Empty)
        }
    };

    Ok(FetchOutcome {
        product: product.to_string(),
        releases,
        origin,
        failure: Some(error.to_string()),
    })
}
