//! Lifecycle data sources
//!
//! This module provides:
//! - HTTP client shared foundation
//! - endoflife.date adapter (v1 and legacy endpoints)
//! - Built-in static datasets used as a fallback
//! - An offline source that never touches the network

mod client;
mod endoflife;
mod fallback;
#[cfg(test)]
mod test_server;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use endoflife::{normalize_response, EndOfLifeSource, DEFAULT_BASE_URL};
pub use fallback::static_releases;

use crate::domain::ReleaseRecord;
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::NaiveDate;
use clap::ValueEnum;

/// Which endoflife.date endpoint family to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ApiFlavor {
    /// /api/v1/products/{product}
    #[default]
    V1,
    /// /api/{product}.json
    Legacy,
}

/// Trait for lifecycle data sources
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name used in errors and logs
    fn source_name(&self) -> &'static str;

    /// Fetch every known release of a product, normalized.
    ///
    /// `today` is used to default missing standard support end dates.
    async fn fetch_releases(
        &self,
        product: &str,
        today: NaiveDate,
    ) -> Result<Vec<ReleaseRecord>, ApiError>;
}

/// Source used when network access is disabled
pub struct OfflineSource;

#[async_trait]
impl ReleaseSource for OfflineSource {
    fn source_name(&self) -> &'static str {
        "offline"
    }

    async fn fetch_releases(
        &self,
        product: &str,
        _today: NaiveDate,
    ) -> Result<Vec<ReleaseRecord>, ApiError> {
        Err(ApiError::Offline {
            product: product.to_string(),
        })
    }
}
