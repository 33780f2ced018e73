//! endoflife.date API adapter
//!
//! Fetches release cycles for a product and normalizes them into
//! ReleaseRecords. Two response shapes are understood:
//! - v1: https://endoflife.date/api/v1/products/{product}
//! - legacy: https://endoflife.date/api/{product}.json
//!
//! Either shape is accepted regardless of which endpoint produced it.

use crate::api::{ApiFlavor, HttpClient, ReleaseSource};
use crate::domain::ReleaseRecord;
use crate::error::{ApiError, RecordError};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Public endoflife.date base URL
pub const DEFAULT_BASE_URL: &str = "https://endoflife.date";

const API_NAME: &str = "endoflife.date";

/// endoflife.date adapter
pub struct EndOfLifeSource {
    client: HttpClient,
    base_url: String,
    flavor: ApiFlavor,
}

/// Any response body the API is known to produce
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LifecycleResponse {
    V1(V1Envelope),
    Legacy(Vec<LegacyCycle>),
}

#[derive(Debug, Deserialize)]
struct V1Envelope {
    result: V1Product,
}

#[derive(Debug, Deserialize)]
struct V1Product {
    #[serde(default)]
    releases: Vec<V1Release>,
}

/// v1 release entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct V1Release {
    name: String,
    label: Option<String>,
    release_date: Option<String>,
    #[serde(default)]
    is_lts: bool,
    eol_from: Option<String>,
    eoes_from: Option<String>,
}

/// Legacy cycle entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCycle {
    cycle: CycleName,
    codename: Option<String>,
    release_date: Option<String>,
    eol: Option<DateOrFlag>,
    extended_support: Option<DateOrFlag>,
    lts: Option<DateOrFlag>,
}

/// Legacy cycles are sometimes numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CycleName {
    Text(String),
    Number(serde_json::Number),
}

impl CycleName {
    fn as_label(&self) -> String {
        match self {
            CycleName::Text(s) => s.clone(),
            CycleName::Number(n) => n.to_string(),
        }
    }
}

/// Legacy fields that hold either a date or a boolean; anything else is unset
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DateOrFlag {
    Date(NaiveDate),
    Flag(bool),
    Other(IgnoredAny),
}

impl DateOrFlag {
    fn date(&self) -> Option<NaiveDate> {
        match self {
            DateOrFlag::Date(d) => Some(*d),
            _ => None,
        }
    }

    fn is_set(&self) -> bool {
        match self {
            DateOrFlag::Date(_) => true,
            DateOrFlag::Flag(flag) => *flag,
            DateOrFlag::Other(_) => false,
        }
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|s| s.parse::<NaiveDate>().ok())
}

impl V1Release {
    fn into_record(self, today: NaiveDate) -> Result<ReleaseRecord, RecordError> {
        let version = self.label.unwrap_or(self.name);
        let release = parse_date(self.release_date.as_deref()).ok_or_else(|| {
            RecordError::MissingReleaseDate {
                version: version.clone(),
            }
        })?;

        ReleaseRecord::new(
            version,
            release,
            parse_date(self.eol_from.as_deref()),
            parse_date(self.eoes_from.as_deref()),
            self.is_lts,
            today,
        )
    }
}

impl LegacyCycle {
    fn label(&self) -> String {
        let cycle = self.cycle.as_label();
        let lts = self.lts.as_ref().is_some_and(DateOrFlag::is_set);

        let mut label = cycle;
        if lts {
            label.push_str(" LTS");
        }
        if let Some(codename) = self.codename.as_deref().filter(|c| !c.is_empty()) {
            label.push_str(&format!(" ({})", codename));
        }
        label
    }

    fn into_record(self, today: NaiveDate) -> Result<ReleaseRecord, RecordError> {
        let version = self.label();
        let release = parse_date(self.release_date.as_deref())
            .ok_or(RecordError::MissingReleaseDate {
                version: version.clone(),
            })?;

        ReleaseRecord::new(
            version,
            release,
            self.eol.as_ref().and_then(DateOrFlag::date),
            self.extended_support.as_ref().and_then(DateOrFlag::date),
            self.lts.as_ref().is_some_and(DateOrFlag::is_set),
            today,
        )
    }
}

/// Normalize a raw response body into release records.
///
/// Entries that cannot form a valid record are logged and skipped; the rest
/// of the response is still used.
pub fn normalize_response(
    body: &str,
    product: &str,
    today: NaiveDate,
) -> Result<Vec<ReleaseRecord>, ApiError> {
    let response: LifecycleResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::invalid_response(product, API_NAME, e.to_string()))?;

    Ok(normalize(response, product, today))
}

fn normalize(response: LifecycleResponse, product: &str, today: NaiveDate) -> Vec<ReleaseRecord> {
    let results: Vec<Result<ReleaseRecord, RecordError>> = match response {
        LifecycleResponse::V1(envelope) => envelope
            .result
            .releases
            .into_iter()
            .map(|r| r.into_record(today))
            .collect(),
        LifecycleResponse::Legacy(cycles) => {
            cycles.into_iter().map(|c| c.into_record(today)).collect()
        }
    };

    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(product, error = %e, "skipping release");
                None
            }
        })
        .collect()
}

impl EndOfLifeSource {
    /// Create a new adapter against the public API
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL, ApiFlavor::V1)
    }

    /// Create an adapter against a custom base URL and endpoint flavor
    pub fn with_base_url(client: HttpClient, base_url: &str, flavor: ApiFlavor) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            flavor,
        }
    }

    /// Build the URL for a product
    fn build_url(&self, product: &str) -> String {
        match self.flavor {
            ApiFlavor::V1 => format!("{}/api/v1/products/{}", self.base_url, product),
            ApiFlavor::Legacy => format!("{}/api/{}.json", self.base_url, product),
        }
    }
}

#[async_trait]
impl ReleaseSource for EndOfLifeSource {
    fn source_name(&self) -> &'static str {
        API_NAME
    }

    async fn fetch_releases(
        &self,
        product: &str,
        today: NaiveDate,
    ) -> Result<Vec<ReleaseRecord>, ApiError> {
        let url = self.build_url(product);
        let response: LifecycleResponse = self
            .client
            .get_json(&url, product, self.source_name())
            .await?;

        let records = normalize(response, product, today);
        tracing::debug!(product, count = records.len(), "normalized releases");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::serve_once;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const V1_BODY: &str = r#"{
        "schema_version": "1.0.0",
        "result": {
            "name": "ubuntu",
            "label": "Ubuntu",
            "releases": [
                {
                    "name": "24.04",
                    "codename": "Noble Numbat",
                    "label": "24.04 'Noble Numbat' (LTS)",
                    "releaseDate": "2024-04-25",
                    "isLts": true,
                    "ltsFrom": "2024-04-25",
                    "isEol": false,
                    "eolFrom": "2029-05-31",
                    "isEoes": false,
                    "eoesFrom": "2036-04-25"
                },
                {
                    "name": "24.10",
                    "label": "24.10 'Oracular Oriole'",
                    "releaseDate": "2024-10-10",
                    "isLts": false,
                    "eolFrom": "2025-07-10",
                    "eoesFrom": null
                },
                {
                    "name": "broken",
                    "releaseDate": null,
                    "isLts": false
                }
            ]
        }
    }"#;

    const LEGACY_BODY: &str = r#"[
        {
            "cycle": "22.04",
            "codename": "Jammy Jellyfish",
            "lts": true,
            "releaseDate": "2022-04-21",
            "support": "2024-09-30",
            "eol": "2027-06-01",
            "extendedSupport": "2032-04-09",
            "latest": "22.04.5"
        },
        {
            "cycle": 3.12,
            "releaseDate": "2023-10-02",
            "eol": false,
            "extendedSupport": false
        }
    ]"#;

    #[test]
    fn test_normalize_v1() {
        let records = normalize_response(V1_BODY, "ubuntu", today()).unwrap();
        assert_eq!(records.len(), 2);

        let noble = &records[0];
        assert_eq!(noble.version, "24.04 'Noble Numbat' (LTS)");
        assert_eq!(noble.release, date(2024, 4, 25));
        assert_eq!(noble.end_of_support, date(2029, 5, 31));
        assert_eq!(noble.end_of_extended_support, Some(date(2036, 4, 25)));
        assert!(noble.lts);

        let oracular = &records[1];
        assert!(!oracular.lts);
        assert!(oracular.end_of_extended_support.is_none());
    }

    #[test]
    fn test_normalize_legacy() {
        let records = normalize_response(LEGACY_BODY, "ubuntu", today()).unwrap();
        assert_eq!(records.len(), 2);

        let jammy = &records[0];
        assert_eq!(jammy.version, "22.04 LTS (Jammy Jellyfish)");
        assert_eq!(jammy.end_of_support, date(2027, 6, 1));
        assert_eq!(jammy.end_of_extended_support, Some(date(2032, 4, 9)));
        assert!(jammy.lts);

        // eol: false carries no date, so standard support defaults to today
        let numeric = &records[1];
        assert_eq!(numeric.version, "3.12");
        assert_eq!(numeric.end_of_support, today());
        assert!(!numeric.lts);
    }

    #[test]
    fn test_normalize_legacy_lts_date() {
        let body = r#"[{"cycle": "20", "lts": "2023-10-24", "releaseDate": "2023-04-18", "eol": "2026-04-30"}]"#;
        let records = normalize_response(body, "nodejs", today()).unwrap();
        assert!(records[0].lts);
        assert_eq!(records[0].version, "20 LTS");
    }

    #[test]
    fn test_normalize_legacy_unrecognized_flags() {
        let body = r#"[{"cycle": "7", "lts": "yes", "releaseDate": "2023-04-18",
                        "eol": "2030-01-31", "extendedSupport": 1}]"#;
        let records = normalize_response(body, "rhel", today()).unwrap();
        assert!(!records[0].lts);
        assert!(records[0].end_of_extended_support.is_none());
        assert_eq!(records[0].end_of_support, date(2030, 1, 31));
    }

    #[test]
    fn test_normalize_invalid_body() {
        let err = normalize_response(r#"{"message": "nope"}"#, "ubuntu", today()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn test_build_url_v1() {
        let source = EndOfLifeSource::new(HttpClient::new().unwrap());
        assert_eq!(
            source.build_url("ubuntu"),
            "https://endoflife.date/api/v1/products/ubuntu"
        );
    }

    #[test]
    fn test_build_url_legacy_trims_slash() {
        let source = EndOfLifeSource::with_base_url(
            HttpClient::new().unwrap(),
            "http://localhost:8080/",
            ApiFlavor::Legacy,
        );
        assert_eq!(
            source.build_url("nodejs"),
            "http://localhost:8080/api/nodejs.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_releases_over_http() {
        let url = serve_once("200 OK", V1_BODY).await;
        let source = EndOfLifeSource::with_base_url(HttpClient::direct(), &url, ApiFlavor::V1);

        let records = source.fetch_releases("ubuntu", today()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].version, "24.04 'Noble Numbat' (LTS)");
    }

    #[tokio::test]
    async fn test_fetch_releases_legacy_over_http() {
        let url = serve_once("200 OK", LEGACY_BODY).await;
        let source =
            EndOfLifeSource::with_base_url(HttpClient::direct(), &url, ApiFlavor::Legacy);

        let records = source.fetch_releases("ubuntu", today()).await.unwrap();
        assert_eq!(records[0].version, "22.04 LTS (Jammy Jellyfish)");
    }

    #[tokio::test]
    async fn test_fetch_releases_unknown_product() {
        let url = serve_once("404 Not Found", "").await;
        let source = EndOfLifeSource::with_base_url(HttpClient::direct(), &url, ApiFlavor::V1);

        let err = source.fetch_releases("amiga", today()).await.unwrap_err();
        assert!(matches!(err, ApiError::ProductNotFound { .. }));
    }

    #[test]
    fn test_source_name() {
        let source = EndOfLifeSource::new(HttpClient::new().unwrap());
        assert_eq!(source.source_name(), "endoflife.date");
    }
}
