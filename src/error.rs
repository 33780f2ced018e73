//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ApiError: Issues with the lifecycle API communication
//! - ManifestError: Issues with the product manifest file
//! - RecordError: Release data that violates the lifecycle ordering
//! - ConfigError: Issues with CLI configuration

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lifecycle API related errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Product manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Release record related errors
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the lifecycle API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Product not known to the API
    #[error("product '{product}' not found in {api}")]
    ProductNotFound { product: String, api: String },

    /// Network request failed
    #[error("failed to fetch '{product}' from {api}: {message}")]
    NetworkError {
        product: String,
        api: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {api}")]
    RateLimitExceeded { api: String },

    /// Response body could not be understood
    #[error("invalid response from {api} for '{product}': {message}")]
    InvalidResponse {
        product: String,
        api: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{product}' from {api}")]
    Timeout { product: String, api: String },

    /// Network access was disabled
    #[error("network access disabled, '{product}' was not fetched")]
    Offline { product: String },
}

/// Errors related to the product manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read product manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest content could not be parsed
    #[error("failed to parse product manifest {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Unsupported manifest extension
    #[error("unsupported product manifest format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// A product id appears more than once
    #[error("product '{product}' is listed more than once in the manifest")]
    DuplicateProduct { product: String },

    /// A category has no products
    #[error("category '{category}' has no products")]
    EmptyCategory { category: String },

    /// The requested product is not part of the manifest
    #[error("unknown product '{product}'")]
    UnknownProduct { product: String },
}

/// Errors related to release record construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Standard support ends before the release date
    #[error("release '{version}' ends standard support ({end_of_support}) before its release ({release})")]
    SupportBeforeRelease {
        version: String,
        release: NaiveDate,
        end_of_support: NaiveDate,
    },

    /// The release date is missing or malformed
    #[error("release '{version}' has no valid release date")]
    MissingReleaseDate { version: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid date format
    #[error("invalid date '{value}': expected format like '2024-04-25'")]
    InvalidDate { value: String },

    /// Invalid width
    #[error("invalid width '{value}': expected a number of columns between {min} and {max}")]
    InvalidWidth {
        value: String,
        min: usize,
        max: usize,
    },
}

impl ApiError {
    /// Creates a new ProductNotFound error
    pub fn product_not_found(product: impl Into<String>, api: impl Into<String>) -> Self {
        ApiError::ProductNotFound {
            product: product.into(),
            api: api.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        product: impl Into<String>,
        api: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ApiError::NetworkError {
            product: product.into(),
            api: api.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        product: impl Into<String>,
        api: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ApiError::InvalidResponse {
            product: product.into(),
            api: api.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(product: impl Into<String>, api: impl Into<String>) -> Self {
        ApiError::Timeout {
            product: product.into(),
            api: api.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
