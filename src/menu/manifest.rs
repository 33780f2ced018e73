//! Product manifest
//!
//! The manifest lists product categories and the products shown in the menu.
//! It is read from a local JSON or TOML file; a default manifest is embedded
//! in the binary.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const EMBEDDED_MANIFEST: &str = include_str!("../../data/products.json");
const EMBEDDED_PATH: &str = "<embedded>";

/// A product that can be charted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier used by the lifecycle API (e.g., "ubuntu")
    pub id: String,
    /// Human readable name (e.g., "Ubuntu")
    pub label: String,
}

/// A named group of products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub products: Vec<Product>,
}

/// Static list of product categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductManifest {
    pub categories: Vec<Category>,
}

impl ProductManifest {
    /// The manifest shipped with the binary
    pub fn embedded() -> Result<Self, ManifestError> {
        Self::from_json_str(EMBEDDED_MANIFEST, EMBEDDED_PATH)
    }

    /// Load a manifest file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content, path),
            Some("toml") => Self::from_toml_str(&content, path),
            _ => Err(ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Load the manifest at `path`, or the embedded one when no path is given
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, ManifestError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// Parse a JSON manifest
    pub fn from_json_str(
        content: &str,
        origin: impl Into<PathBuf>,
    ) -> Result<Self, ManifestError> {
        let origin = origin.into();
        let manifest: Self = serde_json::from_str(content)
            .map_err(|e| ManifestError::parse_error(&origin, e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a TOML manifest
    pub fn from_toml_str(
        content: &str,
        origin: impl Into<PathBuf>,
    ) -> Result<Self, ManifestError> {
        let origin = origin.into();
        let manifest: Self = toml::from_str(content)
            .map_err(|e| ManifestError::parse_error(&origin, e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that categories are non-empty and product ids unique
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();

        for category in &self.categories {
            if category.products.is_empty() {
                return Err(ManifestError::EmptyCategory {
                    category: category.name.clone(),
                });
            }
            for product in &category.products {
                // ids are matched case-insensitively
                if !seen.insert(product.id.to_ascii_lowercase()) {
                    return Err(ManifestError::DuplicateProduct {
                        product: product.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// All products in manifest order
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    /// Find a product by id (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Display label for a product id, falling back to the id itself
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.find(id).map(|p| p.label.as_str()).unwrap_or(id)
    }
}
