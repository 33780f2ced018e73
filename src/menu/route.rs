//! Hash-based page navigation
//!
//! A location hash selects what the page shows: the product menu, a product
//! chart, or a not-found notice. Exactly one section is visible at a time.

use super::ProductManifest;
use serde::Serialize;
use std::fmt;

/// Navigation target resolved from a location hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product menu
    Home,
    /// Support timeline of a product (canonical manifest id)
    Product(String),
    /// Hash that names no known product
    NotFound(String),
}

/// Page sections toggled by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Chart,
    NotFound,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[Section::Home, Section::Chart, Section::NotFound]
    }

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Chart => "chart",
            Section::NotFound => "not-found",
        }
    }
}

impl Route {
    /// Resolve a hash such as `#ubuntu`. A bare id is accepted too.
    pub fn from_hash(hash: &str, manifest: &ProductManifest) -> Self {
        let target = hash.trim();
        let target = target.strip_prefix('#').unwrap_or(target);
        let target = target.strip_prefix('/').unwrap_or(target);

        if target.is_empty() || target.eq_ignore_ascii_case("home") {
            return Route::Home;
        }

        match manifest.find(target) {
            Some(product) => Route::Product(product.id.clone()),
            None => Route::NotFound(target.to_string()),
        }
    }

    /// Canonical hash for this route
    pub fn hash(&self) -> String {
        match self {
            Route::Home => "#home".to_string(),
            Route::Product(id) | Route::NotFound(id) => format!("#{}", id),
        }
    }

    /// The section this route shows
    pub fn visible_section(&self) -> Section {
        match self {
            Route::Home => Section::Home,
            Route::Product(_) => Section::Chart,
            Route::NotFound(_) => Section::NotFound,
        }
    }

    /// Visibility of every section for this route
    pub fn sections(&self) -> Vec<(Section, bool)> {
        let visible = self.visible_section();
        Section::all()
            .iter()
            .map(|section| (*section, *section == visible))
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hash())
    }
}
