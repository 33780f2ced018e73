//! Product menu and page navigation
//!
//! This module provides:
//! - Loading of the static product manifest
//! - The product menu grouped by category, with open/close/select state
//! - Hash-based routes deciding which page section is visible

mod manifest;
mod route;

pub use manifest::{Category, Product, ProductManifest};
pub use route::{Route, Section};

use crate::error::ManifestError;
use serde::Serialize;

/// One selectable entry of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Link target (e.g., "#ubuntu")
    pub href: String,
}

/// Menu entries under a category heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Product menu built from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub groups: Vec<MenuGroup>,
}

impl Menu {
    /// Build the menu from a manifest, keeping manifest order
    pub fn from_manifest(manifest: &ProductManifest) -> Self {
        let groups = manifest
            .categories
            .iter()
            .map(|category| MenuGroup {
                title: category.name.clone(),
                items: category
                    .products
                    .iter()
                    .map(|product| MenuItem {
                        id: product.id.clone(),
                        label: product.label.clone(),
                        href: Route::Product(product.id.clone()).hash(),
                    })
                    .collect(),
            })
            .collect();

        Self { groups }
    }

    /// Find an item by product id (case-insensitive)
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.id.eq_ignore_ascii_case(id))
    }

    /// Total number of products in the menu
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interactive state of the menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    selected: Option<String>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currently selected product id
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Select a product: closes the menu and returns the hash to navigate to
    pub fn select(&mut self, menu: &Menu, id: &str) -> Result<String, ManifestError> {
        let item = menu.item(id).ok_or_else(|| ManifestError::UnknownProduct {
            product: id.to_string(),
        })?;

        self.selected = Some(item.id.clone());
        self.open = false;
        Ok(item.href.clone())
    }

    /// Sync the selection with a route reached by navigation
    pub fn follow(&mut self, route: &Route) {
        self.selected = match route {
            Route::Product(id) => Some(id.clone()),
            Route::Home | Route::NotFound(_) => None,
        };
        self.open = false;
    }
}
