//! eol-timeline - Release support timeline library
//!
//! This library provides the core functionality for charting release
//! support windows from endoflife.date lifecycle data:
//! - Fetching and normalizing release cycles
//! - Filtering to supported releases, newest first
//! - Building a declarative bar chart configuration
//! - Product menu and hash-based navigation

pub mod api;
pub mod chart;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod menu;
pub mod orchestrator;
pub mod output;
pub mod progress;
