//! Core domain models for eol-timeline
//!
//! This module contains the fundamental types used throughout the application:
//! - Release records normalized from lifecycle API responses
//! - Support duration arithmetic used by tooltips and the terminal preview

mod duration;
mod release;

pub use duration::SupportDuration;
pub use release::ReleaseRecord;
