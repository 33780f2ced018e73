//! Chart colors
//!
//! Bars use translucent fills with opaque borders of the same color.

use serde::{Serialize, Serializer};
use std::fmt;

/// Fill alpha used for bars
pub const FILL_ALPHA: f32 = 0.7;

/// An RGBA color rendered the way the chart library expects (`rgba(r, g, b, a)`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Translucent fill variant
    pub const fn fill(self) -> Self {
        self.with_alpha(FILL_ALPHA)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colors for each kind of support window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub lts: Rgba,
    pub regular: Rgba,
    pub extended: Rgba,
    pub today: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lts: Rgba::rgb(233, 84, 32),
            regular: Rgba::rgb(119, 41, 83),
            extended: Rgba::rgb(44, 130, 201),
            today: Rgba::rgb(76, 175, 80),
        }
    }
}

impl Palette {
    /// Standard support color for a release
    pub fn standard(&self, lts: bool) -> Rgba {
        if lts {
            self.lts
        } else {
            self.regular
        }
    }
}
