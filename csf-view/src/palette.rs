//! Season colors and labels.
//!
//! Seasons are colored on a single blue hue. Index 0 is the newest displayed
//! season and gets the darkest shade; lightness rises evenly to the oldest.
//! Colors stay structured ([`Hsla`]) until they are handed to the renderer.

use serde::Serialize;
use std::fmt;

pub use csf_core::season::{format_season_label, INVALID_SEASON_LABEL};

pub const SEASON_HUE: f64 = 210.0;
pub const SEASON_SATURATION: f64 = 70.0;
/// Lightness (percent) of the newest season.
pub const DARKEST_LIGHTNESS: f64 = 25.0;
/// Lightness (percent) of the oldest season.
pub const LIGHTEST_LIGHTNESS: f64 = 75.0;

/// Hue in degrees, saturation and lightness in percent, alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn with_alpha(self, alpha: f64) -> Self {
        Hsla {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `hsla()` notation for the renderer.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {:.2}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Color for the series at `index` of `total`, newest first.
///
/// An `index` past the end is clamped to the oldest season; `total <= 1`
/// always yields the darkest shade.
pub fn season_color(index: usize, total: usize) -> Hsla {
    let lightness = if total <= 1 {
        DARKEST_LIGHTNESS
    } else {
        let last = total - 1;
        let position = index.min(last) as f64 / last as f64;
        DARKEST_LIGHTNESS + position * (LIGHTEST_LIGHTNESS - DARKEST_LIGHTNESS)
    };
    Hsla {
        hue: SEASON_HUE,
        saturation: SEASON_SATURATION,
        lightness,
        alpha: 1.0,
    }
}
