#![allow(dead_code)]

use serde::Serialize;

/// Consensus proficiency rung, always within `0..=4`.
/// Only constructed through `from_score`, so it is serialize-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(4);

    /// Rounds and clamps an unvalidated upstream score into `0..=4`.
    /// NaN maps to zero.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Level::MIN;
        }
        Level(score.round().clamp(0.0, 4.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All five rungs in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (Level::MIN.0..=Level::MAX.0).map(Level)
    }
}

/// Five ordered swatches, indexed by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    swatches: [&'static str; 5],
}

/// White for "not assessed", yellow for 1, green shades for 2-4.
pub const GRID_PALETTE: Palette = Palette {
    swatches: ["#ffffff", "#fff9c4", "#dcedc8", "#a5d6a7", "#4caf50"],
};

impl Default for Palette {
    fn default() -> Self {
        GRID_PALETTE
    }
}

impl Palette {
    pub fn color(&self, level: Level) -> &'static str {
        self.swatches[usize::from(level.value())]
    }

    /// Color for a raw score; out-of-range input is clamped first.
    pub fn color_for(&self, score: f64) -> &'static str {
        self.color(Level::from_score(score))
    }
}
