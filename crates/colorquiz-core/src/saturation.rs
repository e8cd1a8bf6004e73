//! Saturation sorting puzzle: order swatches of one hue from least to most saturated.

use crate::color::{Color, Hsl};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Saturation levels of the generated swatches.
pub const SATURATION_LEVELS: [f64; 4] = [0.52, 0.49, 0.62, 0.81];

/// Lightness shared by every swatch.
const LIGHTNESS: f64 = 0.5;

/// A swatch with a stable identity that survives reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub id: usize,
    pub color: Color,
}

/// Swatches in the player's current order plus the tap-to-swap selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturationPuzzle {
    swatches: Vec<Swatch>,
    selected: Option<usize>,
}

impl SaturationPuzzle {
    /// Generate swatches of a random hue in shuffled saturation order.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hue = f64::from(rng.gen_range(0u16..360));
        let mut levels = SATURATION_LEVELS;
        levels.shuffle(rng);

        let swatches = levels
            .iter()
            .enumerate()
            .map(|(id, s)| Swatch {
                id,
                color: Hsl::new(hue, *s, LIGHTNESS).to_color(),
            })
            .collect();

        log::debug!("Saturation puzzle with hue {hue}");
        Self::from_swatches(swatches)
    }

    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        Self {
            swatches,
            selected: None,
        }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Colors in the current order.
    pub fn colors(&self) -> Vec<Color> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    /// Currently selected slot, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Tap a slot: select it, deselect it, or swap it with the selected slot.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.swatches.len() {
            return;
        }
        match self.selected {
            None => self.selected = Some(index),
            Some(current) if current == index => self.selected = None,
            Some(current) => {
                self.swatches.swap(current, index);
                self.selected = None;
            }
        }
    }

    /// Swap two slots directly. Returns false when either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.swatches.len() || b >= self.swatches.len() {
            return false;
        }
        self.swatches.swap(a, b);
        self.selected = None;
        true
    }

    /// True when saturation never decreases along the current order.
    pub fn is_sorted(&self) -> bool {
        self.swatches
            .windows(2)
            .all(|w| w[0].color.to_hsl().s <= w[1].color.to_hsl().s)
    }
}
