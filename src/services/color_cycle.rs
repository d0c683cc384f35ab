//! Color selection rule for the blink loop
//!
//! A color is held for `CYCLES_PER_COLOR` consecutive blinks, then replaced by
//! a random palette entry other than the one being held.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::constants::CYCLES_PER_COLOR;
use crate::models::{BlinkColor, PALETTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    held: BlinkColor,
    shown: u32,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            held: BlinkColor::INITIAL,
            shown: 0,
        }
    }
}

impl ColorCycle {
    pub fn held(&self) -> BlinkColor {
        self.held
    }

    /// How many cycles the held color has been displayed
    #[cfg(test)]
    pub fn shown(&self) -> u32 {
        self.shown
    }

    /// Pick the color for the next blink cycle
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BlinkColor {
        if self.shown >= CYCLES_PER_COLOR {
            let previous = self.held;
            self.held = pick_other(previous, rng);
            self.shown = 0;
            log::debug!("[Blink] Color change {:?} -> {:?}", previous, self.held);
        }
        self.shown += 1;
        self.held
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Uniform choice among the palette entries different from `current`
fn pick_other<R: Rng + ?Sized>(current: BlinkColor, rng: &mut R) -> BlinkColor {
    let candidates: Vec<BlinkColor> = PALETTE.iter().copied().filter(|c| *c != current).collect();
    // palette always has more than one entry
    candidates.choose(rng).copied().unwrap_or(current)
}
