//! Cooperative blink loop.
//!
//! The loop never owns a thread or a timer. It is a small phase machine that
//! the UI steps once per frame with the current instant; each call advances
//! through every phase boundary that has passed since the previous frame.
//! Dropping the task is the cancellation.
//!
//! One cycle is: fade out, pick color, fade in, wait. Fade and wait lengths
//! are taken from the live settings when a cycle begins.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::constants::*;
use crate::models::{BlinkColor, BlinkSettings};
use crate::services::color_cycle::ColorCycle;

/// Visual state of the card body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub scale: f32,
}

impl Appearance {
    pub const FULL: Appearance = Appearance { opacity: FULL_OPACITY, scale: FULL_SCALE };
    pub const DIMMED: Appearance = Appearance { opacity: DIMMED_OPACITY, scale: DIMMED_SCALE };
    pub const ACTIVE: Appearance = Appearance { opacity: FULL_OPACITY, scale: ACTIVE_SCALE };

    fn lerp(from: Appearance, to: Appearance, t: f32) -> Appearance {
        Appearance {
            opacity: egui::lerp(from.opacity..=to.opacity, t),
            scale: egui::lerp(from.scale..=to.scale, t),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeOut,
    FadeIn,
    Wait,
}

pub struct BlinkTask {
    phase: Phase,
    phase_start: Instant,
    fade: Duration,
    wait: Duration,
    fade_out_from: Appearance,
    cycles: u64,
}

impl BlinkTask {
    /// Begin the first fade-out at `now`, starting from the "active" pop scale
    pub fn new(now: Instant, settings: &BlinkSettings) -> Self {
        Self {
            phase: Phase::FadeOut,
            phase_start: now,
            fade: settings.fade_duration(),
            wait: settings.wait_duration(),
            fade_out_from: Appearance::ACTIVE,
            cycles: 0,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed cycles (fade out, fade in and wait all elapsed)
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[cfg(test)]
    pub fn fade_duration(&self) -> Duration {
        self.fade
    }

    #[cfg(test)]
    pub fn wait_duration(&self) -> Duration {
        self.wait
    }

    pub fn is_fading(&self) -> bool {
        self.phase != Phase::Wait
    }

    fn phase_duration(&self) -> Duration {
        match self.phase {
            Phase::FadeOut | Phase::FadeIn => self.fade,
            Phase::Wait => self.wait,
        }
    }

    /// Instant at which the current phase ends
    pub fn next_deadline(&self) -> Instant {
        self.phase_start + self.phase_duration()
    }

    /// Advance past every phase boundary up to `now`.
    ///
    /// Returns the newest color picked during this call, if a fade-out
    /// finished.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        settings: &BlinkSettings,
        colors: &mut ColorCycle,
        rng: &mut R,
    ) -> Option<BlinkColor> {
        let mut picked = None;

        while now >= self.next_deadline() {
            let boundary = self.next_deadline();
            match self.phase {
                Phase::FadeOut => {
                    picked = Some(colors.advance(rng));
                    self.phase = Phase::FadeIn;
                }
                Phase::FadeIn => {
                    self.phase = Phase::Wait;
                }
                Phase::Wait => {
                    self.cycles += 1;
                    self.fade = settings.fade_duration();
                    self.wait = settings.wait_duration();
                    self.fade_out_from = Appearance::FULL;
                    self.phase = Phase::FadeOut;
                }
            }
            self.phase_start = boundary;
        }

        picked
    }

    /// Interpolated card appearance at `now`
    pub fn appearance(&self, now: Instant) -> Appearance {
        let elapsed = now.saturating_duration_since(self.phase_start);
        let total = self.phase_duration().as_secs_f32();
        let t = if total > 0.0 {
            (elapsed.as_secs_f32() / total).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = egui::emath::easing::cubic_in_out(t);

        match self.phase {
            Phase::FadeOut => Appearance::lerp(self.fade_out_from, Appearance::DIMMED, eased),
            Phase::FadeIn => Appearance::lerp(Appearance::DIMMED, Appearance::FULL, eased),
            Phase::Wait => Appearance::FULL,
        }
    }
}
