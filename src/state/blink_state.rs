use std::time::{Duration, Instant};

use rand::Rng;

use crate::models::{BlinkColor, BlinkSettings};
use crate::services::{Appearance, BlinkTask, ColorCycle};

/// Run state of the card: running flag, live settings, held color and the
/// single blink task.
///
/// The task lives in an `Option` so there is never more than one; stopping
/// drops it, which cancels any pending fade or wait.
#[derive(Default)]
pub struct BlinkState {
    running: bool,
    pub settings: BlinkSettings,
    colors: ColorCycle,
    displayed: BlinkColor,
    task: Option<BlinkTask>,
}

impl BlinkState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub fn has_task(&self) -> bool {
        self.task.is_some()
    }

    pub fn current_color(&self) -> BlinkColor {
        self.displayed
    }

    /// Start blinking with the current settings.
    ///
    /// Returns `false` without touching anything if a loop is already active.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.running || self.task.is_some() {
            log::warn!("[Blink] Start ignored - blink loop already active");
            return false;
        }

        self.running = true;
        self.colors.reset();
        self.displayed = self.colors.held();
        self.task = Some(BlinkTask::new(now, &self.settings));

        log::info!(
            "[Blink] Started (interval: {:.1}s, speed: {:.1}x)",
            self.settings.effective_interval(),
            self.settings.effective_speed()
        );
        true
    }

    /// Stop blinking and restore the initial color and full appearance
    pub fn stop(&mut self) {
        let cycles = self.task.as_ref().map(|t| t.cycles()).unwrap_or(0);

        self.running = false;
        self.task = None;
        self.colors.reset();
        self.displayed = BlinkColor::INITIAL;

        log::info!("[Blink] Stopped after {} cycle(s)", cycles);
    }

    /// Stop if running, start otherwise. Returns the new running flag.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
        self.running
    }

    /// Step the blink loop up to `now`
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<BlinkColor> {
        if !self.running {
            self.task = None;
            return None;
        }

        let task = self.task.as_mut()?;
        let picked = task.tick(now, &self.settings, &mut self.colors, rng);
        if let Some(color) = picked {
            self.displayed = color;
        }
        picked
    }

    pub fn appearance(&self, now: Instant) -> Appearance {
        match &self.task {
            Some(task) if self.running => task.appearance(now),
            _ => Appearance::FULL,
        }
    }

    /// How long the UI may sleep before the next visible change.
    ///
    /// `None` when stopped, zero while a fade is animating.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        let task = self.task.as_ref().filter(|_| self.running)?;
        if task.is_fading() {
            Some(Duration::ZERO)
        } else {
            Some(task.next_deadline().saturating_duration_since(now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn starts_stopped_with_initial_color() {
        let state = BlinkState::default();
        assert!(!state.is_running());
        assert!(!state.has_task());
        assert_eq!(state.current_color(), BlinkColor::INITIAL);
        assert_eq!(state.appearance(Instant::now()), Appearance::FULL);
        assert_eq!(state.repaint_after(Instant::now()), None);
    }

    #[test]
    fn second_start_is_rejected() {
        let mut state = BlinkState::default();
        let t0 = Instant::now();
        assert!(state.start(t0));
        assert!(!state.start(t0 + secs(0.1)));
        assert!(state.is_running());
        assert!(state.has_task());
    }

    #[test]
    fn toggle_alternates_without_second_task() {
        let mut state = BlinkState::default();
        let t0 = Instant::now();
        assert!(state.toggle(t0));
        assert!(state.has_task());
        assert!(!state.toggle(t0 + secs(1.0)));
        assert!(!state.has_task());
        assert!(state.toggle(t0 + secs(2.0)));
        assert!(state.has_task());
    }

    #[test]
    fn stop_resets_color_and_appearance() {
        let mut state = BlinkState::default();
        let mut rng = StdRng::seed_from_u64(9);
        let t0 = Instant::now();
        state.start(t0);

        // run long enough for at least one color change, then stop mid-fade
        let mut now = t0;
        for _ in 0..200 {
            now += secs(0.05);
            state.tick(now, &mut rng);
        }
        assert_ne!(state.current_color(), BlinkColor::INITIAL);

        let fading = t0 + secs(10.1);
        state.stop();
        assert!(!state.is_running());
        assert!(!state.has_task());
        assert_eq!(state.current_color(), BlinkColor::INITIAL);
        assert_eq!(state.appearance(fading), Appearance::FULL);
        assert_eq!(state.tick(fading, &mut rng), None);
    }

    #[test]
    fn restart_begins_from_initial_color() {
        let mut state = BlinkState::default();
        let mut rng = StdRng::seed_from_u64(10);
        let t0 = Instant::now();
        state.start(t0);
        state.tick(t0 + secs(30.0), &mut rng);
        state.stop();

        let t1 = t0 + secs(31.0);
        state.start(t1);
        let first = state.tick(t1 + secs(0.26), &mut rng);
        assert_eq!(first, Some(BlinkColor::INITIAL));
    }

    #[test]
    fn repaint_hint_follows_phase() {
        let mut state = BlinkState::default();
        let mut rng = StdRng::seed_from_u64(12);
        let t0 = Instant::now();
        state.start(t0);
        assert_eq!(state.repaint_after(t0), Some(Duration::ZERO));

        // default cycle: fades end at 0.5s, wait ends at 2.5s
        let now = t0 + secs(1.0);
        state.tick(now, &mut rng);
        let hint = state.repaint_after(now).unwrap_or_default();
        assert!((hint.as_secs_f32() - 1.5).abs() < 1e-3);
    }
}
