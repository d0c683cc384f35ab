use std::time::Duration;
use crate::constants::*;

/// Tunable blink parameters, bound directly to the settings sliders.
///
/// The raw fields hold whatever the sliders wrote. The blink loop only ever
/// reads the `effective_*` values, which are clamped into the slider ranges
/// so a bad value can never divide by zero or spin the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkSettings {
    pub interval_secs: f32,
    pub speed: f32,
}

impl Default for BlinkSettings {
    fn default() -> Self {
        Self {
            interval_secs: INTERVAL_DEFAULT_SECS,
            speed: SPEED_DEFAULT,
        }
    }
}

impl BlinkSettings {
    /// Speed multiplier safe for division
    pub fn effective_speed(&self) -> f32 {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return SPEED_DEFAULT;
        }
        self.speed.clamp(SPEED_MIN, SPEED_MAX)
    }

    /// Interval in seconds, never below the slider minimum
    pub fn effective_interval(&self) -> f32 {
        if !self.interval_secs.is_finite() {
            return INTERVAL_MIN_SECS;
        }
        self.interval_secs.clamp(INTERVAL_MIN_SECS, INTERVAL_MAX_SECS)
    }

    /// Length of one fade (out or in)
    pub fn fade_duration(&self) -> Duration {
        Duration::from_secs_f32(FADE_BASE_SECS / self.effective_speed())
    }

    /// Pause after the card is fully visible again
    pub fn wait_duration(&self) -> Duration {
        Duration::from_secs_f32(self.effective_interval() / self.effective_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(d: Duration, secs: f32) -> bool {
        (d.as_secs_f32() - secs).abs() < 1e-4
    }

    #[test]
    fn defaults_match_slider_defaults() {
        let s = BlinkSettings::default();
        assert_eq!(s.interval_secs, 2.0);
        assert_eq!(s.speed, 1.0);
        assert!(approx(s.fade_duration(), 0.25));
        assert!(approx(s.wait_duration(), 2.0));
    }

    #[test]
    fn durations_scale_with_speed() {
        for (interval, speed) in [(2.0, 0.5), (3.5, 1.0), (6.0, 2.5), (10.0, 5.0)] {
            let s = BlinkSettings { interval_secs: interval, speed };
            assert!(approx(s.fade_duration(), 0.25 / speed), "fade at {speed}");
            assert!(approx(s.wait_duration(), interval / speed), "wait at {interval}/{speed}");
        }
    }

    #[test]
    fn zero_or_negative_speed_falls_back() {
        for speed in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let s = BlinkSettings { interval_secs: 2.0, speed };
            assert_eq!(s.effective_speed(), SPEED_DEFAULT);
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let s = BlinkSettings { interval_secs: 0.0, speed: 0.01 };
        assert_eq!(s.effective_interval(), INTERVAL_MIN_SECS);
        assert_eq!(s.effective_speed(), SPEED_MIN);

        let s = BlinkSettings { interval_secs: 99.0, speed: 50.0 };
        assert_eq!(s.effective_interval(), INTERVAL_MAX_SECS);
        assert_eq!(s.effective_speed(), SPEED_MAX);

        let s = BlinkSettings { interval_secs: f32::NAN, speed: 1.0 };
        assert_eq!(s.effective_interval(), INTERVAL_MIN_SECS);
    }
}
