//! Application constants and configuration values

// === Window & Layout ===
pub const APP_WIDTH: f32 = 420.0;
pub const APP_HEIGHT: f32 = 640.0;
pub const PAGE_PADDING: i8 = 20;
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_CORNER_RADIUS: u8 = 15;
pub const CARD_ICON_SIZE: f32 = 40.0;
pub const CARD_TITLE_SIZE: f32 = 20.0;
pub const TITLE_BOLD_OFFSET: f32 = 0.6;
pub const FAB_SIZE: f32 = 56.0;
pub const FAB_MARGIN: f32 = 16.0;
pub const DIALOG_WIDTH: f32 = 300.0;
pub const SLIDER_WIDTH: f32 = 250.0;

// === Card shadow ===
pub const SHADOW_SPREAD: u8 = 2;
pub const SHADOW_BLUR: u8 = 25;
pub const SHADOW_OFFSET: [i8; 2] = [0, 6];

// === Blink timing ===
pub const FADE_BASE_SECS: f32 = 0.25;   // divided by speed
pub const CYCLES_PER_COLOR: u32 = 3;

// === Appearance ===
pub const DIMMED_OPACITY: f32 = 0.1;
pub const DIMMED_SCALE: f32 = 0.95;
pub const FULL_OPACITY: f32 = 1.0;
pub const FULL_SCALE: f32 = 1.0;
pub const ACTIVE_SCALE: f32 = 1.1;      // start "pop" before the first fade
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_ANIMATION_SECS: f32 = 0.15;

// === Slider ranges ===
pub const INTERVAL_MIN_SECS: f32 = 2.0;
pub const INTERVAL_MAX_SECS: f32 = 10.0;
pub const INTERVAL_DEFAULT_SECS: f32 = 2.0;
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 5.0;
pub const SPEED_DEFAULT: f32 = 1.0;
pub const SLIDER_STEP: f64 = 0.1;
