//! Fixed UI colors outside the blink palette

use egui::Color32;

// Backgrounds
pub const BG_MAIN: Color32 = Color32::from_rgb(18, 18, 18);
pub const BG_DIALOG: Color32 = Color32::from_rgb(40, 40, 44);

// Card content
pub const CARD_SHADOW: Color32 = Color32::from_rgb(0xB7, 0x1C, 0x1C); // red 900, fixed for every color
pub const CARD_TEXT: Color32 = Color32::WHITE;

// Floating action button (blue 700 with a red heart)
pub const FAB_BACKGROUND: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);
pub const FAB_FOREGROUND: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);
pub const FAB_SHADOW: Color32 = Color32::from_black_alpha(120);
