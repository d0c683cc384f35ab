// Data models for the blinking card

pub mod palette;
pub mod settings;

// Re-export commonly used types
pub use palette::{BlinkColor, PALETTE};
pub use settings::BlinkSettings;
