/// Services module - blink timing and color selection
///
/// Pure logic stepped by the UI layer; nothing here touches egui widgets.

pub mod blink_loop;
pub mod color_cycle;

// Re-export commonly used types
pub use blink_loop::{Appearance, BlinkTask};
pub use color_cycle::ColorCycle;
