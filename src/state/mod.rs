pub mod blink_state;
pub mod ui_state;

pub use blink_state::BlinkState;
pub use ui_state::UIState;
