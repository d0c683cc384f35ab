pub mod card;
pub mod settings_dialog;

pub use card::render_card;
pub use settings_dialog::render_settings_dialog;
