use egui::Color32;
use crate::i18n::Language;

/// Colors the card can blink through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlinkColor {
    #[default]
    Red,
    Yellow,
    Blue,
}

/// Fixed ordered palette eligible for display
pub const PALETTE: [BlinkColor; 3] = [BlinkColor::Red, BlinkColor::Yellow, BlinkColor::Blue];

impl BlinkColor {
    /// Color shown at startup and restored on every stop
    pub const INITIAL: BlinkColor = BlinkColor::Red;

    /// Card fill (Material 500 tones)
    pub fn fill(self) -> Color32 {
        match self {
            BlinkColor::Red => Color32::from_rgb(0xF4, 0x43, 0x36),
            BlinkColor::Yellow => Color32::from_rgb(0xFF, 0xEB, 0x3B),
            BlinkColor::Blue => Color32::from_rgb(0x21, 0x96, 0xF3),
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (BlinkColor::Red, Language::English) => "red",
            (BlinkColor::Yellow, Language::English) => "yellow",
            (BlinkColor::Blue, Language::English) => "blue",
            (BlinkColor::Red, Language::Spanish) => "rojo",
            (BlinkColor::Yellow, Language::Spanish) => "amarillo",
            (BlinkColor::Blue, Language::Spanish) => "azul",
        }
    }
}
