use crate::i18n::{Language, Strings};

#[derive(Default)]
pub struct UIState {
    // Localization
    pub language: Language,

    // Settings dialog
    pub show_settings_dialog: bool,

    // Card interaction
    pub card_hovered: bool,
}

impl UIState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// String table for the active language
    pub fn text(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn open_settings(&mut self) {
        log::debug!("[Dialog] Opening settings");
        self.show_settings_dialog = true;
    }

    pub fn close_settings(&mut self) {
        log::debug!("[Dialog] Closing settings");
        self.show_settings_dialog = false;
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::info!("[Dialog] Display language changed to {:?}", language);
            self.language = language;
        }
    }
}
