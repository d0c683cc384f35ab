//! Display language and the UI string tables.
//!
//! Only English and Spanish are provided. The language can be switched at
//! runtime from the settings dialog; every label is looked up per frame so
//! the change shows up immediately.
//!
//! The initial language comes from the desktop's preference list, as
//! reported by `i18n_embed::DesktopLanguageRequester` from the platform
//! locale settings.

use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::DesktopLanguageRequester;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// All user-facing strings for one language
#[derive(Debug)]
pub struct Strings {
    pub dialog_title: &'static str,
    pub interval: &'static str,
    pub speed: &'static str,
    pub language: &'static str,
    pub english: &'static str,
    pub spanish: &'static str,
    pub cancel: &'static str,
    pub start: &'static str,
    pub card_title: &'static str,
    pub fab_tooltip: &'static str,
    pub interval_slider: &'static str,
    pub speed_slider: &'static str,
}

static EN: Strings = Strings {
    dialog_title: "Blink Settings",
    interval: "Change Intervals:",
    speed: "Animation Speed:",
    language: "Display Language:",
    english: "English",
    spanish: "Spanish",
    cancel: "Cancel",
    start: "Start",
    card_title: "COLOR BLINKER",
    fab_tooltip: "Click to start/stop",
    interval_slider: "Interval",
    speed_slider: "Speed",
};

static ES: Strings = Strings {
    dialog_title: "Configuración de Parpadeo",
    interval: "Cambiar Intervalos:",
    speed: "Velocidad de Animación:",
    language: "Idioma de Pantalla:",
    english: "Inglés",
    spanish: "Español",
    cancel: "Cancelar",
    start: "Comenzar",
    card_title: "PARPADEADOR DE COLORES",
    fab_tooltip: "Clic para iniciar/detener",
    interval_slider: "Intervalo",
    speed_slider: "Velocidad",
};

impl Language {
    pub fn strings(self) -> &'static Strings {
        match self {
            Language::English => &EN,
            Language::Spanish => &ES,
        }
    }

    /// First supported language in a preference-ordered request list
    pub fn from_requested(requested: &[LanguageIdentifier]) -> Self {
        requested
            .iter()
            .find_map(|id| match id.language.as_str() {
                "es" => Some(Language::Spanish),
                "en" => Some(Language::English),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Initial language from the desktop's preferred languages
    pub fn from_desktop() -> Self {
        let requested = DesktopLanguageRequester::requested_languages();
        log::debug!("[Main] Requested languages: {:?}", requested);
        Self::from_requested(&requested)
    }
}
