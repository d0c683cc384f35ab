use eframe::egui;
use std::time::Instant;

use crate::app::BlinkerApp;
use crate::constants::*;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DialogAction {
    None,
    Cancel,
    Start,
}

/// Modal "Blink Settings" dialog.
///
/// Sliders are bound straight to the live settings. Only the Cancel and
/// Start buttons close the dialog; clicks outside it are ignored.
pub fn render_settings_dialog(app: &mut BlinkerApp, ctx: &egui::Context, now: Instant) {
    let text = app.ui.text();

    let modal = egui::Modal::new(egui::Id::new("settings_dialog")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.spacing_mut().slider_width = SLIDER_WIDTH;

        ui.label(egui::RichText::new(text.dialog_title).size(20.0).strong());
        ui.add_space(12.0);

        ui.label(egui::RichText::new(text.interval).size(14.0));
        ui.add(
            egui::Slider::new(
                &mut app.blink.settings.interval_secs,
                INTERVAL_MIN_SECS..=INTERVAL_MAX_SECS,
            )
            .step_by(SLIDER_STEP)
            .fixed_decimals(1)
            .suffix("s")
            .text(text.interval_slider),
        );
        ui.add_space(8.0);

        ui.label(egui::RichText::new(text.speed).size(14.0));
        ui.add(
            egui::Slider::new(&mut app.blink.settings.speed, SPEED_MIN..=SPEED_MAX)
                .step_by(SLIDER_STEP)
                .fixed_decimals(1)
                .suffix("x")
                .text(text.speed_slider),
        );
        ui.add_space(8.0);

        ui.label(egui::RichText::new(text.language).size(14.0));
        let mut language = app.ui.language;
        ui.radio_value(&mut language, Language::English, text.english);
        ui.radio_value(&mut language, Language::Spanish, text.spanish);
        app.ui.set_language(language);

        ui.add_space(12.0);
        ui.separator();

        let mut action = DialogAction::None;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(text.start).clicked() {
                action = DialogAction::Start;
            }
            if ui.button(text.cancel).clicked() {
                action = DialogAction::Cancel;
            }
        });
        action
    });

    match modal.inner {
        DialogAction::Start => app.start_from_dialog(now),
        DialogAction::Cancel => app.cancel_dialog(),
        DialogAction::None => {}
    }
}
