use eframe::egui;

use crate::app::BlinkerApp;
use crate::constants::{FAB_MARGIN, FAB_SIZE};
use crate::ui_components::colors;

/// Floating action button in the bottom-right corner.
///
/// Hidden while the card is blinking; clicking the card is the way to stop.
pub fn render_fab(app: &mut BlinkerApp, ctx: &egui::Context) {
    if app.blink.is_running() {
        return;
    }

    let tooltip = app.ui.text().fab_tooltip;

    egui::Area::new(egui::Id::new("fab_area"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-FAB_MARGIN, -FAB_MARGIN))
        .show(ctx, |ui| {
            let frame = egui::Frame::new()
                .corner_radius(FAB_SIZE / 2.0)
                .shadow(egui::Shadow {
                    offset: [0, 4],
                    blur: 8,
                    spread: 0,
                    color: colors::FAB_SHADOW,
                });

            frame.show(ui, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("❤")
                        .size(24.0)
                        .color(colors::FAB_FOREGROUND),
                )
                .fill(colors::FAB_BACKGROUND)
                .corner_radius(FAB_SIZE / 2.0)
                .min_size(egui::vec2(FAB_SIZE, FAB_SIZE));

                let response = ui
                    .add(button)
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text(tooltip);

                if response.clicked() {
                    app.on_fab_clicked();
                }
            });
        });
}
