use eframe::egui;
use std::time::Instant;

use crate::constants::*;
use crate::i18n::Language;
use crate::state::{BlinkState, UIState};

#[derive(Default)]
pub struct BlinkerApp {
    // Blink loop state (running flag, settings, color, task)
    pub blink: BlinkState,

    // UI state (language, dialog, hover)
    pub ui: UIState,
}

impl BlinkerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, language: Language) -> Self {
        Self::apply_theme(&cc.egui_ctx);

        Self {
            blink: BlinkState::default(),
            ui: UIState::new(language),
        }
    }

    /// Dark theme with a slightly deeper panel background
    fn apply_theme(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = crate::ui_components::colors::BG_MAIN;
        visuals.window_fill = crate::ui_components::colors::BG_DIALOG;
        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.interaction.selectable_labels = false;
        });
    }

    /// Card click: toggle immediately with the current slider values
    pub fn toggle_blinking(&mut self, now: Instant) {
        let running = self.blink.toggle(now);
        log::info!("[Card] Clicked - blinking {}", if running { "started" } else { "stopped" });
    }

    /// FAB click: open settings while stopped, stop while blinking
    pub fn on_fab_clicked(&mut self) {
        if self.blink.is_running() {
            log::info!("[Fab] Clicked - stopping blink loop");
            self.blink.stop();
        } else {
            self.ui.open_settings();
        }
    }

    /// Dialog "Start": close the dialog and launch the loop
    pub fn start_from_dialog(&mut self, now: Instant) {
        self.ui.close_settings();
        self.blink.start(now);
    }

    pub fn cancel_dialog(&mut self) {
        self.ui.close_settings();
    }

    /// Step the blink loop and schedule the next frame
    fn drive_blink_loop(&mut self, ctx: &egui::Context, now: Instant) {
        let mut rng = rand::rng();
        if let Some(color) = self.blink.tick(now, &mut rng) {
            log::debug!("[Blink] Showing {}", color.label(self.ui.language));
        }

        match self.blink.repaint_after(now) {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}

impl eframe::App for BlinkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drive_blink_loop(ctx, now);

        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(egui::Margin::same(PAGE_PADDING));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                crate::screens::render_card(self, ui, now);
            });

        crate::ui_components::fab::render_fab(self, ctx);

        if self.ui.show_settings_dialog {
            crate::screens::render_settings_dialog(self, ctx, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fab_opens_dialog_when_stopped() {
        let mut app = BlinkerApp::default();
        app.on_fab_clicked();
        assert!(app.ui.show_settings_dialog);
        assert!(!app.blink.is_running());
    }

    #[test]
    fn dialog_start_closes_and_starts() {
        let mut app = BlinkerApp::default();
        let now = Instant::now();
        app.on_fab_clicked();
        app.start_from_dialog(now);
        assert!(!app.ui.show_settings_dialog);
        assert!(app.blink.is_running());
    }

    #[test]
    fn fab_stops_when_running() {
        let mut app = BlinkerApp::default();
        let now = Instant::now();
        app.toggle_blinking(now);
        app.on_fab_clicked();
        assert!(!app.blink.is_running());
        assert!(!app.ui.show_settings_dialog);
    }

    #[test]
    fn cancel_keeps_loop_stopped() {
        let mut app = BlinkerApp::default();
        app.on_fab_clicked();
        app.blink.settings.speed = 3.0;
        app.cancel_dialog();
        assert!(!app.ui.show_settings_dialog);
        assert!(!app.blink.is_running());
        // sliders write live; cancel does not roll them back
        assert_eq!(app.blink.settings.speed, 3.0);
    }
}
