use eframe::egui;
use std::time::Instant;

use crate::app::BlinkerApp;
use crate::constants::*;
use crate::ui_components::colors;

/// The blinking card - fills the panel height, fixed width, centered.
///
/// Opacity and scale come from the blink loop; hovering blends the scale
/// toward `HOVER_SCALE`. A click toggles blinking immediately.
pub fn render_card(app: &mut BlinkerApp, ui: &mut egui::Ui, now: Instant) {
    let available = ui.available_rect_before_wrap();
    let base = card_rect(available);

    let response = ui.allocate_rect(base, egui::Sense::click());
    app.ui.card_hovered = response.hovered();

    let appearance = app.blink.appearance(now);
    let hover_t = ui.ctx().animate_bool_with_time(
        response.id.with("hover"),
        app.ui.card_hovered,
        HOVER_ANIMATION_SECS,
    );
    let scale = egui::lerp(appearance.scale..=HOVER_SCALE, hover_t);
    let rect = egui::Rect::from_center_size(base.center(), base.size() * scale);

    let color = app.blink.current_color();
    let corner_radius = egui::CornerRadius::same(CARD_CORNER_RADIUS);

    let mut painter = ui.painter().clone();
    painter.set_opacity(appearance.opacity);

    painter.add(card_shadow().as_shape(rect, corner_radius));
    painter.rect_filled(rect, corner_radius, color.fill());

    let center = rect.center();
    painter.text(
        center - egui::vec2(0.0, 18.0 * scale),
        egui::Align2::CENTER_CENTER,
        "🎨",
        egui::FontId::proportional(CARD_ICON_SIZE * scale),
        colors::CARD_TEXT,
    );
    let title_pos = center + egui::vec2(0.0, 24.0 * scale);
    for offset in bold_passes(scale) {
        painter.text(
            title_pos + offset,
            egui::Align2::CENTER_CENTER,
            app.ui.text().card_title,
            egui::FontId::proportional(CARD_TITLE_SIZE * scale),
            colors::CARD_TEXT,
        );
    }

    if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
        app.toggle_blinking(now);
    }
}

/// Card glow; the same dark red whatever color the card shows
fn card_shadow() -> egui::Shadow {
    egui::Shadow {
        offset: SHADOW_OFFSET,
        blur: SHADOW_BLUR,
        spread: SHADOW_SPREAD,
        color: colors::CARD_SHADOW,
    }
}

/// Offsets for drawing the title twice, a hair apart, to thicken the strokes.
///
/// The default egui fonts ship no bold face.
fn bold_passes(scale: f32) -> [egui::Vec2; 2] {
    [egui::Vec2::ZERO, egui::vec2(TITLE_BOLD_OFFSET * scale, 0.0)]
}

/// Unscaled card bounds inside `available`.
///
/// The height leaves room for the largest scale so the card never spills
/// over the panel padding.
fn card_rect(available: egui::Rect) -> egui::Rect {
    let max_scale = ACTIVE_SCALE.max(HOVER_SCALE);
    let width = CARD_WIDTH.min(available.width() / max_scale);
    let height = available.height() / max_scale;
    egui::Rect::from_center_size(available.center(), egui::vec2(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centered_and_fits_when_scaled() {
        let available = egui::Rect::from_min_size(egui::pos2(20.0, 20.0), egui::vec2(600.0, 550.0));
        let rect = card_rect(available);
        assert_eq!(rect.center(), available.center());
        assert_eq!(rect.width(), CARD_WIDTH);
        assert!(rect.height() * ACTIVE_SCALE <= available.height() + 0.01);
    }

    #[test]
    fn shadow_is_fixed_dark_red() {
        let shadow = card_shadow();
        assert_eq!(shadow.color, egui::Color32::from_rgb(0xB7, 0x1C, 0x1C));
        assert_eq!(shadow.blur, SHADOW_BLUR);
        assert_eq!(shadow.spread, SHADOW_SPREAD);
        assert_eq!(shadow.offset, SHADOW_OFFSET);
    }

    #[test]
    fn title_is_drawn_twice_for_bold() {
        let passes = bold_passes(1.0);
        assert_eq!(passes[0], egui::Vec2::ZERO);
        assert!(passes[1].x > 0.0 && passes[1].x < 1.0);
        assert_eq!(passes[1].y, 0.0);
        assert!(bold_passes(1.1)[1].x > passes[1].x);
    }

    #[test]
    fn narrow_window_shrinks_card() {
        let available = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(200.0, 400.0));
        let rect = card_rect(available);
        assert!(rect.width() * ACTIVE_SCALE <= 200.0 + 0.01);
    }
}
