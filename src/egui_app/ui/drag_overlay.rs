use super::*;
use eframe::egui::{Align2, Area, Order, Stroke, Vec2};

impl BoardApp {
    /// Floating label following the pointer, plus the release handling.
    ///
    /// Runs after every panel has re-asserted its hover target for the
    /// frame, so the commit always sees the target actually under the
    /// pointer at release time.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        if self.controller.ui.drag.is_active()
            && let Some(pos) = self.controller.ui.drag.position
        {
            let label = if self.controller.ui.drag.label.is_empty() {
                "Card".to_string()
            } else {
                self.controller.ui.drag.label.clone()
            };
            Area::new("drag_preview".into())
                .order(Order::Tooltip)
                .pivot(Align2::CENTER_CENTER)
                .current_pos(pos + Vec2::new(18.0, 18.0))
                .show(ctx, |ui| {
                    Frame::new()
                        .fill(palette.card_purple)
                        .stroke(Stroke::new(1.0, palette.accent_ice))
                        .corner_radius(6.0)
                        .inner_margin(Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(RichText::new(label).color(palette.text_primary));
                        });
                });
        }

        if self.controller.ui.drag.is_active() {
            if ctx.input(|i| i.pointer.any_released()) {
                self.controller.finish_card_drag();
            } else if !ctx.input(|i| i.pointer.primary_down()) {
                // Safety net to clear drag state if a release was missed.
                self.controller.finish_card_drag();
            }
        }
    }
}
