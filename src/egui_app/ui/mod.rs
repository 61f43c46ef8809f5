//! egui renderer for the board UI.

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind, Ui};

use crate::board::{DropTarget, Item, SectionMap};
use crate::egui_app::controller::{BoardCallbacks, BoardController};

mod drag_overlay;
pub mod style;

/// Smallest viewport the layout stays usable in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(460.0, 520.0);

const HEADER_HEIGHT: f32 = 44.0;
const DELETE_COLUMN_WIDTH: f32 = 30.0;

/// Renders the board using the shared controller state.
pub struct BoardApp {
    controller: BoardController,
    visuals_set: bool,
}

impl BoardApp {
    /// Create the app over a host-seeded board.
    ///
    /// A failed config load falls back to defaults; the warning lands in the
    /// status bar rather than aborting startup.
    pub fn new(board: SectionMap, callbacks: BoardCallbacks) -> Self {
        let mut controller = BoardController::with_callbacks(board, callbacks);
        if let Err(err) = controller.load_configuration() {
            tracing::warn!("Failed to load config: {err}");
            controller.set_status(
                format!("Using default options; config load failed: {err}"),
                style::StatusTone::Warning,
            );
        }
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.cancel_card_drag();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.controller.nudge_selection(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.controller.nudge_selection(-1);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.bg_secondary).inner_margin(Margin::symmetric(10, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Cardstack").strong());
                    ui.separator();
                    ui.menu_button("View", |ui| {
                        let mut compact = self.controller.ui.controls.compact_rows;
                        if ui.checkbox(&mut compact, "Compact rows").changed() {
                            self.controller.set_compact_rows(compact);
                        }
                        let mut intro = self.controller.ui.controls.show_intro;
                        if ui.checkbox(&mut intro, "Show intro text").changed() {
                            self.controller.set_show_intro(intro);
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(7.0, 9.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(&status.badge_label);
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_board(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        if self.controller.ui.controls.show_intro {
            ui.label(
                RichText::new(
                    "Delete, add and move items within and between sections. \
                     If a section is empty, drop a card on its header to move it in.",
                )
                .color(palette.text_muted)
                .italics(),
            );
            ui.add_space(8.0);
        }

        let drag_active = self.controller.ui.drag.is_active();
        let pointer_pos = ui
            .input(|i| i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()))
            .or(self.controller.ui.drag.position);
        let sections: Vec<(String, Vec<Item>)> = self
            .controller
            .board()
            .iter()
            .map(|(name, items)| (name.to_owned(), items.to_vec()))
            .collect();

        egui::ScrollArea::vertical()
            .id_salt("board_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (name, items) in &sections {
                    self.render_section(ui, name, items, drag_active, pointer_pos);
                    ui.add_space(12.0);
                }
            });
    }

    fn render_section(
        &mut self,
        ui: &mut Ui,
        section: &str,
        items: &[Item],
        drag_active: bool,
        pointer_pos: Option<egui::Pos2>,
    ) {
        let palette = style::palette();
        let header = Frame::new()
            .fill(palette.section_indigo)
            .corner_radius(6.0)
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_height(HEADER_HEIGHT - 16.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(section).strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("+").size(16.0))
                            .on_hover_text(format!("Add an item to {section}"))
                            .clicked()
                        {
                            self.controller.add_item(section);
                        }
                    });
                });
            });
        let header_rect = header.response.rect;
        if drag_active
            && let Some(pointer) = pointer_pos
            && header_rect.contains(pointer)
        {
            self.controller
                .update_card_drag(pointer, Some(DropTarget::Section(section.to_owned())));
            ui.painter()
                .rect_stroke(header_rect, 6.0, style::drop_target_stroke(), StrokeKind::Inside);
        }
        ui.add_space(6.0);

        for item in items {
            self.render_card_row(ui, section, item, drag_active, pointer_pos);
        }
    }

    fn render_card_row(
        &mut self,
        ui: &mut Ui,
        section: &str,
        item: &Item,
        drag_active: bool,
        pointer_pos: Option<egui::Pos2>,
    ) {
        let palette = style::palette();
        let row_height = if self.controller.ui.controls.compact_rows {
            36.0
        } else {
            56.0
        };
        let is_selected = self.controller.ui.selected.as_ref() == Some(&item.id);
        let dragged_id = self
            .controller
            .ui
            .drag
            .payload
            .as_ref()
            .map(|drag| drag.item.id.clone());

        ui.push_id(&item.id, |ui| {
            ui.horizontal(|ui| {
                let delete = ui.add_sized(
                    egui::vec2(DELETE_COLUMN_WIDTH, row_height),
                    egui::Button::new(RichText::new("−").color(palette.text_muted)),
                );
                if delete.clicked() {
                    self.controller.delete_item(&item.id);
                    return;
                }

                let mut card = egui::Button::new(RichText::new(&item.name).size(14.0))
                    .sense(egui::Sense::click_and_drag())
                    .corner_radius(6.0)
                    .fill(palette.card_purple);
                if is_selected {
                    card = card.fill(palette.card_purple_hover);
                }
                let response =
                    ui.add_sized(egui::vec2(ui.available_width(), row_height), card);

                if is_selected {
                    let marker = egui::Rect::from_min_size(
                        response.rect.left_top(),
                        egui::vec2(3.0, row_height),
                    );
                    ui.painter()
                        .rect_filled(marker, 0.0, style::selection_marker_fill());
                }

                if response.clicked() {
                    self.controller.activate_item(&item.id);
                }
                if response.drag_started() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.controller.begin_card_drag(&item.id, pos);
                    }
                } else if drag_active && response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.controller.update_card_drag(pos, None);
                    }
                }

                if drag_active
                    && let Some(pointer) = pointer_pos
                    && response.rect.contains(pointer)
                {
                    self.controller.update_card_drag(
                        pointer,
                        Some(DropTarget::Card {
                            section: section.to_owned(),
                            item: item.id.clone(),
                        }),
                    );
                    if dragged_id.as_ref() != Some(&item.id) {
                        ui.painter().rect_stroke(
                            response.rect,
                            6.0,
                            style::drop_target_stroke(),
                            StrokeKind::Inside,
                        );
                    }
                }
            });
        });
        ui.add_space(4.0);
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.handle_keys(ctx);
        // Hover targets are frame-scoped; rows re-assert containment below.
        self.controller.ui.drag.clear_hover();

        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(style::palette().bg_primary)
                    .inner_margin(Margin::symmetric(14, 10)),
            )
            .show(ctx, |ui| {
                self.render_board(ui);
            });

        self.render_drag_overlay(ctx);
        ctx.request_repaint();
    }
}
