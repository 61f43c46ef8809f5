//! Drag gesture lifecycle.
//!
//! The renderer reports raw gesture events; this module turns them into
//! board mutations via the pure drop rules. Live feedback is applied once
//! per drop target entered, and the release commit runs through the same
//! rules, so hover and drop can never disagree about where a card lands.

use egui::Pos2;
use tracing::{debug, info};

use super::BoardController;
use crate::board::{DropOutcome, DropTarget, ItemId, apply_drop};
use crate::egui_app::ui::style::StatusTone;

impl BoardController {
    /// Begin dragging the card with the given id.
    ///
    /// Ids that are no longer on the board are ignored, which also covers a
    /// drag-start racing a delete of the same card.
    pub fn begin_card_drag(&mut self, id: &ItemId, pos: Pos2) {
        let Some((section, index)) = self.board.locate(id) else {
            debug!("Drag start ignored; {id} is not on the board");
            return;
        };
        let section = section.to_owned();
        let Some(item) = self.board.item(id).cloned() else {
            return;
        };
        debug!("Drag start: {id} from {section}");
        self.ui.drag.begin(item, section, index, pos);
    }

    /// Refresh the pointer position and, when the pointer is over a target,
    /// apply live drop feedback.
    ///
    /// Entering a target mutates the board immediately so the card is seen
    /// moving while still held; re-reports of the same target are free. When
    /// a live move rehomes the card, the drag payload's section is rewritten
    /// so every later drop is computed against the new location.
    pub fn update_card_drag(&mut self, pos: Pos2, target: Option<DropTarget>) {
        if !self.ui.drag.is_active() {
            return;
        }
        self.ui.drag.position = Some(pos);
        let Some(target) = target else {
            return;
        };
        self.ui.drag.hover_target = Some(target.clone());
        if !self.ui.drag.needs_apply(&target) {
            return;
        }
        let Some(drag) = self.ui.drag.payload.clone() else {
            return;
        };
        let outcome = apply_drop(&mut self.board, &drag.item.id, &drag.section, &target);
        debug!("Live drop onto {target:?}: {outcome:?}");
        if let DropOutcome::Moved { to, .. } = &outcome
            && let Some(payload) = self.ui.drag.payload.as_mut()
        {
            payload.section = to.clone();
        }
        self.ui.drag.mark_applied(target);
    }

    /// Commit the drop against the last hovered target and clear the drag.
    ///
    /// The commit reuses the live rule set; because the live phase already
    /// moved the card under the pointer, the common release resolves as a
    /// self-drop no-op and the board keeps its last hover state.
    pub fn finish_card_drag(&mut self) {
        let Some(drag) = self.ui.drag.payload.clone() else {
            self.ui.drag.clear();
            return;
        };
        let target = self.ui.drag.hover_target.clone();
        self.ui.drag.clear();

        if let Some(target) = &target {
            let outcome = apply_drop(&mut self.board, &drag.item.id, &drag.section, target);
            debug!("Release onto {target:?}: {outcome:?}");
        } else {
            debug!("Release over no target; board keeps its last hover state");
        }

        let final_home = self
            .board
            .locate(&drag.item.id)
            .map(|(section, index)| (section.to_owned(), index));
        match final_home {
            Some((home, _)) if home != drag.origin_section => {
                info!(
                    "Drop complete: {} moved {} -> {home}",
                    drag.item.id, drag.origin_section
                );
                self.set_status(
                    format!("Moved {} to {home}", drag.item.name),
                    StatusTone::Info,
                );
            }
            Some((_, index)) if index != drag.origin_index => {
                info!(
                    "Drop complete: {} reordered in {}",
                    drag.item.id, drag.origin_section
                );
                self.set_status(
                    format!("Reordered {}", drag.origin_section),
                    StatusTone::Info,
                );
            }
            Some(_) => {}
            None => {
                // The card was deleted mid-gesture; the release degrades to
                // a no-op and the drag state is already gone.
                debug!("Drop complete: {} vanished mid-drag", drag.item.id);
            }
        }
    }

    /// Abandon the gesture without a commit (Escape, or a missed release).
    pub fn cancel_card_drag(&mut self) {
        if self.ui.drag.is_active() {
            debug!("Drag cancelled");
        }
        self.ui.drag.clear();
    }
}
