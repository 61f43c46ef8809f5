//! Shared state types for the egui UI.

use crate::board::config::InteractionOptions;
use crate::board::{DropTarget, Item, ItemId};
use crate::egui_app::ui::style;
use egui::{Color32, Pos2};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub drag: DragState,
    /// Card highlighted by the last click; anchor for keyboard navigation.
    pub selected: Option<ItemId>,
    /// Interaction and presentation options loaded from config.
    pub controls: InteractionOptions,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            drag: DragState::default(),
            selected: None,
            controls: InteractionOptions::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        let (badge_label, badge_color) = style::status_badge(style::StatusTone::Idle);
        Self {
            text: "Drag cards to reorder or move them between sections".into(),
            badge_label,
            badge_color,
        }
    }
}

/// The card currently being dragged and the section it is homed in.
///
/// `section` is rewritten whenever a live drag-over moves the card, so later
/// drops are computed against its current home; the origin fields keep the
/// pre-gesture position for end-of-gesture feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDrag {
    pub item: Item,
    pub section: String,
    pub origin_section: String,
    pub origin_index: usize,
}

/// Transient drag gesture state. Exists only between drag-start and
/// drop/cancel; everything here is cleared in one shot by [`DragState::clear`].
#[derive(Clone, Debug, Default)]
pub struct DragState {
    pub payload: Option<CardDrag>,
    /// Text shown on the floating preview under the pointer.
    pub label: String,
    pub position: Option<Pos2>,
    /// Target under the pointer this frame; recomputed every frame and used
    /// for highlights and the final commit.
    pub hover_target: Option<DropTarget>,
    /// Last target whose entry already mutated the board. Live feedback is
    /// applied once per target entered, not once per frame.
    applied_target: Option<DropTarget>,
}

impl DragState {
    /// True while a card is mid-gesture.
    pub fn is_active(&self) -> bool {
        self.payload.is_some()
    }

    /// Record the start of a drag gesture.
    pub fn begin(&mut self, item: Item, section: String, index: usize, pos: Pos2) {
        self.label = item.name.clone();
        self.payload = Some(CardDrag {
            item,
            origin_section: section.clone(),
            origin_index: index,
            section,
        });
        self.position = Some(pos);
        self.hover_target = None;
        self.applied_target = None;
    }

    /// Drop all transient gesture state.
    pub fn clear(&mut self) {
        self.payload = None;
        self.label.clear();
        self.position = None;
        self.hover_target = None;
        self.applied_target = None;
    }

    /// Forget the per-frame hover target; rows re-assert containment while
    /// they render.
    pub fn clear_hover(&mut self) {
        self.hover_target = None;
    }

    /// True when entering `target` should apply live feedback.
    pub fn needs_apply(&self, target: &DropTarget) -> bool {
        self.applied_target.as_ref() != Some(target)
    }

    /// Remember that `target`'s entry already mutated the board.
    pub fn mark_applied(&mut self, target: DropTarget) {
        self.applied_target = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: &str) -> DropTarget {
        DropTarget::Card {
            section: "A".into(),
            item: ItemId::from_string(id),
        }
    }

    #[test]
    fn begin_then_clear_round_trips() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());
        drag.begin(Item::new("Item 1"), "A".into(), 0, Pos2::new(4.0, 2.0));
        assert!(drag.is_active());
        assert_eq!(drag.label, "Item 1");
        drag.clear();
        assert!(!drag.is_active());
        assert!(drag.label.is_empty());
        assert!(drag.position.is_none());
    }

    #[test]
    fn apply_tracking_fires_once_per_target() {
        let mut drag = DragState::default();
        drag.begin(Item::new("Item 1"), "A".into(), 0, Pos2::ZERO);
        assert!(drag.needs_apply(&target("2")));
        drag.mark_applied(target("2"));
        assert!(!drag.needs_apply(&target("2")));
        assert!(drag.needs_apply(&target("3")));
    }
}
