//! Pure drop rules for the board.
//!
//! Everything a drag gesture can do to a [`SectionMap`] funnels through
//! [`apply_drop`]: live drag-over feedback and the final commit on release
//! use the same rule set, so the two can never disagree. No UI types appear
//! here; the egui layer is a thin adapter on top.

use super::{ItemId, SectionMap};

/// What a dragged card is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Another card: reorder within a section, or splice into a foreign one.
    Card { section: String, item: ItemId },
    /// A section header/background: the way a card enters an empty section.
    Section(String),
}

/// Result of applying a drop, reported so callers can update drag state and
/// surface feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card changed position inside its own section.
    Reordered { section: String },
    /// The card left `from` and now lives in `to`.
    Moved { from: String, to: String },
    /// Nothing happened: self-drop, same-section header drop, or a stale
    /// reference that could not be resolved.
    Ignored,
}

/// Apply one drop of `drag_item` (currently homed in `drag_section`) onto
/// `target`, mutating `map` in place.
///
/// Unresolvable references (the dragged id vanished, the target section or
/// card is gone) leave the map untouched and return
/// [`DropOutcome::Ignored`]; callers clear their transient drag state
/// regardless, so a stale gesture can never wedge the UI.
pub fn apply_drop(
    map: &mut SectionMap,
    drag_item: &ItemId,
    drag_section: &str,
    target: &DropTarget,
) -> DropOutcome {
    match target {
        DropTarget::Card {
            section: drop_section,
            item: drop_item,
        } => apply_card_drop(map, drag_item, drag_section, drop_section, drop_item),
        DropTarget::Section(drop_section) => {
            apply_section_drop(map, drag_item, drag_section, drop_section)
        }
    }
}

/// Drop onto another card.
///
/// Same section: shift/insert reorder; the card lands immediately after the
/// target when moving forward, immediately before it when moving backward.
/// Different section: splice in at the target card's index.
fn apply_card_drop(
    map: &mut SectionMap,
    drag_item: &ItemId,
    drag_section: &str,
    drop_section: &str,
    drop_item: &ItemId,
) -> DropOutcome {
    if drag_item == drop_item {
        return DropOutcome::Ignored;
    }
    let Some(drag_index) = map.index_of(drag_section, drag_item) else {
        return DropOutcome::Ignored;
    };
    let Some(drop_index) = map.index_of(drop_section, drop_item) else {
        return DropOutcome::Ignored;
    };

    if drag_section == drop_section {
        let Some(item) = map.remove_at(drag_section, drag_index) else {
            return DropOutcome::Ignored;
        };
        // Inserting at the target's pre-removal index lands after it when
        // coming from above and before it when coming from below.
        map.insert_at(drag_section, drop_index, item);
        DropOutcome::Reordered {
            section: drag_section.to_owned(),
        }
    } else {
        let Some(item) = map.remove_at(drag_section, drag_index) else {
            return DropOutcome::Ignored;
        };
        map.insert_at(drop_section, drop_index, item);
        DropOutcome::Moved {
            from: drag_section.to_owned(),
            to: drop_section.to_owned(),
        }
    }
}

/// Drop onto a section header/background: prepend to a foreign section,
/// no-op on the card's own section.
fn apply_section_drop(
    map: &mut SectionMap,
    drag_item: &ItemId,
    drag_section: &str,
    drop_section: &str,
) -> DropOutcome {
    if drag_section == drop_section || !map.contains_section(drop_section) {
        return DropOutcome::Ignored;
    }
    let Some(drag_index) = map.index_of(drag_section, drag_item) else {
        return DropOutcome::Ignored;
    };
    let Some(item) = map.remove_at(drag_section, drag_index) else {
        return DropOutcome::Ignored;
    };
    map.insert_at(drop_section, 0, item);
    DropOutcome::Moved {
        from: drag_section.to_owned(),
        to: drop_section.to_owned(),
    }
}
