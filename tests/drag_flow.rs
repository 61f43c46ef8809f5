mod support;

use support::env::CardstackEnvGuard;

use cardstack::board::{DropTarget, Item, ItemId, SectionMap};
use cardstack::egui_app::controller::{BoardCallbacks, BoardController};
use egui::Pos2;
use std::cell::RefCell;
use std::rc::Rc;

fn item(id: &str) -> Item {
    Item::with_id(ItemId::from_string(id), format!("Item {id}"))
}

fn id(id: &str) -> ItemId {
    ItemId::from_string(id)
}

fn card(section: &str, item: &str) -> DropTarget {
    DropTarget::Card {
        section: section.to_owned(),
        item: id(item),
    }
}

fn demo_board() -> SectionMap {
    SectionMap::from_sections([
        ("Section 1", vec![item("1"), item("2"), item("3")]),
        ("Section 2", vec![item("4"), item("5"), item("6")]),
        ("Section 3", vec![item("7"), item("8"), item("9")]),
    ])
}

fn ids(controller: &BoardController, section: &str) -> Vec<String> {
    controller
        .board()
        .items(section)
        .expect("section exists")
        .iter()
        .map(|i| i.id.to_string())
        .collect()
}

#[test]
fn a_session_of_gestures_never_loses_a_card() {
    let mut controller = BoardController::new(demo_board());

    // Reorder within Section 1. After the live reorder the dragged card
    // sits under the pointer, so the final hover is the card itself.
    controller.begin_card_drag(&id("1"), Pos2::ZERO);
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 1", "3")));
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 1", "1")));
    controller.finish_card_drag();
    assert_eq!(ids(&controller, "Section 1"), ["2", "3", "1"]);

    // Carry a card across sections, hovering several targets on the way.
    controller.begin_card_drag(&id("5"), Pos2::ZERO);
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 2", "6")));
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 1", "2")));
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 1", "3")));
    controller.finish_card_drag();
    assert_eq!(
        controller.board().locate(&id("5")).map(|(s, _)| s),
        Some("Section 1")
    );

    // Empty out Section 3 by deletes, then repopulate via a header drop.
    for card_id in ["7", "8", "9"] {
        controller.delete_item(&id(card_id));
    }
    assert_eq!(controller.board().items("Section 3").unwrap().len(), 0);
    controller.begin_card_drag(&id("4"), Pos2::ZERO);
    controller.update_card_drag(Pos2::ZERO, Some(DropTarget::Section("Section 3".into())));
    controller.finish_card_drag();
    assert_eq!(ids(&controller, "Section 3"), ["4"]);

    // Nothing vanished along the way except the three explicit deletes.
    assert_eq!(controller.board().total_items(), 6);
    for card_id in ["1", "2", "3", "4", "5", "6"] {
        assert!(controller.board().contains_id(&id(card_id)));
    }
}

#[test]
fn drop_onto_a_foreign_card_lands_after_it() {
    // Sections {A:[1,2,3], B:[4,5]}: dragging 2 onto 5 and releasing there
    // leaves A:[1,3] and B:[4,5,2].
    let mut controller = BoardController::new(SectionMap::from_sections([
        ("A", vec![item("1"), item("2"), item("3")]),
        ("B", vec![item("4"), item("5")]),
    ]));
    controller.begin_card_drag(&id("2"), Pos2::ZERO);
    controller.update_card_drag(Pos2::new(0.0, 40.0), Some(card("B", "5")));
    controller.finish_card_drag();
    assert_eq!(ids(&controller, "A"), ["1", "3"]);
    assert_eq!(ids(&controller, "B"), ["4", "5", "2"]);
}

#[test]
fn taps_reach_the_host_through_the_whole_stack() {
    let taps: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&taps);
    let mut controller = BoardController::with_callbacks(
        demo_board(),
        BoardCallbacks::new().on_tap_item(move |id| sink.borrow_mut().push(id.to_string())),
    );

    controller.activate_item(&id("6"));
    controller.activate_item(&id("2"));
    // A deleted card no longer reports taps.
    controller.delete_item(&id("2"));
    controller.activate_item(&id("2"));
    assert_eq!(taps.borrow().as_slice(), ["6", "2"]);
}

#[test]
fn options_persist_across_controllers() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = CardstackEnvGuard::set_config_home(temp.path().to_path_buf());

    let mut first = BoardController::new(demo_board());
    first.load_configuration().expect("load defaults");
    assert!(!first.ui.controls.compact_rows);
    first.set_compact_rows(true);
    first.set_show_intro(false);

    let mut second = BoardController::new(demo_board());
    second.load_configuration().expect("load saved options");
    assert!(second.ui.controls.compact_rows);
    assert!(!second.ui.controls.show_intro);
}

#[test]
fn escape_mid_gesture_leaves_the_live_state_only() {
    let mut controller = BoardController::new(demo_board());
    controller.begin_card_drag(&id("9"), Pos2::ZERO);
    controller.update_card_drag(Pos2::ZERO, Some(card("Section 1", "1")));
    // The live pass already rehomed the card; cancel keeps that state but
    // must clear the gesture so the next drag starts clean.
    controller.cancel_card_drag();
    assert!(!controller.ui.drag.is_active());
    assert_eq!(
        controller.board().locate(&id("9")).map(|(s, _)| s),
        Some("Section 1")
    );
    assert_eq!(controller.board().total_items(), 9);
}
