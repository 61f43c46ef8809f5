#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Cardstack demo UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use cardstack::board::{Item, ItemId, SectionMap};
use cardstack::egui_app::controller::BoardCallbacks;
use cardstack::egui_app::ui::{BoardApp, MIN_VIEWPORT_SIZE};
use cardstack::logging;
use eframe::egui;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let board = seed_board();
    let callbacks = demo_callbacks();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(560.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Cardstack",
        native_options,
        Box::new(move |_cc| Ok(Box::new(BoardApp::new(board, callbacks)))),
    )?;
    Ok(())
}

/// Three sections of three cards each, the canonical demo layout.
fn seed_board() -> SectionMap {
    let section = |base: u32| {
        (base..base + 3)
            .map(|n| Item::with_id(ItemId::from_string(n.to_string()), format!("Item {n}")))
            .collect::<Vec<_>>()
    };
    SectionMap::from_sections([
        ("Section 1", section(1)),
        ("Section 2", section(4)),
        ("Section 3", section(7)),
    ])
}

/// Host callbacks: log taps, mint counter-based items for the add control.
fn demo_callbacks() -> BoardCallbacks {
    let mut next_id = 10u32;
    BoardCallbacks::new()
        .on_tap_item(|id| info!("Clicked item {id}"))
        .make_item(move |section| {
            let item = Item::with_id(
                ItemId::from_string(next_id.to_string()),
                format!("New Item {next_id}"),
            );
            info!("Minted item {next_id} for {section}");
            next_id += 1;
            item
        })
}
