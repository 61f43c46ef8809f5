//! Bridges gestures and host callbacks to the board model.

use tracing::{debug, info, warn};

use crate::board::config::{self, AppConfig, ConfigError};
use crate::board::{Item, ItemId, SectionMap};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;

mod drag_drop;

/// Host-injected callbacks.
///
/// `on_tap_item` fires when a card (not its delete control) is activated.
/// `make_item` constructs the item appended by the per-section add control;
/// without it the controller falls back to a generated id.
#[derive(Default)]
pub struct BoardCallbacks {
    on_tap_item: Option<Box<dyn FnMut(&ItemId)>>,
    make_item: Option<Box<dyn FnMut(&str) -> Item>>,
}

impl BoardCallbacks {
    /// Callbacks that do nothing beyond the controller defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke `callback` with the item id whenever a card is activated.
    pub fn on_tap_item(mut self, callback: impl FnMut(&ItemId) + 'static) -> Self {
        self.on_tap_item = Some(Box::new(callback));
        self
    }

    /// Build the item added by a section's add control.
    pub fn make_item(mut self, callback: impl FnMut(&str) -> Item + 'static) -> Self {
        self.make_item = Some(Box::new(callback));
        self
    }
}

/// Owns the board and UI state; every gesture and host callback funnels
/// through here.
pub struct BoardController {
    pub ui: UiState,
    board: SectionMap,
    callbacks: BoardCallbacks,
}

impl BoardController {
    /// Create a controller over a host-seeded board.
    pub fn new(board: SectionMap) -> Self {
        Self::with_callbacks(board, BoardCallbacks::new())
    }

    /// Create a controller with host callbacks attached.
    pub fn with_callbacks(board: SectionMap, callbacks: BoardCallbacks) -> Self {
        Self {
            ui: UiState::default(),
            board,
            callbacks,
        }
    }

    /// Load persisted options and apply them to the UI state.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let cfg = config::load_or_default()?;
        self.ui.controls = cfg.controls;
        Ok(())
    }

    /// Read view of the board, for rendering and host observation.
    pub fn board(&self) -> &SectionMap {
        &self.board
    }

    /// Host-side mutation escape hatch (seeding, reacting to changes).
    pub fn board_mut(&mut self) -> &mut SectionMap {
        &mut self.board
    }

    /// Select a card and notify the host.
    pub fn activate_item(&mut self, id: &ItemId) {
        let Some(item) = self.board.item(id) else {
            debug!("Activate ignored; {id} is not on the board");
            return;
        };
        let name = item.name.clone();
        self.ui.selected = Some(id.clone());
        if let Some(callback) = self.callbacks.on_tap_item.as_mut() {
            callback(id);
        }
        debug!("Activated {id} ({name})");
        self.set_status(format!("Selected {name}"), StatusTone::Info);
    }

    /// Append a new item to the named section.
    pub fn add_item(&mut self, section: &str) {
        if !self.board.contains_section(section) {
            warn!("Add ignored; no section named {section}");
            self.set_status(format!("No section named {section}"), StatusTone::Warning);
            return;
        }
        let item = match self.callbacks.make_item.as_mut() {
            Some(callback) => callback(section),
            None => Item::new("New Item"),
        };
        let id = item.id.clone();
        let name = item.name.clone();
        if self.board.push_item(section, item) {
            info!("Added {id} ({name}) to {section}");
            self.set_status(format!("Added {name} to {section}"), StatusTone::Info);
        } else {
            warn!("Add rejected; id {id} already on the board");
            self.set_status("Item id already on the board", StatusTone::Warning);
        }
    }

    /// Delete the card with the given id, wherever it lives. Deleting an
    /// absent id is a no-op.
    pub fn delete_item(&mut self, id: &ItemId) {
        let Some(item) = self.board.remove_item(id) else {
            debug!("Delete ignored; {id} is not on the board");
            return;
        };
        if self.ui.selected.as_ref() == Some(id) {
            self.ui.selected = None;
        }
        info!("Deleted {id} ({})", item.name);
        self.set_status(format!("Deleted {}", item.name), StatusTone::Info);
    }

    /// Move the selection up or down within its section.
    pub fn nudge_selection(&mut self, delta: i32) {
        let Some(selected) = self.ui.selected.clone() else {
            return;
        };
        let Some((section, index)) = self.board.locate(&selected) else {
            self.ui.selected = None;
            return;
        };
        let items = self.board.items(section).unwrap_or_default();
        let target = index.saturating_add_signed(delta as isize).min(items.len() - 1);
        if let Some(item) = items.get(target) {
            self.ui.selected = Some(item.id.clone());
        }
    }

    /// Persist the current options, toggled from the top bar.
    pub fn set_compact_rows(&mut self, compact: bool) {
        self.ui.controls.compact_rows = compact;
        self.persist_options();
    }

    /// Persist the intro-text toggle.
    pub fn set_show_intro(&mut self, show: bool) {
        self.ui.controls.show_intro = show;
        self.persist_options();
    }

    fn persist_options(&mut self) {
        let cfg = AppConfig {
            controls: self.ui.controls.clone(),
        };
        if let Err(err) = config::save(&cfg) {
            warn!("Failed to save config: {err}");
            self.set_status(format!("Failed to save options: {err}"), StatusTone::Warning);
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = crate::egui_app::ui::style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}
