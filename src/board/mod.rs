use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod config;
pub mod drop;
pub mod sections;

pub use drop::{DropOutcome, DropTarget, apply_drop};
pub use sections::SectionMap;

/// Identifier for a single card on the board.
///
/// Stable for the lifetime of the item; unique across the whole board, not
/// just within one section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new unique item identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rehydrate an item identifier from a caller-supplied string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single draggable card: stable identity plus a display name.
///
/// The name may change independently of the id; nothing in the drop rules
/// ever looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
        }
    }

    /// Create an item with a caller-supplied id (e.g. a host-side counter).
    pub fn with_id(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn rehydrated_id_round_trips() {
        let id = ItemId::from_string("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }
}
