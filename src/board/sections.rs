//! The board model: named sections, each holding an ordered run of items.

use std::collections::BTreeMap;

use super::{Item, ItemId};

/// Ordered-by-name mapping from section name to its ordered items.
///
/// Invariant: an item id appears in at most one section, never twice. The
/// mutating methods uphold this; [`SectionMap::push_item`] refuses
/// duplicates rather than silently cloning a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<String, Vec<Item>>,
}

impl SectionMap {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from seed data, keeping the first occurrence of any
    /// duplicated item id.
    pub fn from_sections<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Item>)>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (name, items) in seed {
            let name = name.into();
            map.insert_section(&name);
            for item in items {
                map.push_item(&name, item);
            }
        }
        map
    }

    /// Add an empty section. Returns false if the name is already taken.
    pub fn insert_section(&mut self, name: &str) -> bool {
        if self.sections.contains_key(name) {
            return false;
        }
        self.sections.insert(name.to_owned(), Vec::new());
        true
    }

    /// True when a section with this name exists.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterate sections in display order (sorted by name).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.sections
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Section names in display order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// The items of one section, in order.
    pub fn items(&self, section: &str) -> Option<&[Item]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items across all sections.
    pub fn total_items(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// True when any section holds an item with this id.
    pub fn contains_id(&self, id: &ItemId) -> bool {
        self.locate(id).is_some()
    }

    /// Find the section and index holding the given id.
    pub fn locate(&self, id: &ItemId) -> Option<(&str, usize)> {
        self.sections.iter().find_map(|(name, items)| {
            items
                .iter()
                .position(|item| &item.id == id)
                .map(|index| (name.as_str(), index))
        })
    }

    /// Index of an id within one specific section.
    pub fn index_of(&self, section: &str, id: &ItemId) -> Option<usize> {
        self.sections
            .get(section)?
            .iter()
            .position(|item| &item.id == id)
    }

    /// Look up an item by id anywhere on the board.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        let (section, index) = self.locate(id)?;
        self.sections.get(section)?.get(index)
    }

    /// Append an item to the end of the named section.
    ///
    /// Returns false without mutating when the section does not exist or the
    /// id is already present somewhere on the board.
    pub fn push_item(&mut self, section: &str, item: Item) -> bool {
        if self.contains_id(&item.id) {
            return false;
        }
        match self.sections.get_mut(section) {
            Some(items) => {
                items.push(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given id, wherever it lives.
    ///
    /// Returns the removed item, or `None` when the id is not on the board
    /// (deleting an absent id is a no-op).
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let (section, index) = {
            let (name, index) = self.locate(id)?;
            (name.to_owned(), index)
        };
        Some(self.sections.get_mut(&section)?.remove(index))
    }

    pub(crate) fn remove_at(&mut self, section: &str, index: usize) -> Option<Item> {
        let items = self.sections.get_mut(section)?;
        if index >= items.len() {
            return None;
        }
        Some(items.remove(index))
    }

    pub(crate) fn insert_at(&mut self, section: &str, index: usize, item: Item) -> bool {
        match self.sections.get_mut(section) {
            Some(items) => {
                items.insert(index.min(items.len()), item);
                true
            }
            None => false,
        }
    }
}
