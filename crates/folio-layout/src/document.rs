//! The layout document
//!
//! # Invariants
//! - entry ids are unique
//! - a type without `multi_instance_allowed` is placed at most once (checked on insert)
//! - sequence order is the only ordering; positions are derived
//!
//! Every operation that cannot apply is a silent no-op reported through its
//! return value, never an error.

use crate::entry::{EntryId, LayoutEntry, MoveDirection};
use crate::record::PersistedSection;
use folio_section::{Content, PlacedSections, SectionRegistry};
use serde_json::Value;

/// Outcome of [`LayoutDocument::insert_at_end`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Entry appended with this id
    Inserted(EntryId),
    /// Type is not registered
    UnknownType,
    /// Type is already placed and does not allow multiple instances
    AlreadyPresent,
    /// Refused by a caller-imposed entry limit
    LimitReached,
}

impl Insertion {
    /// Id of the new entry, if one was appended
    #[inline]
    #[must_use]
    pub fn entry_id(self) -> Option<EntryId> {
        match self {
            Self::Inserted(id) => Some(id),
            _ => None,
        }
    }

    /// Check if an entry was appended
    #[inline]
    #[must_use]
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// Ordered page composition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutDocument {
    entries: Vec<LayoutEntry>,
}

impl LayoutDocument {
    /// Create empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a document from persisted records, in the order received
    ///
    /// Entries get fresh ids. Records are kept even when their type is no
    /// longer registered, so re-registering it later restores them.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = PersistedSection>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| LayoutEntry::new(record.section_type_id, record.content))
            .collect();
        Self { entries }
    }

    /// Serialize to persisted records with dense 0-based `sort_order`
    ///
    /// Independent of registry state: dangling entries are written as-is.
    #[must_use]
    pub fn to_records(&self) -> Vec<PersistedSection> {
        self.entries
            .iter()
            .zip(0u32..)
            .map(|(entry, sort_order)| {
                PersistedSection::new(entry.section_type_id(), sort_order, entry.content.clone())
            })
            .collect()
    }

    /// Entries in page order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Iterate over entries in page order
    pub fn iter(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if document is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find entry by id
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&LayoutEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Current position of an entry
    #[must_use]
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Entries whose type is not registered
    #[must_use]
    pub fn dangling_entries<'a>(&'a self, registry: &SectionRegistry) -> Vec<&'a LayoutEntry> {
        self.entries
            .iter()
            .filter(|entry| !registry.contains(entry.section_type_id()))
            .collect()
    }

    /// Append a new instance of `type_id`
    ///
    /// Refused for unknown types and for already-placed single-instance types.
    /// The new entry owns a deep copy of the descriptor's default content.
    pub fn insert_at_end(&mut self, registry: &SectionRegistry, type_id: &str) -> Insertion {
        let Some(descriptor) = registry.descriptor_of(type_id) else {
            tracing::debug!(type_id, "insert refused: unknown section type");
            return Insertion::UnknownType;
        };

        if !descriptor.multi_instance_allowed() && self.contains_type(type_id) {
            tracing::debug!(type_id, "insert refused: section type already placed");
            return Insertion::AlreadyPresent;
        }

        let entry = LayoutEntry::new(type_id, descriptor.instantiate_content());
        let id = entry.id();
        self.entries.push(entry);

        tracing::debug!(type_id, %id, position = self.entries.len() - 1, "section inserted");
        Insertion::Inserted(id)
    }

    /// Remove an entry; absent ids are ignored
    pub fn remove(&mut self, id: EntryId) -> Option<LayoutEntry> {
        let index = self.position_of(id)?;
        Some(self.entries.remove(index))
    }

    /// Whether [`LayoutDocument::move_entry`] would move this entry
    #[must_use]
    pub fn can_move(&self, id: EntryId, direction: MoveDirection) -> bool {
        self.position_of(id)
            .and_then(|index| self.neighbour(index, direction))
            .is_some()
    }

    /// Swap an entry with its neighbour in `direction`
    ///
    /// Returns `false` without touching the document at either boundary or
    /// when the id is absent.
    pub fn move_entry(&mut self, id: EntryId, direction: MoveDirection) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        let Some(target) = self.neighbour(index, direction) else {
            return false;
        };

        self.entries.swap(index, target);
        true
    }

    /// Merge one field into an editable entry's content
    ///
    /// No-op for absent entries and for non-editable or dangling types.
    pub fn update_content(
        &mut self,
        registry: &SectionRegistry,
        id: EntryId,
        field: &str,
        value: Value,
    ) -> bool {
        match self.editable_entry_mut(registry, id) {
            Some(entry) => {
                entry.content.insert(field.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Replace an editable entry's whole content record
    ///
    /// Same no-op rules as [`LayoutDocument::update_content`].
    pub fn set_content(&mut self, registry: &SectionRegistry, id: EntryId, content: Content) -> bool {
        match self.editable_entry_mut(registry, id) {
            Some(entry) => {
                entry.content = content;
                true
            }
            None => false,
        }
    }

    fn editable_entry_mut(
        &mut self,
        registry: &SectionRegistry,
        id: EntryId,
    ) -> Option<&mut LayoutEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .filter(|entry| entry.is_editable(registry))
    }

    fn neighbour(&self, index: usize, direction: MoveDirection) -> Option<usize> {
        match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&next| next < self.entries.len()),
        }
    }
}

impl PlacedSections for LayoutDocument {
    fn contains_type(&self, type_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.section_type_id() == type_id)
    }
}
