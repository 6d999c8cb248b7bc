//! Layout editor
//!
//! Owns the live document and drives saves through a [`PersistenceGateway`].
//! Mutations are synchronous and infallible; a save is split into
//! [`LayoutEditor::begin_save`], [`PendingSave::submit`] and
//! [`LayoutEditor::finish_save`] so the document stays editable while the
//! gateway round trip is in flight.
//!
//! Every pending save holds a ticket of the session that started it. A
//! dropped save releases its ticket, and [`LayoutEditor::reload`] starts a
//! new session so answers for the discarded document are ignored.

use crate::config::EditorConfig;
use crate::error::{EditorError, GatewayError};
use crate::forms::{content_fields, FormField};
use crate::gateway::PersistenceGateway;
use crate::status::EditorStatus;
use chrono::{DateTime, Utc};
use folio_compose::{resolve, DataContext, ResolvedSection};
use folio_layout::{EntryId, Insertion, LayoutDocument, MoveDirection, PersistedSection};
use folio_section::{Content, RenderedSection, SectionRegistry};
use serde_json::Value;
use std::sync::Arc;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Number of records persisted
    pub entries: usize,
    /// Edit revision the saved snapshot was taken at
    pub revision: u64,
    /// Completion time
    pub saved_at: DateTime<Utc>,
}

/// Snapshot taken by [`LayoutEditor::begin_save`], not yet sent
#[must_use = "a pending save does nothing until submitted"]
pub struct PendingSave {
    gateway: Arc<dyn PersistenceGateway>,
    records: Vec<PersistedSection>,
    revision: u64,
    ticket: Arc<()>,
}

impl std::fmt::Debug for PendingSave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSave")
            .field("records", &self.records.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl PendingSave {
    /// Records about to be persisted
    #[inline]
    pub fn records(&self) -> &[PersistedSection] {
        &self.records
    }

    /// Send the snapshot to the gateway
    ///
    /// Exactly one `replace` call; failures are reported, never retried.
    pub async fn submit(self) -> SaveOutcome {
        let entries = self.records.len();
        let result = self.gateway.replace(self.records).await;
        SaveOutcome {
            revision: self.revision,
            entries,
            result,
            ticket: self.ticket,
        }
    }
}

/// Gateway answer for one [`PendingSave`]
#[derive(Debug)]
#[must_use = "hand the outcome back to LayoutEditor::finish_save"]
pub struct SaveOutcome {
    revision: u64,
    entries: usize,
    result: Result<(), GatewayError>,
    ticket: Arc<()>,
}

impl SaveOutcome {
    /// Check if the gateway accepted the snapshot
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Editing session over one page layout
pub struct LayoutEditor {
    registry: Arc<SectionRegistry>,
    gateway: Arc<dyn PersistenceGateway>,
    config: EditorConfig,
    document: LayoutDocument,
    status: EditorStatus,
    revision: u64,
    saved_revision: u64,
    last_saved_at: Option<DateTime<Utc>>,
    // One extra strong count per save in flight; replaced on reload.
    session: Arc<()>,
}

impl std::fmt::Debug for LayoutEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEditor")
            .field("entries", &self.document.len())
            .field("status", self.status())
            .field("saves_in_flight", &self.saves_in_flight())
            .field("revision", &self.revision)
            .field("saved_revision", &self.saved_revision)
            .finish_non_exhaustive()
    }
}

impl LayoutEditor {
    /// Load the persisted layout and start a session
    pub async fn open(
        registry: Arc<SectionRegistry>,
        gateway: Arc<dyn PersistenceGateway>,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        let records = gateway.load().await?;
        let document = LayoutDocument::from_records(records);

        let dangling = document.dangling_entries(&registry).len();
        tracing::info!(entries = document.len(), dangling, "layout loaded");

        Ok(Self::with_document(registry, gateway, config, document))
    }

    /// Start a session over an already built document
    #[must_use]
    pub fn with_document(
        registry: Arc<SectionRegistry>,
        gateway: Arc<dyn PersistenceGateway>,
        config: EditorConfig,
        document: LayoutDocument,
    ) -> Self {
        Self {
            registry,
            gateway,
            config,
            document,
            status: EditorStatus::Loaded,
            revision: 0,
            saved_revision: 0,
            last_saved_at: None,
            session: Arc::new(()),
        }
    }

    /// Live document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &LayoutDocument {
        &self.document
    }

    /// Registry the session edits against
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current status, `Saving` while any save of this session is in flight
    #[inline]
    #[must_use]
    pub fn status(&self) -> &EditorStatus {
        self.status.or_saving(self.saves_in_flight() > 0)
    }

    /// Saves begun in this session and neither finished nor dropped
    #[inline]
    #[must_use]
    pub fn saves_in_flight(&self) -> usize {
        Arc::strong_count(&self.session) - 1
    }

    /// Check if edits exist that no successful save has persisted
    #[inline]
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Completion time of the last successful save
    #[inline]
    #[must_use]
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    /// Types that may still be inserted, in registration order
    #[must_use]
    pub fn available_types(&self) -> Vec<&str> {
        self.registry.available_types(&self.document)
    }

    /// Append a new section of `type_id`
    pub fn insert_at_end(&mut self, type_id: &str) -> Insertion {
        if let Some(max) = self.config.max_entries {
            if self.document.len() >= max {
                tracing::warn!(type_id, max, "insert refused: entry limit reached");
                return Insertion::LimitReached;
            }
        }

        let outcome = self.document.insert_at_end(&self.registry, type_id);
        if outcome.is_inserted() {
            self.touch();
        } else {
            tracing::warn!(type_id, ?outcome, "insert refused");
        }
        outcome
    }

    /// Remove an entry; returns `false` when the id is absent
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.document.remove(id) {
            Some(entry) => {
                tracing::debug!(%id, type_id = entry.section_type_id(), "section removed");
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Whether [`LayoutEditor::move_entry`] would move this entry
    #[inline]
    #[must_use]
    pub fn can_move(&self, id: EntryId, direction: MoveDirection) -> bool {
        self.document.can_move(id, direction)
    }

    /// Swap an entry with its neighbour; `false` at the boundaries
    pub fn move_entry(&mut self, id: EntryId, direction: MoveDirection) -> bool {
        let moved = self.document.move_entry(id, direction);
        if moved {
            tracing::debug!(%id, %direction, "section moved");
            self.touch();
        }
        moved
    }

    /// Merge one field into an editable entry's content
    pub fn update_content(&mut self, id: EntryId, field: &str, value: Value) -> bool {
        let updated = self
            .document
            .update_content(&self.registry, id, field, value);
        if updated {
            tracing::debug!(%id, field, "content updated");
            self.touch();
        } else {
            tracing::warn!(%id, field, "content update ignored");
        }
        updated
    }

    /// Replace an editable entry's whole content record
    pub fn set_content(&mut self, id: EntryId, content: Content) -> bool {
        let updated = self.document.set_content(&self.registry, id, content);
        if updated {
            tracing::debug!(%id, "content replaced");
            self.touch();
        } else {
            tracing::warn!(%id, "content replacement ignored");
        }
        updated
    }

    /// Form fields for an editable entry, `None` otherwise
    #[must_use]
    pub fn content_fields(&self, id: EntryId) -> Option<Vec<FormField>> {
        self.document
            .get(id)
            .filter(|entry| entry.is_editable(&self.registry))
            .map(|entry| content_fields(entry.content()))
    }

    /// Resolve the live document exactly as the public page would
    #[must_use]
    pub fn preview<'a>(&'a self, context: &'a DataContext) -> Vec<ResolvedSection<'a>> {
        resolve(&self.registry, &self.document, context)
    }

    /// Render the live document
    #[must_use]
    pub fn render_preview(&self, context: &DataContext) -> Vec<RenderedSection> {
        self.preview(context)
            .iter()
            .map(ResolvedSection::render)
            .collect()
    }

    /// Snapshot the document; the status shows `Saving` until the returned
    /// save is finished or dropped
    pub fn begin_save(&mut self) -> PendingSave {
        PendingSave {
            gateway: Arc::clone(&self.gateway),
            records: self.document.to_records(),
            revision: self.revision,
            ticket: Arc::clone(&self.session),
        }
    }

    /// Apply the gateway's answer
    ///
    /// On success the settled status becomes `Saved`, or `Modified` when
    /// edits were made after the snapshot was taken. On failure it becomes
    /// `Failed` and the error is returned; the document is left as is. A
    /// failure is not recorded when a later snapshot has already been saved.
    ///
    /// Outcomes of saves begun before the last [`LayoutEditor::reload`] are
    /// returned as is and change nothing.
    pub fn finish_save(&mut self, outcome: SaveOutcome) -> Result<SaveReport, EditorError> {
        let SaveOutcome {
            revision,
            entries,
            result,
            ticket,
        } = outcome;
        let current = Arc::ptr_eq(&ticket, &self.session);
        drop(ticket);

        if !current {
            tracing::debug!(
                revision,
                ok = result.is_ok(),
                "ignoring save from a discarded session"
            );
            return result
                .map(|()| SaveReport {
                    entries,
                    revision,
                    saved_at: Utc::now(),
                })
                .map_err(Into::into);
        }

        match result {
            Ok(()) => {
                let saved_at = Utc::now();
                self.saved_revision = revision;
                self.last_saved_at = Some(saved_at);
                self.status = if self.has_unsaved_changes() {
                    EditorStatus::Modified
                } else {
                    EditorStatus::Saved
                };

                if self.config.log_saves {
                    tracing::info!(entries, revision, "layout saved");
                }

                Ok(SaveReport {
                    entries,
                    revision,
                    saved_at,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, revision, "layout save failed");
                if self.saved_revision <= revision {
                    self.status = EditorStatus::Failed(e.to_string());
                }
                Err(e.into())
            }
        }
    }

    /// Snapshot, persist and record the outcome in one call
    pub async fn save(&mut self) -> Result<SaveReport, EditorError> {
        let outcome = self.begin_save().submit().await;
        self.finish_save(outcome)
    }

    /// Replace the document with a freshly loaded one
    ///
    /// Unsaved edits are discarded. On failure the document is kept.
    pub async fn reload(&mut self) -> Result<(), EditorError> {
        let records = self.gateway.load().await?;
        self.document = LayoutDocument::from_records(records);
        self.status = EditorStatus::Loaded;
        self.revision += 1;
        self.saved_revision = self.revision;
        self.session = Arc::new(());

        tracing::info!(entries = self.document.len(), "layout reloaded");
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.status = EditorStatus::Modified;
    }
}
