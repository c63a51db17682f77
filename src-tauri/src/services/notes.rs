//! Notes service
//!
//! Upsert and delete over the notes collection, preview derivation and
//! reminder rescheduling on every save.

use crate::config;
use crate::error::{AppError, Result};
use crate::models::{mint_id, Note};
use crate::services::{parse_datetime_input, PreferencesService, ReminderFacade};
use crate::storage::CollectionStore;
use serde::Deserialize;

/// Raw editor state for a note save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    /// Reminder as typed, e.g. `2026-09-01 08:30`; empty clears it.
    #[serde(default)]
    pub reminder_input: String,
}

/// Derive the list preview: the content truncated, or the title when
/// the content is empty.
pub fn derive_preview(title: &str, content: &str) -> String {
    if content.is_empty() {
        title.to_string()
    } else {
        content.chars().take(config::NOTE_PREVIEW_MAX_CHARS).collect()
    }
}

/// Service for managing notes
#[derive(Clone)]
pub struct NotesService {
    store: CollectionStore<Vec<Note>>,
    preferences: PreferencesService,
    reminders: ReminderFacade,
}

impl NotesService {
    pub fn new(
        store: CollectionStore<Vec<Note>>,
        preferences: PreferencesService,
        reminders: ReminderFacade,
    ) -> Self {
        Self {
            store,
            preferences,
            reminders,
        }
    }

    /// List all notes in display order
    pub async fn list(&self) -> Vec<Note> {
        self.store.load_or_default().await
    }

    /// Create or update a note from editor state.
    ///
    /// Normalizes the input, re-derives the preview, reschedules the
    /// reminder and rewrites the whole collection.
    pub async fn save(&self, draft: NoteDraft) -> Result<Note> {
        let title = {
            let trimmed = draft.title.trim();
            if trimmed.is_empty() {
                config::UNTITLED_NOTE.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let content = draft.content.trim().to_string();
        let reminder_timestamp = parse_datetime_input(&draft.reminder_input);
        let preview = derive_preview(&title, &content);

        let mut notes = self.store.load_or_default().await;

        let mut note = match draft.id {
            Some(id) => {
                let existing = notes
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("note {id}")))?;
                existing.title = title;
                existing.preview = preview;
                existing.content = Some(content);
                existing.image_uri = draft.image_uri;
                existing.reminder_timestamp = reminder_timestamp;
                existing.clone()
            }
            None => {
                let note = Note {
                    id: mint_id(),
                    title,
                    preview,
                    content: Some(content),
                    image_uri: draft.image_uri,
                    reminder_timestamp,
                    notification_id: None,
                };
                notes.insert(0, note.clone());
                tracing::info!("Created note {}", note.id);
                note
            }
        };

        let prefs = self.preferences.resolved().await;
        note.notification_id = self.reminders.reschedule_note(&note, &prefs);
        if let Some(stored) = notes.iter_mut().find(|n| n.id == note.id) {
            stored.notification_id = note.notification_id.clone();
        }

        self.store.save(&notes).await;
        Ok(note)
    }

    /// Delete a note, cancelling its reminder before the record
    /// disappears from the saved collection.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut notes = self.store.load_or_default().await;

        if let Some(target) = notes.iter().find(|n| n.id == id) {
            self.reminders.cancel(target.notification_id.as_deref());
        }

        notes.retain(|n| n.id != id);
        self.store.save(&notes).await;

        tracing::info!("Deleted note {}", id);
        Ok(())
    }
}
