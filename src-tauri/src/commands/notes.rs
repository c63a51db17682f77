//! Note-related commands

use crate::app::AppState;
use crate::error::Result;
use crate::models::Note;
use crate::services::notes::NoteDraft;
use tauri::State;

/// List all notes, newest first
#[tauri::command]
pub async fn list_notes(state: State<'_, AppState>) -> Result<Vec<Note>> {
    Ok(state.notes_service.list().await)
}

/// Create or update a note from editor state
#[tauri::command]
pub async fn save_note(state: State<'_, AppState>, draft: NoteDraft) -> Result<Note> {
    state.notes_service.save(draft).await
}

/// Delete a note and cancel its reminder
#[tauri::command]
pub async fn delete_note(state: State<'_, AppState>, id: String) -> Result<()> {
    state.notes_service.delete(&id).await
}
