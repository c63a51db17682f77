//! Todo-related commands

use crate::app::AppState;
use crate::error::Result;
use crate::models::Todo;
use crate::services::todos::{TodoDraft, TodoFilter, TodoStats};
use tauri::State;

/// List todos filtered and sorted for display
#[tauri::command]
pub async fn list_todos(state: State<'_, AppState>, filter: Option<TodoFilter>) -> Result<Vec<Todo>> {
    Ok(state.todos_service.list(filter.unwrap_or_default()).await)
}

/// Counts shown on the todos screen header
#[tauri::command]
pub async fn todo_stats(state: State<'_, AppState>) -> Result<TodoStats> {
    Ok(state.todos_service.stats().await)
}

/// Create or update a todo from editor state
#[tauri::command]
pub async fn save_todo(state: State<'_, AppState>, draft: TodoDraft) -> Result<Todo> {
    state.todos_service.save(draft).await
}

/// Flip a todo between active and completed
#[tauri::command]
pub async fn toggle_todo(state: State<'_, AppState>, id: String) -> Result<Todo> {
    state.todos_service.toggle(&id).await
}

/// Delete a todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: String) -> Result<()> {
    state.todos_service.delete(&id).await
}
