//! Preference commands

use crate::app::AppState;
use crate::error::Result;
use crate::models::{Preferences, ResolvedPreferences};
use tauri::State;

/// Preferences as stored, partial fields included
#[tauri::command]
pub async fn get_preferences(state: State<'_, AppState>) -> Result<Preferences> {
    Ok(state.preferences_service.load().await)
}

/// Preferences with every gap filled by the defaults
#[tauri::command]
pub async fn get_resolved_preferences(state: State<'_, AppState>) -> Result<ResolvedPreferences> {
    Ok(state.preferences_service.resolved().await)
}

/// Replace the stored preferences wholesale
#[tauri::command]
pub async fn update_preferences(
    state: State<'_, AppState>,
    preferences: Preferences,
) -> Result<Preferences> {
    Ok(state.preferences_service.update(preferences).await)
}

/// Set the monthly budget from raw input; non-numeric input unsets it
#[tauri::command]
pub async fn set_monthly_budget(state: State<'_, AppState>, input: String) -> Result<Preferences> {
    Ok(state.preferences_service.set_monthly_budget(&input).await)
}

/// Set the display currency symbol
#[tauri::command]
pub async fn set_currency(state: State<'_, AppState>, symbol: String) -> Result<Preferences> {
    Ok(state.preferences_service.set_currency(symbol).await)
}
