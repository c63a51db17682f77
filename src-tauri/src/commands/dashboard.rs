//! Dashboard commands

use crate::app::AppState;
use crate::error::Result;
use crate::services::dashboard::{DashboardSummary, UpcomingReminder};
use tauri::State;

/// Headline counts for the home screen
#[tauri::command]
pub async fn dashboard_summary(state: State<'_, AppState>) -> Result<DashboardSummary> {
    Ok(state.dashboard_service.summary().await)
}

/// The upcoming reminders strip
#[tauri::command]
pub async fn upcoming_reminders(state: State<'_, AppState>) -> Result<Vec<UpcomingReminder>> {
    Ok(state.dashboard_service.upcoming().await)
}
