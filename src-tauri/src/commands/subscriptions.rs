//! Subscription-related commands

use crate::app::AppState;
use crate::error::Result;
use crate::models::Subscription;
use crate::services::subscriptions::{SubscriptionDraft, SubscriptionOverview};
use tauri::State;

/// List all subscriptions, newest first
#[tauri::command]
pub async fn list_subscriptions(state: State<'_, AppState>) -> Result<Vec<Subscription>> {
    Ok(state.subscriptions_service.list().await)
}

/// Per-cycle spending totals for the subscriptions screen header
#[tauri::command]
pub async fn subscription_overview(state: State<'_, AppState>) -> Result<SubscriptionOverview> {
    Ok(state.subscriptions_service.overview().await)
}

/// Create or update a subscription from editor state
#[tauri::command]
pub async fn save_subscription(
    state: State<'_, AppState>,
    draft: SubscriptionDraft,
) -> Result<Subscription> {
    state.subscriptions_service.save(draft).await
}

/// Delete a subscription and cancel its renewal reminder
#[tauri::command]
pub async fn delete_subscription(state: State<'_, AppState>, id: String) -> Result<()> {
    state.subscriptions_service.delete(&id).await
}
