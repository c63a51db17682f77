//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `notes`: Note CRUD and reminder input
//! - `todos`: Todo CRUD, filtering and stats
//! - `subscriptions`: Subscription CRUD and spending overview
//! - `expenses`: Expense CRUD, budget figures and the printable report
//! - `preferences`: Preference reads and writes
//! - `exchange`: Exchange rates and conversion
//! - `dashboard`: Home screen summaries

pub mod dashboard;
pub mod exchange;
pub mod expenses;
pub mod notes;
pub mod preferences;
pub mod subscriptions;
pub mod todos;

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

// Re-export all commands for convenient registration in main.rs
pub use dashboard::*;
pub use exchange::*;
pub use expenses::*;
pub use notes::*;
pub use preferences::*;
pub use subscriptions::*;
pub use todos::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}
