//! Exchange rate commands

use crate::app::AppState;
use crate::config::{self, CurrencyInfo};
use crate::error::Result;
use crate::models::RateMap;
use crate::services::exchange::ConversionResult;
use tauri::State;

/// Currencies offered by the conversion screen
#[tauri::command]
pub async fn list_currencies() -> Result<Vec<CurrencyInfo>> {
    Ok(config::CURRENCIES.to_vec())
}

/// Current rate table, seeded on first use
#[tauri::command]
pub async fn get_exchange_rates(state: State<'_, AppState>) -> Result<RateMap> {
    Ok(state.exchange_service.rates().await)
}

/// Pull fresh rates and persist them
#[tauri::command]
pub async fn refresh_exchange_rates(state: State<'_, AppState>) -> Result<RateMap> {
    Ok(state.exchange_service.refresh().await)
}

/// Convert an amount between two currencies
#[tauri::command]
pub async fn convert_currency(
    state: State<'_, AppState>,
    amount: f64,
    from: String,
    to: String,
) -> Result<ConversionResult> {
    Ok(state.exchange_service.convert(amount, &from, &to).await)
}
