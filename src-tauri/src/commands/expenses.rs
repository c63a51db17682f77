//! Expense-related commands

use crate::app::AppState;
use crate::error::Result;
use crate::models::Expense;
use crate::services::expenses::{CategoryTotal, ExpenseDraft, ExpenseReport};
use tauri::State;

/// List all expenses, newest first
#[tauri::command]
pub async fn list_expenses(state: State<'_, AppState>) -> Result<Vec<Expense>> {
    Ok(state.expenses_service.list().await)
}

/// Total spent this month
#[tauri::command]
pub async fn expense_total(state: State<'_, AppState>) -> Result<f64> {
    Ok(state.expenses_service.total().await)
}

/// Per-category totals in first-encountered order
#[tauri::command]
pub async fn expense_breakdown(state: State<'_, AppState>) -> Result<Vec<CategoryTotal>> {
    Ok(state.expenses_service.breakdown().await)
}

/// Pre-formatted rows and totals for the printable report
#[tauri::command]
pub async fn expense_report(state: State<'_, AppState>) -> Result<ExpenseReport> {
    Ok(state.expenses_service.report().await)
}

/// Create or update an expense from editor state
#[tauri::command]
pub async fn save_expense(state: State<'_, AppState>, draft: ExpenseDraft) -> Result<Expense> {
    state.expenses_service.save(draft).await
}

/// Delete an expense
#[tauri::command]
pub async fn delete_expense(state: State<'_, AppState>, id: String) -> Result<()> {
    state.expenses_service.delete(&id).await
}
