//! Expenses service
//!
//! Upsert and delete over the expenses collection, the monthly totals
//! and category breakdown, and the printable report rows.

use crate::config;
use crate::error::{AppError, Result};
use crate::models::{mint_id, Expense, ResolvedPreferences};
use crate::services::{parse_amount_input, PreferencesService, ReminderFacade};
use crate::storage::CollectionStore;
use serde::{Deserialize, Serialize};

/// Raw editor state for an expense save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub id: Option<String>,
    pub label: String,
    /// Amount as typed; unparseable input records a zero expense.
    pub amount: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// One row of the printable expense report, pre-formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReportRow {
    pub label: String,
    pub category: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReport {
    pub rows: Vec<ExpenseReportRow>,
    pub total: String,
    pub budget: String,
    pub remaining: String,
}

pub fn expenses_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category totals in first-encountered order. Uncategorized
/// expenses fold into "Other".
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let category = if expense.category.is_empty() {
            "Other"
        } else {
            expense.category.as_str()
        };
        match totals.iter_mut().find(|t| t.category == category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: category.to_string(),
                total: expense.amount,
            }),
        }
    }

    totals
}

pub fn remaining_budget(total: f64, budget: f64) -> f64 {
    budget - total
}

/// Headline under the budget figure, `"250 left"` or `"120 over"`.
pub fn remaining_label(total: f64, budget: f64) -> String {
    let remaining = remaining_budget(total, budget);
    if remaining >= 0.0 {
        format!("{remaining:.0} left")
    } else {
        format!("{:.0} over", -remaining)
    }
}

/// Assemble the printable report from the raw collection.
pub fn build_report(expenses: &[Expense], prefs: &ResolvedPreferences) -> ExpenseReport {
    let total = expenses_total(expenses);
    let rows = expenses
        .iter()
        .map(|e| ExpenseReportRow {
            label: e.label.clone(),
            category: if e.category.is_empty() {
                "Other".to_string()
            } else {
                e.category.clone()
            },
            amount: format!("{}{:.2}", prefs.currency, e.amount),
        })
        .collect();

    ExpenseReport {
        rows,
        total: format!("{}{:.2}", prefs.currency, total),
        budget: format!("{}{:.2}", prefs.currency, prefs.monthly_budget),
        remaining: remaining_label(total, prefs.monthly_budget),
    }
}

/// Service for managing expenses
#[derive(Clone)]
pub struct ExpensesService {
    store: CollectionStore<Vec<Expense>>,
    preferences: PreferencesService,
    reminders: ReminderFacade,
}

impl ExpensesService {
    pub fn new(
        store: CollectionStore<Vec<Expense>>,
        preferences: PreferencesService,
        reminders: ReminderFacade,
    ) -> Self {
        Self {
            store,
            preferences,
            reminders,
        }
    }

    /// List all expenses in display order
    pub async fn list(&self) -> Vec<Expense> {
        self.store.load_or_default().await
    }

    pub async fn total(&self) -> f64 {
        expenses_total(&self.store.load_or_default().await)
    }

    pub async fn breakdown(&self) -> Vec<CategoryTotal> {
        category_totals(&self.store.load_or_default().await)
    }

    pub async fn report(&self) -> ExpenseReport {
        let prefs = self.preferences.resolved().await;
        build_report(&self.store.load_or_default().await, &prefs)
    }

    /// Create or update an expense from editor state.
    ///
    /// Fires the logged-expense confirmation, and the budget alert once
    /// the running total reaches the monthly budget.
    pub async fn save(&self, draft: ExpenseDraft) -> Result<Expense> {
        let label = {
            let trimmed = draft.label.trim();
            if trimmed.is_empty() {
                config::UNTITLED_EXPENSE.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let amount = parse_amount_input(&draft.amount);

        let mut expenses = self.store.load_or_default().await;

        let expense = match draft.id {
            Some(id) => {
                let existing = expenses
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("expense {id}")))?;
                existing.label = label;
                existing.amount = amount;
                existing.category = draft.category;
                existing.clone()
            }
            None => {
                let expense = Expense {
                    id: mint_id(),
                    label,
                    amount,
                    category: draft.category,
                };
                expenses.insert(0, expense.clone());
                tracing::info!("Created expense {}", expense.id);
                expense
            }
        };

        self.store.save(&expenses).await;

        let prefs = self.preferences.resolved().await;
        self.reminders
            .expense_logged(&expense.label, expense.amount, &prefs);

        let total = expenses_total(&expenses);
        if total >= prefs.monthly_budget {
            self.reminders.budget_alert(total, &prefs);
        }

        Ok(expense)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut expenses = self.store.load_or_default().await;
        expenses.retain(|e| e.id != id);
        self.store.save(&expenses).await;

        tracing::info!("Deleted expense {}", id);
        Ok(())
    }
}
