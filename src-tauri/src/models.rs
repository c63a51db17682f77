//! Data models
//!
//! Rust structs for the persisted collections. All models use serde
//! and keep the camelCase field names of the on-disk JSON documents,
//! so existing data files load unchanged. Instants are stored as epoch
//! milliseconds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from currency code to decimal rate, base USD = 1.0.
pub type RateMap = HashMap<String, f64>;

/// A free-form note, optionally with an image and a reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Derived from `content` (first 80 chars), or the title when the
    /// content is empty.
    pub preview: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub reminder_timestamp: Option<i64>,
    /// Opaque handle of the scheduled reminder, if one exists. Only the
    /// reminder facade mints or cancels it.
    #[serde(default)]
    pub notification_id: Option<String>,
}

/// Todo priority. Ordering for display is High before Medium before Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank, lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A task with priority, category and an optional due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Derived from `due_date`; unset when the date text is unparseable.
    #[serde(default)]
    pub due_date_timestamp: Option<i64>,
    /// Set once at creation, immutable afterwards.
    pub created_at: i64,
}

/// Billing cycle of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "Monthly"),
            BillingCycle::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A recurring subscription. `price` is display text as the user typed
/// it; numeric aggregation strips non-numeric characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub price: String,
    pub cycle: BillingCycle,
    pub next_renewal: String,
    /// Derived from `next_renewal`; unset when the text is unparseable.
    #[serde(default)]
    pub next_renewal_timestamp: Option<i64>,
    #[serde(default)]
    pub notification_id: Option<String>,
}

/// A single expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub category: String,
}

/// User preferences as persisted. Absent fields fall back to the fixed
/// defaults through [`crate::services::preferences::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_enabled")]
    pub notifications_enabled: bool,
    #[serde(default = "default_enabled")]
    pub subscription_alerts: bool,
    #[serde(default = "default_enabled")]
    pub budget_alerts: bool,
    #[serde(default)]
    pub monthly_budget: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub base_currency: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            subscription_alerts: true,
            budget_alerts: true,
            monthly_budget: Some(crate::config::DEFAULT_MONTHLY_BUDGET),
            currency: Some(crate::config::DEFAULT_CURRENCY_SYMBOL.to_string()),
            base_currency: Some(crate::config::DEFAULT_BASE_CURRENCY.to_string()),
        }
    }
}

/// Preferences with every default applied; what computations consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPreferences {
    pub notifications_enabled: bool,
    pub subscription_alerts: bool,
    pub budget_alerts: bool,
    pub monthly_budget: f64,
    pub currency: String,
    pub base_currency: String,
}

/// Mint a time-based record id, matching the ids already on disk.
pub fn mint_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
