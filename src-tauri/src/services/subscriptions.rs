//! Subscriptions service
//!
//! Upsert and delete over the subscriptions collection, renewal
//! reminder rescheduling and the per-cycle spending totals.

use crate::config;
use crate::error::{AppError, Result};
use crate::models::{mint_id, BillingCycle, Subscription};
use crate::services::{numeric_value, parse_date_input, PreferencesService, ReminderFacade};
use crate::storage::CollectionStore;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Raw editor state for a subscription save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub id: Option<String>,
    pub name: String,
    pub price: String,
    pub cycle: BillingCycle,
    /// Renewal date as typed, `YYYY-MM-DD`; empty means unknown.
    #[serde(default)]
    pub next_renewal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOverview {
    pub monthly_total: f64,
    pub yearly_total: f64,
    pub count: usize,
}

/// Numeric value of a subscription's price text, ignoring currency
/// symbols and other decoration.
pub fn price_value(sub: &Subscription) -> f64 {
    numeric_value(&sub.price).unwrap_or(0.0)
}

/// Sum of prices across subscriptions on the given cycle.
pub fn cycle_total(subs: &[Subscription], cycle: BillingCycle) -> f64 {
    subs.iter()
        .filter(|s| s.cycle == cycle)
        .map(price_value)
        .sum()
}

pub fn overview(subs: &[Subscription]) -> SubscriptionOverview {
    SubscriptionOverview {
        monthly_total: cycle_total(subs, BillingCycle::Monthly),
        yearly_total: cycle_total(subs, BillingCycle::Yearly),
        count: subs.len(),
    }
}

/// Service for managing subscriptions
#[derive(Clone)]
pub struct SubscriptionsService {
    store: CollectionStore<Vec<Subscription>>,
    preferences: PreferencesService,
    reminders: ReminderFacade,
}

impl SubscriptionsService {
    pub fn new(
        store: CollectionStore<Vec<Subscription>>,
        preferences: PreferencesService,
        reminders: ReminderFacade,
    ) -> Self {
        Self {
            store,
            preferences,
            reminders,
        }
    }

    /// List all subscriptions in display order
    pub async fn list(&self) -> Vec<Subscription> {
        self.store.load_or_default().await
    }

    pub async fn overview(&self) -> SubscriptionOverview {
        overview(&self.store.load_or_default().await)
    }

    /// Create or update a subscription from editor state.
    ///
    /// Normalizes the input and reschedules the renewal reminder. A
    /// parseable renewal date is re-rendered as `YYYY-MM-DD` so the
    /// stored text and timestamp agree.
    pub async fn save(&self, draft: SubscriptionDraft) -> Result<Subscription> {
        let name = {
            let trimmed = draft.name.trim();
            if trimmed.is_empty() {
                config::UNTITLED_SUBSCRIPTION.to_string()
            } else {
                trimmed.to_string()
            }
        };
        let price = {
            let trimmed = draft.price.trim();
            if trimmed.is_empty() {
                config::DEFAULT_SUBSCRIPTION_PRICE.to_string()
            } else {
                trimmed.to_string()
            }
        };

        let renewal_text = draft.next_renewal.trim().to_string();
        let next_renewal_timestamp = parse_date_input(&renewal_text);
        let next_renewal = match next_renewal_timestamp {
            Some(ts) => Utc
                .timestamp_millis_opt(ts)
                .single()
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or(renewal_text),
            None if renewal_text.is_empty() => config::UNKNOWN_RENEWAL.to_string(),
            None => renewal_text,
        };

        let mut subs = self.store.load_or_default().await;

        let mut sub = match draft.id {
            Some(id) => {
                let existing = subs
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("subscription {id}")))?;
                existing.name = name;
                existing.price = price;
                existing.cycle = draft.cycle;
                existing.next_renewal = next_renewal;
                existing.next_renewal_timestamp = next_renewal_timestamp;
                existing.clone()
            }
            None => {
                let sub = Subscription {
                    id: mint_id(),
                    name,
                    price,
                    cycle: draft.cycle,
                    next_renewal,
                    next_renewal_timestamp,
                    notification_id: None,
                };
                subs.insert(0, sub.clone());
                tracing::info!("Created subscription {}", sub.id);
                sub
            }
        };

        let prefs = self.preferences.resolved().await;
        sub.notification_id = self.reminders.reschedule_subscription(&sub, &prefs);
        if let Some(stored) = subs.iter_mut().find(|s| s.id == sub.id) {
            stored.notification_id = sub.notification_id.clone();
        }

        self.store.save(&subs).await;
        Ok(sub)
    }

    /// Delete a subscription, cancelling any pending renewal reminder
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut subs = self.store.load_or_default().await;

        if let Some(sub) = subs.iter().find(|s| s.id == id) {
            self.reminders.cancel(sub.notification_id.as_deref());
        }
        subs.retain(|s| s.id != id);
        self.store.save(&subs).await;

        tracing::info!("Deleted subscription {}", id);
        Ok(())
    }
}
