//! Reminder scheduling facade
//!
//! The facade is the only code allowed to mint or cancel notification
//! handles. It gates every request on the user's preference toggles
//! and on the target instant still being in the future; permission
//! denial or scheduler unavailability degrades to "no reminder
//! scheduled" and never blocks the save of the underlying entity.

use crate::config;
use crate::models::{Note, ResolvedPreferences, Subscription};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tauri::AppHandle;
use tauri_plugin_notification::{NotificationExt, PermissionState};

/// What a delivered notification shows.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
}

/// External notification scheduler consumed by the facade.
///
/// Implementations must not panic; denial or unavailability is
/// reported as `None`/`false`. `cancel` is idempotent: cancelling an
/// absent or unknown handle is a no-op.
pub trait NotificationScheduler: Send + Sync {
    fn request_permission(&self) -> bool;
    fn schedule_at(&self, at: DateTime<Utc>, payload: NotificationPayload) -> Option<String>;
    fn schedule_immediate(&self, payload: NotificationPayload) -> Option<String>;
    fn cancel(&self, handle: &str);
}

/// Facade deciding whether entities get reminders
#[derive(Clone)]
pub struct ReminderFacade {
    scheduler: Arc<dyn NotificationScheduler>,
}

impl ReminderFacade {
    pub fn new(scheduler: Arc<dyn NotificationScheduler>) -> Self {
        Self { scheduler }
    }

    /// Cancel a previously minted handle, if any.
    pub fn cancel(&self, handle: Option<&str>) {
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }

    /// Schedule a reminder for a note at its reminder instant.
    ///
    /// Returns the minted handle, or `None` when the note has no
    /// reminder set, the instant already passed, notifications are
    /// disabled, or permission was denied.
    pub fn schedule_note(&self, note: &Note, prefs: &ResolvedPreferences) -> Option<String> {
        let at = Utc.timestamp_millis_opt(note.reminder_timestamp?).single()?;

        if !prefs.notifications_enabled {
            return None;
        }
        if at <= Utc::now() {
            tracing::debug!("Note reminder instant already passed: {}", note.id);
            return None;
        }
        if !self.scheduler.request_permission() {
            tracing::warn!("Notification permission denied, skipping note reminder");
            return None;
        }

        self.scheduler.schedule_at(
            at,
            NotificationPayload {
                title: note.title.clone(),
                body: note.preview.clone(),
            },
        )
    }

    /// Cancel the note's existing reminder, then schedule anew.
    pub fn reschedule_note(&self, note: &Note, prefs: &ResolvedPreferences) -> Option<String> {
        self.cancel(note.notification_id.as_deref());
        self.schedule_note(note, prefs)
    }

    /// Schedule a renewal reminder one day before the subscription
    /// renews. Yields no handle when that lead time already elapsed or
    /// either the global or the subscription toggle is off.
    pub fn schedule_subscription(
        &self,
        sub: &Subscription,
        prefs: &ResolvedPreferences,
    ) -> Option<String> {
        let renewal = Utc
            .timestamp_millis_opt(sub.next_renewal_timestamp?)
            .single()?;

        if !prefs.notifications_enabled || !prefs.subscription_alerts {
            return None;
        }

        let trigger = renewal - Duration::hours(config::SUBSCRIPTION_REMINDER_LEAD_HOURS);
        if trigger <= Utc::now() {
            tracing::debug!("Renewal too close for a reminder: {}", sub.id);
            return None;
        }
        if !self.scheduler.request_permission() {
            tracing::warn!("Notification permission denied, skipping renewal reminder");
            return None;
        }

        self.scheduler.schedule_at(
            trigger,
            NotificationPayload {
                title: format!("{} renews soon", sub.name),
                body: format!(
                    "Your {} plan renews on {}.",
                    sub.cycle.to_string().to_lowercase(),
                    renewal.format("%a %b %-d %Y")
                ),
            },
        )
    }

    /// Cancel the subscription's existing reminder, then schedule anew.
    pub fn reschedule_subscription(
        &self,
        sub: &Subscription,
        prefs: &ResolvedPreferences,
    ) -> Option<String> {
        self.cancel(sub.notification_id.as_deref());
        self.schedule_subscription(sub, prefs)
    }

    /// Fire an immediate confirmation after logging an expense.
    pub fn expense_logged(&self, label: &str, amount: f64, prefs: &ResolvedPreferences) {
        if !prefs.notifications_enabled {
            return;
        }
        if !self.scheduler.request_permission() {
            return;
        }
        self.scheduler.schedule_immediate(NotificationPayload {
            title: "Expense added".to_string(),
            body: format!("{} - {}{:.2}", label, prefs.currency, amount),
        });
    }

    /// Fire an immediate alert once spending reaches the monthly budget.
    pub fn budget_alert(&self, total: f64, prefs: &ResolvedPreferences) {
        if !prefs.notifications_enabled || !prefs.budget_alerts {
            return;
        }
        if !self.scheduler.request_permission() {
            return;
        }
        self.scheduler.schedule_immediate(NotificationPayload {
            title: "Budget alert".to_string(),
            body: format!("You've spent {}{:.0} this month.", prefs.currency, total),
        });
    }
}

/// Scheduler backed by the Tauri notification plugin.
///
/// Desktop platforms cannot hand a notification to the OS for future
/// delivery, so pending reminders live in an in-memory map drained by
/// a background interval task.
#[derive(Clone)]
pub struct TauriScheduler {
    app: AppHandle,
    pending: Arc<Mutex<HashMap<String, (DateTime<Utc>, NotificationPayload)>>>,
}

impl TauriScheduler {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start the background dispatch loop
    pub fn start_dispatch(&self) {
        let app = self.app.clone();
        let pending = self.pending.clone();

        tauri::async_runtime::spawn(async move {
            tracing::info!("Starting reminder dispatch loop");

            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(
                config::REMINDER_DISPATCH_INTERVAL_SECS,
            ));

            loop {
                interval.tick().await;

                let now = Utc::now();
                let due: Vec<NotificationPayload> = match pending.lock() {
                    Ok(mut map) => {
                        let handles: Vec<String> = map
                            .iter()
                            .filter(|(_, (at, _))| *at <= now)
                            .map(|(handle, _)| handle.clone())
                            .collect();
                        handles
                            .iter()
                            .filter_map(|h| map.remove(h).map(|(_, payload)| payload))
                            .collect()
                    }
                    Err(e) => {
                        tracing::error!("Reminder map lock poisoned: {}", e);
                        continue;
                    }
                };

                for payload in due {
                    Self::show(&app, &payload);
                }
            }
        });
    }

    fn show(app: &AppHandle, payload: &NotificationPayload) {
        if let Err(e) = app
            .notification()
            .builder()
            .title(payload.title.clone())
            .body(payload.body.clone())
            .show()
        {
            tracing::error!("Failed to send notification: {}", e);
        } else {
            tracing::info!("Notification delivered: {}", payload.title);
        }
    }
}

impl NotificationScheduler for TauriScheduler {
    fn request_permission(&self) -> bool {
        match self.app.notification().permission_state() {
            Ok(PermissionState::Granted) => true,
            Ok(_) => matches!(
                self.app.notification().request_permission(),
                Ok(PermissionState::Granted)
            ),
            Err(e) => {
                tracing::warn!("Failed to query notification permission: {}", e);
                false
            }
        }
    }

    fn schedule_at(&self, at: DateTime<Utc>, payload: NotificationPayload) -> Option<String> {
        let handle = uuid::Uuid::new_v4().to_string();
        match self.pending.lock() {
            Ok(mut map) => {
                map.insert(handle.clone(), (at, payload));
                tracing::debug!("Reminder {} scheduled for {}", handle, at);
                Some(handle)
            }
            Err(e) => {
                tracing::error!("Reminder map lock poisoned: {}", e);
                None
            }
        }
    }

    fn schedule_immediate(&self, payload: NotificationPayload) -> Option<String> {
        Self::show(&self.app, &payload);
        Some(uuid::Uuid::new_v4().to_string())
    }

    fn cancel(&self, handle: &str) {
        if let Ok(mut map) = self.pending.lock() {
            // Unknown handles (already fired or never ours) are a no-op
            map.remove(handle);
        }
    }
}
