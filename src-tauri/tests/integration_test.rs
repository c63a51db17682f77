//! Integration tests for OneNest
//!
//! These tests verify end-to-end functionality including:
//! - Collection persistence across application restarts
//! - Reminder scheduling driven by saves and preference toggles
//! - Budget tracking across expense saves

use chrono::{DateTime, Duration, Utc};
use onenest::app::AppState;
use onenest::models::{BillingCycle, Preferences, Priority};
use onenest::services::exchange::convert;
use onenest::services::notes::NoteDraft;
use onenest::services::reminders::{NotificationPayload, NotificationScheduler};
use onenest::services::subscriptions::SubscriptionDraft;
use onenest::services::todos::{TodoDraft, TodoFilter};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Recording scheduler standing in for the Tauri notification plugin
#[derive(Default)]
struct RecordingScheduler {
    scheduled: Mutex<Vec<(DateTime<Utc>, NotificationPayload)>>,
    immediate: Mutex<Vec<NotificationPayload>>,
    cancelled: Mutex<Vec<String>>,
}

impl NotificationScheduler for RecordingScheduler {
    fn request_permission(&self) -> bool {
        true
    }

    fn schedule_at(&self, at: DateTime<Utc>, payload: NotificationPayload) -> Option<String> {
        let mut scheduled = self.scheduled.lock().unwrap();
        scheduled.push((at, payload));
        Some(format!("handle-{}", scheduled.len()))
    }

    fn schedule_immediate(&self, payload: NotificationPayload) -> Option<String> {
        let mut immediate = self.immediate.lock().unwrap();
        immediate.push(payload);
        Some(format!("immediate-{}", immediate.len()))
    }

    fn cancel(&self, handle: &str) {
        self.cancelled.lock().unwrap().push(handle.to_string());
    }
}

fn create_test_app() -> (AppState, Arc<RecordingScheduler>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let scheduler = Arc::new(RecordingScheduler::default());
    let state = AppState::new(temp_dir.path().to_path_buf(), scheduler.clone());
    (state, scheduler, temp_dir)
}

#[tokio::test]
async fn test_note_lifecycle_with_reminder() {
    let (state, scheduler, _temp) = create_test_app();

    let reminder = (Utc::now() + Duration::hours(3))
        .format("%Y-%m-%d %H:%M")
        .to_string();
    let note = state
        .notes_service
        .save(NoteDraft {
            id: None,
            title: "Call dentist".to_string(),
            content: "Ask about the Tuesday slot".to_string(),
            image_uri: None,
            reminder_input: reminder,
        })
        .await
        .unwrap();

    assert_eq!(note.preview, "Ask about the Tuesday slot");
    assert!(note.notification_id.is_some());
    assert_eq!(scheduler.scheduled.lock().unwrap().len(), 1);

    // Editing with the reminder cleared cancels the pending one
    let edited = state
        .notes_service
        .save(NoteDraft {
            id: Some(note.id.clone()),
            title: "Call dentist".to_string(),
            content: "Done calling".to_string(),
            image_uri: None,
            reminder_input: String::new(),
        })
        .await
        .unwrap();

    assert!(edited.notification_id.is_none());
    assert_eq!(
        scheduler.cancelled.lock().unwrap().clone(),
        vec![note.notification_id.unwrap()]
    );

    state.notes_service.delete(&edited.id).await.unwrap();
    assert!(state.notes_service.list().await.is_empty());
}

#[tokio::test]
async fn test_collections_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let scheduler = Arc::new(RecordingScheduler::default());

    {
        let state = AppState::new(temp_dir.path().to_path_buf(), scheduler.clone());
        state
            .notes_service
            .save(NoteDraft {
                id: None,
                title: "Persistent".to_string(),
                content: String::new(),
                image_uri: None,
                reminder_input: String::new(),
            })
            .await
            .unwrap();
        state
            .todos_service
            .save(TodoDraft {
                id: None,
                title: "Water plants".to_string(),
                description: String::new(),
                priority: Priority::Low,
                category: "Home".to_string(),
                due_date: String::new(),
            })
            .await
            .unwrap();
    }

    // A fresh state over the same directory sees the same data
    let reopened = AppState::new(temp_dir.path().to_path_buf(), scheduler);
    assert_eq!(reopened.notes_service.list().await[0].title, "Persistent");
    assert_eq!(
        reopened.todos_service.list(TodoFilter::All).await[0].title,
        "Water plants"
    );
}

#[tokio::test]
async fn test_subscription_reminder_respects_preference_toggle() {
    let (state, scheduler, _temp) = create_test_app();

    state
        .preferences_service
        .update(Preferences {
            subscription_alerts: false,
            ..Preferences::default()
        })
        .await;

    let renewal = (Utc::now() + Duration::days(10))
        .format("%Y-%m-%d")
        .to_string();
    let sub = state
        .subscriptions_service
        .save(SubscriptionDraft {
            id: None,
            name: "Streamly".to_string(),
            price: "$9.99".to_string(),
            cycle: BillingCycle::Monthly,
            next_renewal: renewal,
        })
        .await
        .unwrap();

    assert!(sub.notification_id.is_none());
    assert!(scheduler.scheduled.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_budget_alert_fires_once_threshold_is_crossed() {
    let (state, scheduler, _temp) = create_test_app();

    state
        .expenses_service
        .save(onenest::services::expenses::ExpenseDraft {
            id: None,
            label: "Rent".to_string(),
            amount: "950".to_string(),
            category: "Housing".to_string(),
        })
        .await
        .unwrap();

    state
        .expenses_service
        .save(onenest::services::expenses::ExpenseDraft {
            id: None,
            label: "Groceries".to_string(),
            amount: "80".to_string(),
            category: "Food".to_string(),
        })
        .await
        .unwrap();

    let immediate = scheduler.immediate.lock().unwrap();
    let titles: Vec<&str> = immediate.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Expense added", "Expense added", "Budget alert"]
    );
    assert_eq!(immediate[2].body, "You've spent $1030 this month.");
}

#[tokio::test]
async fn test_exchange_rates_seed_and_convert() {
    let (state, _scheduler, _temp) = create_test_app();

    let rates = state.exchange_service.rates().await;
    assert_eq!(rates.get("USD"), Some(&1.0));

    let result = state.exchange_service.convert(100.0, "USD", "EUR").await;
    assert_eq!(result.result, convert(&rates, 100.0, "USD", "EUR"));
    assert_eq!(result.display, "€92.00");
}

#[tokio::test]
async fn test_dashboard_reflects_collections() {
    let (state, _scheduler, _temp) = create_test_app();

    state
        .notes_service
        .save(NoteDraft {
            id: None,
            title: "A note".to_string(),
            content: String::new(),
            image_uri: None,
            reminder_input: (Utc::now() + Duration::hours(6))
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        })
        .await
        .unwrap();

    let renewal = (Utc::now() + Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();
    state
        .subscriptions_service
        .save(SubscriptionDraft {
            id: None,
            name: "Streamly".to_string(),
            price: "$9.99".to_string(),
            cycle: BillingCycle::Monthly,
            next_renewal: renewal,
        })
        .await
        .unwrap();

    let summary = state.dashboard_service.summary().await;
    assert_eq!(summary.note_count, 1);
    assert_eq!(summary.subscription_count, 1);

    // Renewals lead the strip, note reminders follow
    let upcoming = state.dashboard_service.upcoming().await;
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].title, "Streamly");
    assert_eq!(upcoming[1].title, "A note");
}
