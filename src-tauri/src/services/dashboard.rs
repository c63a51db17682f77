//! Dashboard service
//!
//! Read-only summaries assembled across collections for the home
//! screen: headline counts and the upcoming reminders strip.

use crate::config;
use crate::models::{Expense, Note, Subscription, Todo};
use crate::services::expenses::expenses_total;
use crate::storage::CollectionStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Subscription,
    Note,
}

/// One entry of the upcoming reminders strip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReminder {
    pub id: String,
    pub title: String,
    pub kind: ReminderKind,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub note_count: usize,
    pub active_todos: usize,
    pub expense_total: f64,
    pub subscription_count: usize,
}

/// The next few subscription renewals followed by the next few note
/// reminders, each group soonest first. Past instants are skipped.
pub fn upcoming_reminders(
    subs: &[Subscription],
    notes: &[Note],
    now_ms: i64,
) -> Vec<UpcomingReminder> {
    let mut renewals: Vec<UpcomingReminder> = subs
        .iter()
        .filter_map(|s| {
            let ts = s.next_renewal_timestamp.filter(|ts| *ts > now_ms)?;
            Some(UpcomingReminder {
                id: s.id.clone(),
                title: s.name.clone(),
                kind: ReminderKind::Subscription,
                timestamp: ts,
            })
        })
        .collect();
    renewals.sort_by_key(|r| r.timestamp);
    renewals.truncate(config::UPCOMING_SUBSCRIPTION_LIMIT);

    let mut reminders: Vec<UpcomingReminder> = notes
        .iter()
        .filter_map(|n| {
            let ts = n.reminder_timestamp.filter(|ts| *ts > now_ms)?;
            Some(UpcomingReminder {
                id: n.id.clone(),
                title: n.title.clone(),
                kind: ReminderKind::Note,
                timestamp: ts,
            })
        })
        .collect();
    reminders.sort_by_key(|r| r.timestamp);
    reminders.truncate(config::UPCOMING_NOTE_LIMIT);

    renewals.extend(reminders);
    renewals
}

pub fn summary(
    notes: &[Note],
    todos: &[Todo],
    expenses: &[Expense],
    subs: &[Subscription],
) -> DashboardSummary {
    DashboardSummary {
        note_count: notes.len(),
        active_todos: todos.iter().filter(|t| !t.completed).count(),
        expense_total: expenses_total(expenses),
        subscription_count: subs.len(),
    }
}

/// Service assembling the home screen data
#[derive(Clone)]
pub struct DashboardService {
    notes: CollectionStore<Vec<Note>>,
    todos: CollectionStore<Vec<Todo>>,
    expenses: CollectionStore<Vec<Expense>>,
    subscriptions: CollectionStore<Vec<Subscription>>,
}

impl DashboardService {
    pub fn new(
        notes: CollectionStore<Vec<Note>>,
        todos: CollectionStore<Vec<Todo>>,
        expenses: CollectionStore<Vec<Expense>>,
        subscriptions: CollectionStore<Vec<Subscription>>,
    ) -> Self {
        Self {
            notes,
            todos,
            expenses,
            subscriptions,
        }
    }

    pub async fn summary(&self) -> DashboardSummary {
        summary(
            &self.notes.load_or_default().await,
            &self.todos.load_or_default().await,
            &self.expenses.load_or_default().await,
            &self.subscriptions.load_or_default().await,
        )
    }

    pub async fn upcoming(&self) -> Vec<UpcomingReminder> {
        upcoming_reminders(
            &self.subscriptions.load_or_default().await,
            &self.notes.load_or_default().await,
            chrono::Utc::now().timestamp_millis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, Priority};

    fn sub(id: &str, renewal_ms: Option<i64>) -> Subscription {
        Subscription {
            id: id.to_string(),
            name: id.to_string(),
            price: "$5".to_string(),
            cycle: BillingCycle::Monthly,
            next_renewal: "2026-10-01".to_string(),
            next_renewal_timestamp: renewal_ms,
            notification_id: None,
        }
    }

    fn note(id: &str, reminder_ms: Option<i64>) -> Note {
        Note {
            id: id.to_string(),
            title: id.to_string(),
            preview: id.to_string(),
            content: None,
            image_uri: None,
            reminder_timestamp: reminder_ms,
            notification_id: None,
        }
    }

    #[test]
    fn test_upcoming_skips_past_and_absent_instants() {
        let subs = vec![sub("past", Some(50)), sub("none", None), sub("soon", Some(200))];
        let notes = vec![note("past-note", Some(10))];

        let upcoming = upcoming_reminders(&subs, &notes, 100);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "soon");
        assert_eq!(upcoming[0].kind, ReminderKind::Subscription);
    }

    #[test]
    fn test_upcoming_caps_each_group_and_orders_soonest_first() {
        let subs = vec![
            sub("s4", Some(400)),
            sub("s1", Some(101)),
            sub("s2", Some(102)),
            sub("s3", Some(103)),
        ];
        let notes = vec![note("n2", Some(300)), note("n1", Some(150)), note("n3", Some(500))];

        let upcoming = upcoming_reminders(&subs, &notes, 100);
        let ids: Vec<&str> = upcoming.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "n1", "n2"]);
    }

    #[test]
    fn test_summary_counts() {
        let todos = vec![
            Todo {
                id: "a".to_string(),
                title: "a".to_string(),
                description: None,
                completed: false,
                priority: Priority::Medium,
                category: "Personal".to_string(),
                due_date: None,
                due_date_timestamp: None,
                created_at: 1,
            },
            Todo {
                id: "b".to_string(),
                title: "b".to_string(),
                description: None,
                completed: true,
                priority: Priority::Low,
                category: "Personal".to_string(),
                due_date: None,
                due_date_timestamp: None,
                created_at: 2,
            },
        ];
        let expenses = vec![Expense {
            id: "e".to_string(),
            label: "Lunch".to_string(),
            amount: 12.5,
            category: "Food".to_string(),
        }];

        let summary = summary(&[note("n", None)], &todos, &expenses, &[sub("s", None)]);
        assert_eq!(summary.note_count, 1);
        assert_eq!(summary.active_todos, 1);
        assert_eq!(summary.expense_total, 12.5);
        assert_eq!(summary.subscription_count, 1);
    }
}
