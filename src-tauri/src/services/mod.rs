//! Services module
//!
//! Business logic services that coordinate between commands and the
//! collection stores, plus the edit-boundary input normalization they
//! share. Invalid user input never rejects a save: unparseable amounts
//! coerce to 0 and unparseable dates coerce to "unset".

pub mod dashboard;
pub mod exchange;
pub mod expenses;
pub mod notes;
pub mod preferences;
pub mod reminders;
pub mod subscriptions;
pub mod todos;

pub use dashboard::DashboardService;
pub use exchange::ExchangeService;
pub use expenses::ExpensesService;
pub use notes::NotesService;
pub use preferences::PreferencesService;
pub use reminders::{NotificationScheduler, ReminderFacade};
pub use subscriptions::SubscriptionsService;
pub use todos::TodosService;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date input (`YYYY-MM-DD`, or a full RFC 3339 instant) into
/// epoch milliseconds at midnight UTC. Unparseable input is unset.
pub fn parse_date_input(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Parse a date-time input (`YYYY-MM-DD HH:MM`, with a space or `T`
/// separator, optionally with seconds, or full RFC 3339) into epoch
/// milliseconds. Unparseable input is unset.
pub fn parse_datetime_input(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replacen(' ', "T", 1);

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.timestamp_millis());
    }

    parse_date_input(trimmed)
}

/// Extract the numeric value from free text such as `"$9.99"` by
/// stripping every character outside `[0-9.]` before parsing.
pub fn numeric_value(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    digits.parse::<f64>().ok()
}

/// Normalize a user-typed amount: unparseable coerces to 0, and
/// amounts are clamped to be non-negative.
pub fn parse_amount_input(value: &str) -> f64 {
    value.trim().parse::<f64>().ok().filter(|a| a.is_finite()).unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        let ts = parse_date_input("2026-09-01").unwrap();
        assert_eq!(ts, 1_788_220_800_000);

        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("  "), None);
        assert_eq!(parse_date_input("Unknown"), None);
        assert_eq!(parse_date_input("01/02/2026"), None);
    }

    #[test]
    fn test_parse_datetime_input_accepts_space_and_t() {
        let spaced = parse_datetime_input("2026-09-01 08:30").unwrap();
        let teed = parse_datetime_input("2026-09-01T08:30").unwrap();
        assert_eq!(spaced, teed);
        assert_eq!(spaced, 1_788_220_800_000 + (8 * 3600 + 30 * 60) * 1000);
    }

    #[test]
    fn test_parse_datetime_input_falls_back_to_date() {
        assert_eq!(
            parse_datetime_input("2026-09-01"),
            parse_date_input("2026-09-01")
        );
        assert_eq!(parse_datetime_input("soonish"), None);
    }

    #[test]
    fn test_numeric_value_strips_currency_text() {
        assert_eq!(numeric_value("$9.99"), Some(9.99));
        assert_eq!(numeric_value("₹ 1499"), Some(1499.0));
        assert_eq!(numeric_value("free"), None);
        assert_eq!(numeric_value(""), None);
    }

    #[test]
    fn test_parse_amount_input_coercions() {
        assert_eq!(parse_amount_input("4.50"), 4.5);
        assert_eq!(parse_amount_input("abc"), 0.0);
        assert_eq!(parse_amount_input(""), 0.0);
        assert_eq!(parse_amount_input("-3"), 0.0);
    }
}
