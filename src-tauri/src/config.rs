//! Application configuration constants
//!
//! Central location for storage keys, default preferences and the
//! static currency tables used by conversion and display.

/// A currency the user can pick for display or conversion.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

// ===== Storage Keys =====
//
// Each collection is one self-contained JSON document under a fixed key.

pub mod keys {
    pub const NOTES: &str = "notes";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const EXPENSES: &str = "expenses";
    pub const PREFERENCES: &str = "preferences";
    pub const TODOS: &str = "todos";
    pub const EXCHANGE_RATES: &str = "exchangeRates";
}

// ===== Preference Defaults =====

pub const DEFAULT_MONTHLY_BUDGET: f64 = 1000.0;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

// ===== Notes =====

/// Maximum length of the derived note preview, in characters.
pub const NOTE_PREVIEW_MAX_CHARS: usize = 80;

/// Title used when a note is saved with an empty title.
pub const UNTITLED_NOTE: &str = "Untitled note";

// ===== Subscriptions =====

/// Name used when a subscription is saved with an empty name.
pub const UNTITLED_SUBSCRIPTION: &str = "Untitled subscription";

/// Price text used when a subscription is saved with an empty price.
pub const DEFAULT_SUBSCRIPTION_PRICE: &str = "$0";

/// Renewal text used when a subscription is saved with no renewal date.
pub const UNKNOWN_RENEWAL: &str = "Unknown";

// ===== Expenses =====

/// Label used when an expense is saved with an empty label.
pub const UNTITLED_EXPENSE: &str = "Untitled expense";

// ===== Reminders =====

/// Subscription reminders fire this many hours before the renewal.
pub const SUBSCRIPTION_REMINDER_LEAD_HOURS: i64 = 24;

/// How many upcoming subscription renewals the dashboard shows.
pub const UPCOMING_SUBSCRIPTION_LIMIT: usize = 3;

/// How many upcoming note reminders the dashboard shows.
pub const UPCOMING_NOTE_LIMIT: usize = 2;

/// Poll interval of the background notification dispatch loop.
pub const REMINDER_DISPATCH_INTERVAL_SECS: u64 = 30;

// ===== Currencies =====

pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    CurrencyInfo { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    CurrencyInfo { code: "CHF", symbol: "Fr", name: "Swiss Franc" },
    CurrencyInfo { code: "AED", symbol: "د.إ", name: "UAE Dirham" },
    CurrencyInfo { code: "SAR", symbol: "﷼", name: "Saudi Riyal" },
    CurrencyInfo { code: "PKR", symbol: "₨", name: "Pakistani Rupee" },
];

/// Seed rates written on first use; stand-in for a real rate feed.
/// Base currency is USD at 1.0.
pub const DEFAULT_EXCHANGE_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("INR", 83.12),
    ("JPY", 149.5),
    ("CNY", 7.24),
    ("AUD", 1.52),
    ("CAD", 1.36),
    ("CHF", 0.88),
    ("AED", 3.67),
    ("SAR", 3.75),
    ("PKR", 278.5),
];

/// Look up the display symbol for a currency code, falling back to the
/// code itself for unknown currencies.
pub fn currency_symbol(code: &str) -> &str {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
        .unwrap_or(code)
}
