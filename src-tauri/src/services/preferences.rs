//! Preferences service
//!
//! Persists the user's preference overrides and resolves them against
//! the fixed defaults before any computation consumes them.

use crate::config;
use crate::models::{Preferences, ResolvedPreferences};
use crate::services::numeric_value;
use crate::storage::CollectionStore;

/// Apply the fixed defaults onto whatever was persisted.
///
/// The merge is shallow and field-by-field: any field absent from the
/// loaded document takes its default. There are no nested structures
/// to deep-merge.
pub fn resolve(loaded: Option<Preferences>) -> ResolvedPreferences {
    let prefs = loaded.unwrap_or_default();
    ResolvedPreferences {
        notifications_enabled: prefs.notifications_enabled,
        subscription_alerts: prefs.subscription_alerts,
        budget_alerts: prefs.budget_alerts,
        monthly_budget: prefs
            .monthly_budget
            .unwrap_or(config::DEFAULT_MONTHLY_BUDGET),
        currency: prefs
            .currency
            .unwrap_or_else(|| config::DEFAULT_CURRENCY_SYMBOL.to_string()),
        base_currency: prefs
            .base_currency
            .unwrap_or_else(|| config::DEFAULT_BASE_CURRENCY.to_string()),
    }
}

/// Service for loading and editing preferences
#[derive(Clone)]
pub struct PreferencesService {
    store: CollectionStore<Preferences>,
}

impl PreferencesService {
    pub fn new(store: CollectionStore<Preferences>) -> Self {
        Self { store }
    }

    /// Preferences as persisted, defaults when nothing is stored yet
    pub async fn load(&self) -> Preferences {
        self.store.load().await.unwrap_or_default()
    }

    /// Preferences with every default applied
    pub async fn resolved(&self) -> ResolvedPreferences {
        resolve(self.store.load().await)
    }

    /// Replace the persisted preferences wholesale
    pub async fn update(&self, prefs: Preferences) -> Preferences {
        tracing::info!("Updating preferences");
        self.store.save(&prefs).await;
        prefs
    }

    /// Set the monthly budget from raw input; non-numeric text unsets it.
    pub async fn set_monthly_budget(&self, input: &str) -> Preferences {
        let mut prefs = self.load().await;
        prefs.monthly_budget = numeric_value(input);
        self.store.save(&prefs).await;
        prefs
    }

    /// Select the display currency symbol
    pub async fn set_currency(&self, symbol: String) -> Preferences {
        let mut prefs = self.load().await;
        prefs.currency = Some(symbol);
        self.store.save(&prefs).await;
        prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvStore, Stores};
    use tempfile::TempDir;

    fn create_test_service() -> (PreferencesService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let stores = Stores::new(KvStore::new(temp_dir.path().to_path_buf()));
        (PreferencesService::new(stores.preferences), temp_dir)
    }

    #[test]
    fn test_resolve_nothing_persisted_yields_defaults() {
        let resolved = resolve(None);

        assert!(resolved.notifications_enabled);
        assert!(resolved.subscription_alerts);
        assert!(resolved.budget_alerts);
        assert_eq!(resolved.monthly_budget, 1000.0);
        assert_eq!(resolved.currency, "$");
        assert_eq!(resolved.base_currency, "USD");
    }

    #[test]
    fn test_resolve_merges_overrides_onto_defaults() {
        let loaded: Preferences = serde_json::from_str(r#"{"budgetAlerts":false}"#).unwrap();
        let resolved = resolve(Some(loaded));

        assert!(resolved.notifications_enabled);
        assert!(resolved.subscription_alerts);
        assert!(!resolved.budget_alerts);
        assert_eq!(resolved.monthly_budget, 1000.0);
    }

    #[tokio::test]
    async fn test_budget_input_normalization() {
        let (service, _temp) = create_test_service();

        let prefs = service.set_monthly_budget("$1,500").await;
        assert_eq!(prefs.monthly_budget, Some(1500.0));

        let prefs = service.set_monthly_budget("").await;
        assert_eq!(prefs.monthly_budget, None);
        assert_eq!(service.resolved().await.monthly_budget, 1000.0);
    }

    #[tokio::test]
    async fn test_update_persists_across_service_instances() {
        let temp = TempDir::new().unwrap();
        let stores = Stores::new(KvStore::new(temp.path().to_path_buf()));

        {
            let service = PreferencesService::new(stores.preferences.clone());
            let mut prefs = service.load().await;
            prefs.subscription_alerts = false;
            service.update(prefs).await;
        }

        let service = PreferencesService::new(stores.preferences);
        assert!(!service.resolved().await.subscription_alerts);
    }

    #[tokio::test]
    async fn test_set_currency() {
        let (service, _temp) = create_test_service();

        service.set_currency("€".to_string()).await;
        assert_eq!(service.resolved().await.currency, "€");
    }
}
