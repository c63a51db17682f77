//! Exchange rates service
//!
//! Seeds and refreshes the stored rate table and performs currency
//! conversion through the base currency.

use crate::config;
use crate::models::RateMap;
use crate::services::PreferencesService;
use crate::storage::CollectionStore;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// Source of fresh exchange rates.
///
/// The production build ships a mock source; a real feed would slot in
/// behind the same trait.
pub trait RateSource: Send + Sync {
    fn refresh(&self, rates: &RateMap, base: &str) -> RateMap;
}

/// Jitters every non-base rate by up to two percent, standing in for a
/// live rate feed.
pub struct MockRateSource;

impl RateSource for MockRateSource {
    fn refresh(&self, rates: &RateMap, base: &str) -> RateMap {
        let mut rng = rand::thread_rng();
        rates
            .iter()
            .map(|(code, rate)| {
                if code == base {
                    (code.clone(), *rate)
                } else {
                    (code.clone(), rate * rng.gen_range(0.98..1.02))
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub result: f64,
    pub display: String,
}

/// Convert through the base currency. An unknown currency code falls
/// back to a rate of 1.0 rather than failing the conversion.
pub fn convert(rates: &RateMap, amount: f64, from: &str, to: &str) -> f64 {
    let rate_from = rates.get(from).copied().unwrap_or(1.0);
    let rate_to = rates.get(to).copied().unwrap_or(1.0);
    (amount / rate_from) * rate_to
}

pub fn conversion_result(rates: &RateMap, amount: f64, from: &str, to: &str) -> ConversionResult {
    let result = convert(rates, amount, from, to);
    ConversionResult {
        result,
        display: format!("{}{result:.2}", config::currency_symbol(to)),
    }
}

fn seed_rates() -> RateMap {
    config::DEFAULT_EXCHANGE_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

/// Service for managing exchange rates
#[derive(Clone)]
pub struct ExchangeService {
    store: CollectionStore<RateMap>,
    preferences: PreferencesService,
    source: Arc<dyn RateSource>,
}

impl ExchangeService {
    pub fn new(
        store: CollectionStore<RateMap>,
        preferences: PreferencesService,
        source: Arc<dyn RateSource>,
    ) -> Self {
        Self {
            store,
            preferences,
            source,
        }
    }

    /// Current rate table, seeding the defaults on first use
    pub async fn rates(&self) -> RateMap {
        let rates = self.store.load_or_default().await;
        if !rates.is_empty() {
            return rates;
        }

        let seeded = seed_rates();
        self.store.save(&seeded).await;
        tracing::info!("Seeded default exchange rates");
        seeded
    }

    /// Pull fresh rates from the source and persist them
    pub async fn refresh(&self) -> RateMap {
        let rates = self.rates().await;
        let base = self.preferences.resolved().await.base_currency;

        let refreshed = self.source.refresh(&rates, &base);
        self.store.save(&refreshed).await;
        tracing::debug!("Refreshed {} exchange rates", refreshed.len());
        refreshed
    }

    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> ConversionResult {
        conversion_result(&self.rates().await, amount, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvStore, Stores};
    use tempfile::TempDir;

    fn create_test_service() -> (ExchangeService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let stores = Stores::new(KvStore::new(temp_dir.path().to_path_buf()));
        let preferences = PreferencesService::new(stores.preferences);
        let service = ExchangeService::new(
            stores.exchange_rates,
            preferences,
            Arc::new(MockRateSource),
        );
        (service, temp_dir)
    }

    fn fixed_rates() -> RateMap {
        [("USD", 1.0), ("EUR", 0.92), ("GBP", 0.79)]
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect()
    }

    #[test]
    fn test_convert_through_base() {
        let rates = fixed_rates();
        assert_eq!(convert(&rates, 100.0, "USD", "EUR"), 92.0);

        let back = convert(&rates, 92.0, "EUR", "USD");
        assert!((back - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currency_falls_back_to_unit_rate() {
        let rates = fixed_rates();
        assert_eq!(convert(&rates, 50.0, "XYZ", "USD"), 50.0);
    }

    #[test]
    fn test_conversion_display_carries_target_symbol() {
        let result = conversion_result(&fixed_rates(), 10.0, "USD", "GBP");
        assert_eq!(result.display, "£7.90");
    }

    #[tokio::test]
    async fn test_first_use_seeds_defaults() {
        let (service, _temp) = create_test_service();

        let rates = service.rates().await;
        assert_eq!(rates.get("USD"), Some(&1.0));
        assert_eq!(rates.len(), config::DEFAULT_EXCHANGE_RATES.len());

        // The seed is persisted, not recomputed
        let again = service.rates().await;
        assert_eq!(rates, again);
    }

    #[tokio::test]
    async fn test_refresh_keeps_base_fixed_and_jitters_rest() {
        let (service, _temp) = create_test_service();

        let before = service.rates().await;
        let after = service.refresh().await;

        assert_eq!(after.get("USD"), Some(&1.0));
        for (code, rate) in &after {
            let original = before[code];
            assert!(*rate >= original * 0.98 && *rate < original * 1.02);
        }
    }

    #[tokio::test]
    async fn test_refresh_persists_new_rates() {
        let (service, _temp) = create_test_service();

        let refreshed = service.refresh().await;
        assert_eq!(service.rates().await, refreshed);
    }
}
