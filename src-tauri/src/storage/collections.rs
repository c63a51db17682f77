//! Typed collection stores
//!
//! Each store binds a fixed storage key to one record shape. A `save`
//! always replaces the whole document; there are no partial writes, and
//! concurrent saves are last-writer-wins.

use crate::config::keys;
use crate::models::{Expense, Note, Preferences, RateMap, Subscription, Todo};
use crate::storage::KvStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A single persisted document of shape `T` under a fixed key.
pub struct CollectionStore<T> {
    kv: KvStore,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            kv: self.kv.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> CollectionStore<T> {
    fn new(kv: KvStore, key: &'static str) -> Self {
        Self {
            kv,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub async fn load(&self) -> Option<T> {
        self.kv.load(self.key).await
    }

    /// Load, falling back to the empty/default value when the document
    /// is absent or unreadable.
    pub async fn load_or_default(&self) -> T
    where
        T: Default,
    {
        self.load().await.unwrap_or_default()
    }

    pub async fn save(&self, value: &T) {
        self.kv.save(self.key, value).await;
    }
}

/// All six collection stores over one key-value root.
#[derive(Clone)]
pub struct Stores {
    pub notes: CollectionStore<Vec<Note>>,
    pub todos: CollectionStore<Vec<Todo>>,
    pub subscriptions: CollectionStore<Vec<Subscription>>,
    pub expenses: CollectionStore<Vec<Expense>>,
    pub preferences: CollectionStore<Preferences>,
    pub exchange_rates: CollectionStore<RateMap>,
}

impl Stores {
    pub fn new(kv: KvStore) -> Self {
        Self {
            notes: CollectionStore::new(kv.clone(), keys::NOTES),
            todos: CollectionStore::new(kv.clone(), keys::TODOS),
            subscriptions: CollectionStore::new(kv.clone(), keys::SUBSCRIPTIONS),
            expenses: CollectionStore::new(kv.clone(), keys::EXPENSES),
            preferences: CollectionStore::new(kv.clone(), keys::PREFERENCES),
            exchange_rates: CollectionStore::new(kv, keys::EXCHANGE_RATES),
        }
    }
}
