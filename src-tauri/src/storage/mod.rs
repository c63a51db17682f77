//! Storage module
//!
//! Key-value JSON persistence and the typed collection stores built on
//! top of it.

pub mod collections;
pub mod kv_store;

pub use collections::{CollectionStore, Stores};
pub use kv_store::KvStore;
