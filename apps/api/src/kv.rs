#![allow(dead_code)]

//! Key-value store contract and backends.
//!
//! Resume records live in an external key-value store as serialized JSON
//! under `resume:{id}` keys. This service only ever reads: `list` with a
//! trailing-wildcard pattern and `get` for a single key.
//!
//! `AppState` holds an `Arc<dyn KvStore>`, so backends swap without touching
//! handler or loader code. Default: `RedisKvStore`. `MemoryKvStore` serves
//! tests and local runs without a Redis instance.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

/// A raw store record: opaque serialized value under its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvItem {
    pub key: String,
    pub value: String,
}

/// Read-only view of the key-value store.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Lists entries whose key matches `pattern` (trailing-wildcard
    /// convention, e.g. `resume:*`). With `include_values` false, items come
    /// back with empty values so callers can enumerate keys cheaply.
    async fn list(&self, pattern: &str, include_values: bool) -> Result<Vec<KvItem>, AppError>;

    /// Fetches a single value, `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RedisKvStore — default backend
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisKvStore {
    client: redis::Client,
}

impl RedisKvStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn list(&self, pattern: &str, include_values: bool) -> Result<Vec<KvItem>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let mut keys: Vec<String> = Vec::new();
        {
            let mut iter = conn.scan_match::<_, String>(pattern).await?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
        }
        // SCAN order is unspecified; sort so listings are deterministic.
        keys.sort();

        if !include_values {
            return Ok(keys
                .into_iter()
                .map(|key| KvItem {
                    key,
                    value: String::new(),
                })
                .collect());
        }

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Option<String>> = conn.mget(&keys).await?;

        let mut items = Vec::with_capacity(keys.len());
        for (key, value) in keys.into_iter().zip(values) {
            match value {
                Some(value) => items.push(KvItem { key, value }),
                // Deleted between SCAN and MGET by an external writer.
                None => debug!("key '{key}' vanished during listing, skipping"),
            }
        }
        Ok(items)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryKvStore — in-process backend for tests and local runs
// ────────────────────────────────────────────────────────────────────────────

/// BTreeMap keeps iteration in key order, matching the sorted Redis listing.
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .lock()
            .expect("kv mutex poisoned")
            .insert(key.into(), value.into());
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn list(&self, pattern: &str, include_values: bool) -> Result<Vec<KvItem>, AppError> {
        let entries = self.entries.lock().expect("kv mutex poisoned");
        Ok(entries
            .iter()
            .filter(|(key, _)| key_matches(pattern, key))
            .map(|(key, value)| KvItem {
                key: key.clone(),
                value: if include_values {
                    value.clone()
                } else {
                    String::new()
                },
            })
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().expect("kv mutex poisoned");
        Ok(entries.get(key).cloned())
    }
}

/// Trailing-wildcard match: `resume:*` selects every key with that prefix,
/// a pattern without `*` must match exactly.
fn key_matches(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}
