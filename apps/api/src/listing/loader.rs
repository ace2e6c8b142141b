#![allow(dead_code)]

//! Loads analyzed resumes from the key-value store.
//!
//! The store holds one serialized `Resume` per `resume:{id}` key. A load
//! lists every matching key with values inline, then deserializes each one.
//! One bad record fails the whole load: a partially parsed resume must
//! never reach the rendering layer, and the error names the offending key
//! so the record can be found and repaired.

use std::sync::Mutex;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::errors::AppError;
use crate::feedback::models::Resume;
use crate::kv::KvStore;

/// Every resume record sits under this key prefix.
pub const RESUME_KEY_PATTERN: &str = "resume:*";

pub fn resume_key(id: &str) -> String {
    format!("resume:{id}")
}

/// Lists and deserializes every stored resume, bounded by `limit` on the
/// store's list call.
pub async fn load_resumes(store: &dyn KvStore, limit: Duration) -> Result<Vec<Resume>, AppError> {
    let items = timeout(limit, store.list(RESUME_KEY_PATTERN, true))
        .await
        .map_err(|_| AppError::StoreTimeout(limit))??;

    let mut resumes = Vec::with_capacity(items.len());
    for item in items {
        let resume: Resume = serde_json::from_str(&item.value).map_err(|source| {
            AppError::BadRecord {
                key: item.key.clone(),
                source,
            }
        })?;
        resumes.push(resume);
    }
    Ok(resumes)
}

/// Fetches one resume by id, `None` if no record exists under its key.
pub async fn fetch_resume(store: &dyn KvStore, id: &str) -> Result<Option<Resume>, AppError> {
    let key = resume_key(id);
    let Some(value) = store.get(&key).await? else {
        return Ok(None);
    };
    let resume =
        serde_json::from_str(&value).map_err(|source| AppError::BadRecord { key, source })?;
    Ok(Some(resume))
}

/// Observable listing phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    Loading,
    Empty,
    Loaded,
}

/// Point-in-time copy of the listing state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSnapshot {
    pub loading: bool,
    pub resumes: Vec<Resume>,
}

impl ListingSnapshot {
    pub fn phase(&self) -> ListingPhase {
        if self.loading {
            ListingPhase::Loading
        } else if self.resumes.is_empty() {
            ListingPhase::Empty
        } else {
            ListingPhase::Loaded
        }
    }
}

#[derive(Debug, Default)]
struct ListingState {
    resumes: Vec<Resume>,
    loading: bool,
    epoch: u64,
}

/// Shared listing state. `refresh` is safe to call concurrently: each call
/// bumps the epoch before suspending and only the newest invocation may
/// write its outcome back, so a late response never clobbers a newer one.
/// The mutex is never held across an await.
#[derive(Debug, Default)]
pub struct ResumeListing {
    state: Mutex<ListingState>,
}

impl ResumeListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(
        &self,
        store: &dyn KvStore,
        limit: Duration,
    ) -> Result<Vec<Resume>, AppError> {
        let epoch = self.begin();
        let outcome = load_resumes(store, limit).await;
        if !self.apply(epoch, &outcome) {
            debug!("discarding stale resume load (epoch {epoch})");
        }
        outcome
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        let state = self.state.lock().expect("listing mutex poisoned");
        ListingSnapshot {
            loading: state.loading,
            resumes: state.resumes.clone(),
        }
    }

    /// Marks a load in flight and returns its epoch token.
    fn begin(&self) -> u64 {
        let mut state = self.state.lock().expect("listing mutex poisoned");
        state.epoch += 1;
        state.loading = true;
        state.epoch
    }

    /// Writes a load outcome back unless a newer load has begun since. A
    /// failed load clears the loading flag but keeps the prior sequence.
    fn apply(&self, epoch: u64, outcome: &Result<Vec<Resume>, AppError>) -> bool {
        let mut state = self.state.lock().expect("listing mutex poisoned");
        if state.epoch != epoch {
            return false;
        }
        state.loading = false;
        if let Ok(resumes) = outcome {
            state.resumes = resumes.clone();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::feedback::models::fixtures::sample_resume;
    use crate::kv::{KvItem, MemoryKvStore};

    const LIMIT: Duration = Duration::from_secs(5);

    fn seed(store: &MemoryKvStore, resume: &Resume) {
        store.insert(
            resume_key(&resume.id),
            serde_json::to_string(resume).unwrap(),
        );
    }

    #[tokio::test]
    async fn test_empty_store_loads_empty() {
        let store = MemoryKvStore::new();
        let listing = ResumeListing::new();

        let resumes = listing.refresh(&store, LIMIT).await.unwrap();
        assert!(resumes.is_empty());

        let snapshot = listing.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.phase(), ListingPhase::Empty);
    }

    #[tokio::test]
    async fn test_load_parses_all_records() {
        let store = MemoryKvStore::new();
        let a = sample_resume("a", 85);
        let b = sample_resume("b", 42);
        seed(&store, &a);
        seed(&store, &b);

        let resumes = load_resumes(&store, LIMIT).await.unwrap();
        assert_eq!(resumes, vec![a, b]);
    }

    #[tokio::test]
    async fn test_non_resume_keys_are_not_listed() {
        let store = MemoryKvStore::new();
        seed(&store, &sample_resume("a", 85));
        store.insert("session:1", "not a resume");

        let resumes = load_resumes(&store, LIMIT).await.unwrap();
        assert_eq!(resumes.len(), 1);
    }

    #[tokio::test]
    async fn test_one_bad_record_fails_the_whole_load() {
        let store = MemoryKvStore::new();
        seed(&store, &sample_resume("a", 85));
        store.insert("resume:broken", "{not json");

        let err = load_resumes(&store, LIMIT).await.unwrap_err();
        match err {
            AppError::BadRecord { key, .. } => assert_eq!(key, "resume:broken"),
            other => panic!("expected BadRecord, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_prior_data_and_clears_loading() {
        let store = MemoryKvStore::new();
        seed(&store, &sample_resume("a", 85));
        let listing = ResumeListing::new();
        listing.refresh(&store, LIMIT).await.unwrap();

        store.insert("resume:broken", "{not json");
        assert!(listing.refresh(&store, LIMIT).await.is_err());

        let snapshot = listing.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.resumes.len(), 1);
        assert_eq!(snapshot.phase(), ListingPhase::Loaded);
    }

    #[tokio::test]
    async fn test_duplicate_ids_pass_through() {
        let store = MemoryKvStore::new();
        let twin = sample_resume("twin", 60);
        store.insert("resume:k1", serde_json::to_string(&twin).unwrap());
        store.insert("resume:k2", serde_json::to_string(&twin).unwrap());

        let resumes = load_resumes(&store, LIMIT).await.unwrap();
        assert_eq!(resumes.len(), 2);
        assert_eq!(resumes[0].id, resumes[1].id);
    }

    #[tokio::test]
    async fn test_fetch_resume_round_trip() {
        let store = MemoryKvStore::new();
        let original = sample_resume("a", 85);
        seed(&store, &original);

        let fetched = fetch_resume(&store, "a").await.unwrap();
        assert_eq!(fetched, Some(original));
        assert_eq!(fetch_resume(&store, "missing").await.unwrap(), None);
    }

    #[test]
    fn test_begin_marks_loading() {
        let listing = ResumeListing::new();
        listing.begin();
        let snapshot = listing.snapshot();
        assert!(snapshot.loading);
        assert_eq!(snapshot.phase(), ListingPhase::Loading);
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let listing = ResumeListing::new();
        let first = listing.begin();
        let second = listing.begin();

        // The older invocation finishes late; its outcome must not apply.
        let stale = Ok(vec![sample_resume("stale", 10)]);
        assert!(!listing.apply(first, &stale));
        assert!(listing.snapshot().loading);
        assert!(listing.snapshot().resumes.is_empty());

        let fresh = Ok(vec![sample_resume("fresh", 90)]);
        assert!(listing.apply(second, &fresh));
        let snapshot = listing.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.resumes[0].id, "fresh");
    }

    struct SlowStore;

    #[async_trait]
    impl KvStore for SlowStore {
        async fn list(
            &self,
            _pattern: &str,
            _include_values: bool,
        ) -> Result<Vec<KvItem>, AppError> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(Vec::new())
        }

        async fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_store_times_out() {
        let listing = ResumeListing::new();
        let err = listing
            .refresh(&SlowStore, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreTimeout(_)));
        assert!(!listing.snapshot().loading);
    }
}
