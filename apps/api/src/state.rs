use std::sync::Arc;

use crate::config::Config;
use crate::kv::KvStore;
use crate::listing::loader::ResumeListing;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable key-value backend. Default: `RedisKvStore`; tests and local
    /// runs use `MemoryKvStore`.
    pub kv: Arc<dyn KvStore>,
    /// Shared listing state: loading flag, current sequence, refresh epoch.
    pub listing: Arc<ResumeListing>,
    pub config: Config,
}
