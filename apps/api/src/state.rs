use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::extraction::oracle::Extractor;
use crate::models::profile::JobProfile;
use crate::screening::storage::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction oracle. Production: `LlmExtractor`; tests swap in
    /// hand-built stubs so the scoring pipeline runs without a live LLM.
    pub extractor: Arc<dyn Extractor>,
    /// Result persistence. The store does whole-file load/append/save, so
    /// every access goes through this mutex; concurrent writers would
    /// otherwise overwrite each other's records.
    pub store: Arc<Mutex<ResultStore>>,
    /// The active job analysis. Loaded from disk at startup if a previous run
    /// persisted one, replaced by POST /api/v1/job.
    pub job: Arc<RwLock<Option<JobProfile>>>,
}
