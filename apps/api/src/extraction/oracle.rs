//! Extraction oracle — pluggable, trait-based conversion of free text into
//! typed profiles.
//!
//! The scoring pipeline only sees `Arc<dyn Extractor>` (carried in
//! `AppState`), so tests run against hand-built stubs while production uses
//! the LLM-backed implementation.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::prompts::{
    JOB_PARSE_PROMPT_TEMPLATE, JOB_PARSE_SYSTEM, RESUME_PARSE_PROMPT_TEMPLATE,
    RESUME_PARSE_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::{CandidateProfile, JobProfile};

/// Converts free text into typed profile records.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract_candidate(&self, resume_text: &str) -> Result<CandidateProfile, AppError>;

    async fn extract_job(&self, job_text: &str) -> Result<JobProfile, AppError>;
}

/// Production oracle backed by the LLM client.
pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Extractor for LlmExtractor {
    async fn extract_candidate(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        self.llm
            .call_json::<CandidateProfile>(&prompt, RESUME_PARSE_SYSTEM)
            .await
            .map_err(|e| classify("résumé analysis", e))
    }

    async fn extract_job(&self, job_text: &str) -> Result<JobProfile, AppError> {
        let prompt = JOB_PARSE_PROMPT_TEMPLATE.replace("{job_text}", job_text);
        self.llm
            .call_json::<JobProfile>(&prompt, JOB_PARSE_SYSTEM)
            .await
            .map_err(|e| classify("job analysis", e))
    }
}

/// Maps transport failures to `ServiceUnavailable`, schema violations to
/// `ExtractionSchema`, and everything else to `Llm`.
fn classify(operation: &str, error: LlmError) -> AppError {
    if error.is_transport() {
        return AppError::ServiceUnavailable(format!("{operation} failed: {error}"));
    }
    match error {
        LlmError::Parse(e) => {
            AppError::ExtractionSchema(format!("{operation} returned invalid profile JSON: {e}"))
        }
        LlmError::EmptyContent => {
            AppError::ExtractionSchema(format!("{operation} returned no content"))
        }
        other => AppError::Llm(format!("{operation} failed: {other}")),
    }
}
