use std::io::Write;
use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::hash::fingerprint_bytes;
use crate::extraction::text::{extract_text, is_resume_file};
use crate::models::profile::{CandidateProfile, JobProfile, ScoreResult};
use crate::screening::pipeline::{run_screening, ScreeningSummary};
use crate::screening::storage::ScreeningRecord;
use crate::scoring;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobRequest {
    pub job_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
}

/// POST /api/v1/job
/// Analyzes a job description, persists it, and makes it the active job.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobProfile>, AppError> {
    if req.job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text must not be empty".to_string()));
    }

    let job = state.extractor.extract_job(&req.job_text).await?;
    state.store.lock().await.save_job(&job)?;
    info!("Job analysis saved: {}", job.title);

    *state.job.write().await = Some(job.clone());
    Ok(Json(job))
}

/// GET /api/v1/job
pub async fn handle_get_job(
    State(state): State<AppState>,
) -> Result<Json<JobProfile>, AppError> {
    state
        .job
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No job has been analyzed yet".to_string()))
}

/// POST /api/v1/screen
/// Runs the batch pipeline over the résumé directory against the active job.
pub async fn handle_run_screening(
    State(state): State<AppState>,
) -> Result<Json<ScreeningSummary>, AppError> {
    let job = active_job(&state).await?;
    // Hold the store lock for the whole run so a concurrent upload cannot
    // interleave its own load/save and drop records.
    let store = state.store.lock().await;
    let summary = run_screening(
        &state.config.resume_dir,
        &job,
        state.extractor.as_ref(),
        &store,
    )
    .await?;
    Ok(Json(summary))
}

/// GET /api/v1/results
pub async fn handle_get_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScreeningRecord>>, AppError> {
    Ok(Json(state.store.lock().await.load_results()?))
}

/// POST /api/v1/resumes
/// Multipart single-résumé upload: stages the file, extracts and analyzes it,
/// scores it against the active job, and persists the record. A file whose
/// content is already on record returns the existing record unchanged.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningRecord>, AppError> {
    let job = active_job(&state).await?;

    let (file_name, bytes) = read_upload(&mut multipart).await?;
    if !is_resume_file(Path::new(&file_name)) {
        return Err(AppError::UnsupportedFormat(format!(
            "'{file_name}': expected a .pdf or .docx file"
        )));
    }

    let file_hash = fingerprint_bytes(&bytes);
    // Lock the store from the dedupe check through the save: a concurrent
    // request working from the same snapshot would otherwise overwrite this
    // record, or double-process the same content.
    let store = state.store.lock().await;
    let mut records = store.load_results()?;
    if let Some(existing) = records.iter().find(|r| r.file_hash == file_hash) {
        info!("{file_name} already analyzed, returning existing record");
        return Ok(Json(existing.clone()));
    }

    // Stage to a temp file so the extension-dispatching extractor can run.
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let mut staged = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()?;
    staged.write_all(&bytes)?;

    let text = extract_text(staged.path())?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "'{file_name}' produced no text to analyze"
        )));
    }

    let profile = state.extractor.extract_candidate(&text).await?;
    let score = scoring::score(&profile, &job);

    let record = ScreeningRecord {
        file_name,
        file_hash,
        profile,
        score,
        analyzed_at: chrono::Utc::now(),
    };
    records.push(record.clone());
    store.save_results(&records)?;

    Ok(Json(record))
}

/// POST /api/v1/resumes/score
/// Scores a hand-built candidate profile against the active job. Pure —
/// nothing is persisted. Useful for clients that already hold a profile.
pub async fn handle_score_profile(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let job = active_job(&state).await?;
    Ok(Json(scoring::score(&req.candidate, &job)))
}

async fn active_job(state: &AppState) -> Result<JobProfile, AppError> {
    state
        .job
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::NotFound("Analyze a job first via POST /api/v1/job".to_string()))
}

/// Pulls the first `file` field out of a multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Upload is missing a file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((file_name, bytes));
    }
    Err(AppError::Validation(
        "Multipart body has no 'file' field".to_string(),
    ))
}
