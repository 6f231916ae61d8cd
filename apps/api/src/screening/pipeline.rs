//! Batch screening pipeline: walk the résumé directory, skip files already
//! on record, extract → analyze → score each new file, persist everything.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::hash::fingerprint_file;
use crate::extraction::oracle::Extractor;
use crate::extraction::text::{extract_text, is_resume_file};
use crate::models::profile::JobProfile;
use crate::screening::storage::{processed_hashes, ResultStore, ScreeningRecord};
use crate::scoring;

/// Outcome of one batch run.
#[derive(Debug, Serialize)]
pub struct ScreeningSummary {
    pub newly_scored: usize,
    /// Files whose content hash was already on record.
    pub skipped_unchanged: usize,
    /// Files that produced no text (scanned images, empty documents).
    pub skipped_empty: usize,
    pub total_on_record: usize,
}

/// All PDF/DOCX files in the résumé directory, sorted by name so runs are
/// reproducible.
pub fn resume_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_resume_file(p))
        .collect();
    files.sort();
    Ok(files)
}

/// Screens every new résumé in `resume_dir` against `job` and persists the
/// accumulated results. Files already on record (same content hash) are not
/// reprocessed.
///
/// Callers must serialize runs against other store mutations; the handlers
/// do this by holding the `AppState` store mutex for the whole run.
pub async fn run_screening(
    resume_dir: &Path,
    job: &JobProfile,
    extractor: &dyn Extractor,
    store: &ResultStore,
) -> Result<ScreeningSummary, AppError> {
    let mut records = store.load_results()?;
    let seen = processed_hashes(&records);

    let mut newly_scored = 0;
    let mut skipped_unchanged = 0;
    let mut skipped_empty = 0;

    for path in resume_files(resume_dir)? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Hashing and document parsing are file/CPU bound; keep them off the
        // async worker threads so a large batch cannot stall the runtime.
        let file_hash = {
            let path = path.clone();
            tokio::task::spawn_blocking(move || fingerprint_file(&path))
                .await
                .map_err(|e| AppError::Internal(e.into()))??
        };
        if seen.contains(&file_hash) {
            info!("{file_name} already analyzed, skipping");
            skipped_unchanged += 1;
            continue;
        }

        info!("Processing {file_name}");
        let text = {
            let path = path.clone();
            tokio::task::spawn_blocking(move || extract_text(&path))
                .await
                .map_err(|e| AppError::Internal(e.into()))??
        };
        if text.trim().is_empty() {
            warn!("{file_name} produced no text, skipping");
            skipped_empty += 1;
            continue;
        }

        let profile = extractor.extract_candidate(&text).await?;
        let score = scoring::score(&profile, job);
        info!(
            "{file_name}: final score {:.2} ({})",
            score.final_score, profile.name
        );

        records.push(ScreeningRecord {
            file_name,
            file_hash,
            profile,
            score,
            analyzed_at: chrono::Utc::now(),
        });
        newly_scored += 1;
    }

    store.save_results(&records)?;

    Ok(ScreeningSummary {
        newly_scored,
        skipped_unchanged,
        skipped_empty,
        total_on_record: records.len(),
    })
}
