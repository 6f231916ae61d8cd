//! JSON persistence for screening results and the active job analysis.
//!
//! Two small files under the output directory:
//! - `job_analysis.json` — the currently active `JobProfile`.
//! - `analysis_results.json` — every scored résumé, keyed by content hash so
//!   reruns skip files that have not changed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, JobProfile, ScoreResult};

const RESULTS_FILE: &str = "analysis_results.json";
const JOB_FILE: &str = "job_analysis.json";

/// One screened résumé: extracted profile plus its deterministic score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub file_name: String,
    /// SHA-256 of the file bytes; used to skip unchanged files on reruns.
    pub file_hash: String,
    pub profile: CandidateProfile,
    pub score: ScoreResult,
    pub analyzed_at: DateTime<Utc>,
}

/// File-backed store for screening output. Loads are full reads, saves are
/// full rewrites; the files are small enough that this stays simple.
pub struct ResultStore {
    results_path: PathBuf,
    job_path: PathBuf,
}

impl ResultStore {
    /// Creates the output directory if needed.
    pub fn new(output_dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            results_path: output_dir.join(RESULTS_FILE),
            job_path: output_dir.join(JOB_FILE),
        })
    }

    /// All persisted records; empty when no run has happened yet.
    pub fn load_results(&self) -> Result<Vec<ScreeningRecord>, AppError> {
        if !self.results_path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.results_path)?;
        serde_json::from_str(&json)
            .map_err(|e| AppError::Validation(format!("Corrupt results file: {e}")))
    }

    pub fn save_results(&self, records: &[ScreeningRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| AppError::Internal(e.into()))?;
        fs::write(&self.results_path, json)?;
        Ok(())
    }

    pub fn save_job(&self, job: &JobProfile) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(job).map_err(|e| AppError::Internal(e.into()))?;
        fs::write(&self.job_path, json)?;
        Ok(())
    }

    /// The persisted job analysis from a previous run, if any.
    pub fn load_job(&self) -> Result<Option<JobProfile>, AppError> {
        if !self.job_path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.job_path)?;
        let job = serde_json::from_str(&json)
            .map_err(|e| AppError::Validation(format!("Corrupt job file: {e}")))?;
        Ok(Some(job))
    }
}

/// Content hashes already on record, for O(1) skip checks.
pub fn processed_hashes(records: &[ScreeningRecord]) -> HashSet<String> {
    records.iter().map(|r| r.file_hash.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str, hash: &str) -> ScreeningRecord {
        ScreeningRecord {
            file_name: name.to_string(),
            file_hash: hash.to_string(),
            profile: CandidateProfile {
                name: "Jane Doe".to_string(),
                level: "Junior".to_string(),
                years_of_experience: 2,
                technical_skills: vec!["Python".to_string()],
                soft_skills: vec![],
                education: None,
                professional_summary: "Junior developer.".to_string(),
            },
            score: ScoreResult {
                keyword_score: 100.0,
                experience_score: 100.0,
                hard_skills_score: 0.0,
                final_score: 80.0,
            },
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path()).unwrap();
        assert!(store.load_results().unwrap().is_empty());
        assert!(store.load_job().unwrap().is_none());
    }

    #[test]
    fn test_results_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path()).unwrap();

        let records = vec![sample_record("a.pdf", "hash-a"), sample_record("b.docx", "hash-b")];
        store.save_results(&records).unwrap();

        let loaded = store.load_results().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].file_name, "a.pdf");
        assert_eq!(loaded[1].file_hash, "hash-b");
        assert_eq!(loaded[0].score.final_score, 80.0);
    }

    #[test]
    fn test_job_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path()).unwrap();

        let job = JobProfile {
            title: "Data Engineer".to_string(),
            expected_level: "Mid".to_string(),
            min_years_experience: 3,
            required_skills: vec!["SQL".to_string(), "Python".to_string()],
            preferred_skills: vec!["Airflow".to_string()],
            min_education: "".to_string(),
        };
        store.save_job(&job).unwrap();

        let loaded = store.load_job().unwrap().unwrap();
        assert_eq!(loaded.title, "Data Engineer");
        assert_eq!(loaded.required_skills.len(), 2);
    }

    #[test]
    fn test_processed_hashes_collects_all() {
        let records = vec![sample_record("a.pdf", "h1"), sample_record("b.pdf", "h2")];
        let hashes = processed_hashes(&records);
        assert!(hashes.contains("h1"));
        assert!(hashes.contains("h2"));
        assert_eq!(hashes.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_all_records() {
        use std::sync::Arc;
        use tokio::sync::Mutex;

        // Load/append/save from two tasks at once: the mutex (as carried in
        // AppState) must serialize them so neither snapshot overwrites the
        // other's record.
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(Mutex::new(ResultStore::new(dir.path()).unwrap()));

        let mut handles = Vec::new();
        for (name, hash) in [("a.pdf", "hash-a"), ("b.pdf", "hash-b")] {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let guard = store.lock().await;
                let mut records = guard.load_results().unwrap();
                records.push(sample_record(name, hash));
                tokio::task::yield_now().await;
                guard.save_results(&records).unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let records = store.lock().await.load_results().unwrap();
        let hashes = processed_hashes(&records);
        assert_eq!(records.len(), 2);
        assert!(hashes.contains("hash-a"));
        assert!(hashes.contains("hash-b"));
    }

    #[test]
    fn test_corrupt_results_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path()).unwrap();
        fs::write(dir.path().join(RESULTS_FILE), "not json").unwrap();
        assert!(matches!(
            store.load_results().unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
