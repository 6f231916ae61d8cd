use serde::{Deserialize, Serialize};

/// Structured data extracted from a résumé by the extraction oracle.
/// Immutable once constructed; the scorer only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    /// Open string, not a closed enum: "No Experience", "Intern", "Junior",
    /// "Mid", "Senior" are the expected values but the oracle may vary.
    pub level: String,
    pub years_of_experience: u32,
    /// e.g. ["Python", "FastAPI", "Docker"] — may contain duplicates/variants.
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    /// Not every résumé lists formal education.
    #[serde(default)]
    pub education: Option<String>,
    pub professional_summary: String,
}

/// Structured data extracted from a job posting. One instance per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    pub expected_level: String,
    pub min_years_experience: u32,
    /// The candidate MUST have these.
    pub required_skills: Vec<String>,
    /// Nice-to-have skills.
    pub preferred_skills: Vec<String>,
    pub min_education: String,
}

/// Compatibility score computed by code, never by the LLM.
/// All four fields lie in [0, 100] and are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// % of required skills the candidate matches.
    pub keyword_score: f64,
    /// Years of experience vs the job minimum, zeroed on technical mismatch.
    pub experience_score: f64,
    /// % of preferred skills the candidate matches.
    pub hard_skills_score: f64,
    /// Weighted composite of the three sub-scores.
    pub final_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_profile_deserializes_without_education() {
        let json = r#"{
            "name": "Ana Souza",
            "level": "Mid",
            "years_of_experience": 4,
            "technical_skills": ["Python", "Docker"],
            "soft_skills": ["Communication"],
            "professional_summary": "Backend developer."
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.education, None);
        assert_eq!(profile.years_of_experience, 4);
        assert_eq!(profile.technical_skills.len(), 2);
    }

    #[test]
    fn test_job_profile_round_trips() {
        let job = JobProfile {
            title: "Backend Engineer".to_string(),
            expected_level: "Senior".to_string(),
            min_years_experience: 5,
            required_skills: vec!["python".to_string(), "aws".to_string()],
            preferred_skills: vec!["docker".to_string()],
            min_education: "Bachelor's degree".to_string(),
        };
        let json = serde_json::to_string(&job).unwrap();
        let back: JobProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, job.title);
        assert_eq!(back.required_skills, job.required_skills);
        assert_eq!(back.min_years_experience, 5);
    }
}
