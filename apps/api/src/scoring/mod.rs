//! Scoring engine — deterministic, non-LLM compatibility scoring.
//!
//! Pure functions of two typed records. No I/O, no shared state, no
//! randomness: the same candidate/job pair always produces the same
//! `ScoreResult`, so calls are safe to run concurrently without coordination.

use crate::models::profile::{CandidateProfile, JobProfile, ScoreResult};

// ────────────────────────────────────────────────────────────────────────────
// Weights and thresholds
// ────────────────────────────────────────────────────────────────────────────

/// Weight of required-skill coverage in the final score.
pub const KEYWORD_WEIGHT: f64 = 0.5;
/// Weight of years-of-experience credit in the final score.
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
/// Weight of preferred-skill coverage in the final score.
pub const HARD_SKILLS_WEIGHT: f64 = 0.2;

/// Below this keyword score the candidate is considered a technical mismatch
/// and experience credit is suppressed entirely.
pub const MIN_TECHNICAL_FIT: f64 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Text normalizer
// ────────────────────────────────────────────────────────────────────────────

/// Canonicalizes a skill string for comparison: lowercases and collapses
/// every run of whitespace into a single space, trimming the ends.
/// No stemming, no accent folding, no punctuation stripping.
///
/// `"  Python  3.10 "` → `"python 3.10"`. Idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Skill matcher
// ────────────────────────────────────────────────────────────────────────────

/// Whether a candidate skill satisfies a job skill requirement.
///
/// Policy: bidirectional substring containment over normalized strings, so
/// "python" matches "python 3.10" and vice versa. Deliberately permissive —
/// short tokens like "py" will match "python". A skill that normalizes to the
/// empty string matches everything; that falls out of `str::contains` and is
/// intentionally not special-cased.
pub fn skill_matches(candidate_skill: &str, job_skill: &str) -> bool {
    let c = normalize(candidate_skill);
    let j = normalize(job_skill);
    c.contains(&j) || j.contains(&c)
}

// ────────────────────────────────────────────────────────────────────────────
// Score composer
// ────────────────────────────────────────────────────────────────────────────

/// Computes the four-part compatibility score for a candidate against a job.
///
/// Composition of the final score:
/// - 50% keyword score     → required skills the candidate has
/// - 30% experience score  → years of experience vs the job minimum
/// - 20% hard-skills score → preferred skills the candidate has
///
/// Experience rule: a candidate matching fewer than 30% of the required
/// skills gets zero experience credit regardless of years, so strong tenure
/// cannot inflate the score of an out-of-profile candidate.
pub fn score(candidate: &CandidateProfile, job: &JobProfile) -> ScoreResult {
    // Normalize each list once; matching below runs on the canonical forms.
    let candidate_skills = normalize_all(&candidate.technical_skills);
    let required_skills = normalize_all(&job.required_skills);
    let preferred_skills = normalize_all(&job.preferred_skills);

    let keyword_score = coverage(&candidate_skills, &required_skills);
    let hard_skills_score = coverage(&candidate_skills, &preferred_skills);

    let experience_score = if keyword_score < MIN_TECHNICAL_FIT {
        0.0
    } else if candidate.years_of_experience >= job.min_years_experience {
        100.0
    } else if job.min_years_experience == 0 {
        // Unreachable: 0 >= 0 always takes the branch above. Guarded anyway
        // so a refactor of the ordering cannot introduce a division by zero.
        100.0
    } else {
        candidate.years_of_experience as f64 / job.min_years_experience as f64 * 100.0
    };

    let final_score = keyword_score * KEYWORD_WEIGHT
        + experience_score * EXPERIENCE_WEIGHT
        + hard_skills_score * HARD_SKILLS_WEIGHT;

    ScoreResult {
        keyword_score: round2(keyword_score),
        experience_score: round2(experience_score),
        hard_skills_score: round2(hard_skills_score),
        final_score: round2(final_score),
    }
}

fn normalize_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| normalize(s)).collect()
}

/// Percentage of `wanted` skills with at least one match in `held`.
/// Returns 0 for an empty `wanted` list. Both slices must be pre-normalized.
fn coverage(held: &[String], wanted: &[String]) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    let matched = wanted
        .iter()
        .filter(|w| held.iter().any(|h| h.contains(w.as_str()) || w.contains(h.as_str())))
        .count();
    matched as f64 / wanted.len() as f64 * 100.0
}

/// Round half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(skills: &[&str], years: u32) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            level: "Mid".to_string(),
            years_of_experience: years,
            technical_skills: skills.iter().map(|s| s.to_string()).collect(),
            soft_skills: vec!["Communication".to_string()],
            education: None,
            professional_summary: "A candidate.".to_string(),
        }
    }

    fn job(required: &[&str], preferred: &[&str], min_years: u32) -> JobProfile {
        JobProfile {
            title: "Backend Engineer".to_string(),
            expected_level: "Senior".to_string(),
            min_years_experience: min_years,
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            min_education: "Bachelor's degree".to_string(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 0.01,
            "expected {expected}, got {actual}"
        );
    }

    // ── normalizer ──────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Python  3.10 "), "python 3.10");
        assert_eq!(normalize("Rust\t\nDeveloper"), "rust developer");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize("C++ / C#"), "c++ / c#");
        assert_eq!(normalize("Node.js"), "node.js");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["  Python  3.10 ", "RUST", "", " \t\n ", "a  b   c"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize(" \t\n "), "");
    }

    // ── matcher ─────────────────────────────────────────────────────────────

    #[test]
    fn test_matches_exact_after_normalization() {
        assert!(skill_matches("  Python ", "python"));
    }

    #[test]
    fn test_matches_substring_both_directions() {
        assert!(skill_matches("python 3.10", "python"));
        assert!(skill_matches("python", "python 3.10"));
        // Known permissiveness: short tokens match longer ones.
        assert!(skill_matches("py", "python"));
    }

    #[test]
    fn test_matches_is_symmetric() {
        let pairs = [
            ("python", "python 3.10"),
            ("java", "javascript"),
            ("rust", "go"),
            ("", "anything"),
        ];
        for (a, b) in pairs {
            assert_eq!(skill_matches(a, b), skill_matches(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_empty_skill_matches_everything() {
        // An empty normalized string is a substring of every string.
        assert!(skill_matches("", "python"));
        assert!(skill_matches("   ", "docker"));
        assert!(skill_matches("", ""));
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        assert!(!skill_matches("rust", "python"));
        assert!(!skill_matches("docker", "kubernetes"));
    }

    // ── composer: end-to-end cases ──────────────────────────────────────────

    #[test]
    fn test_partial_required_with_partial_experience() {
        // skills ["Python","Docker"] vs required ["python","aws"], preferred
        // ["docker"], 3 of 5 required years:
        // keyword 50, experience 60, hard skills 100, final 63.
        let c = candidate(&["Python", "Docker"], 3);
        let j = job(&["python", "aws"], &["docker"], 5);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 50.0);
        assert_close(s.experience_score, 60.0);
        assert_close(s.hard_skills_score, 100.0);
        assert_close(s.final_score, 63.0);
    }

    #[test]
    fn test_empty_skill_lists_score_zero() {
        let c = candidate(&["Python"], 10);
        let j = job(&[], &[], 2);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 0.0);
        assert_close(s.hard_skills_score, 0.0);
        // keyword 0 < 30 suppresses experience despite 10 >= 2.
        assert_close(s.experience_score, 0.0);
        assert_close(s.final_score, 0.0);
    }

    #[test]
    fn test_low_technical_fit_voids_experience_credit() {
        // 1 of 5 required (20% < 30%) and 10 years vs min 2: the years are
        // not counted.
        let c = candidate(&["Python"], 10);
        let j = job(&["python", "aws", "kafka", "terraform", "go"], &[], 2);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 20.0);
        assert_close(s.experience_score, 0.0);
        assert_close(s.final_score, 10.0);
    }

    #[test]
    fn test_messy_whitespace_skill_still_counts() {
        let c = candidate(&["  Python   3 "], 5);
        let j = job(&["python"], &[], 5);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 100.0);
    }

    // ── composer: properties ────────────────────────────────────────────────

    #[test]
    fn test_scores_stay_in_bounds() {
        let cases = [
            (candidate(&[], 0), job(&[], &[], 0)),
            (candidate(&["python"], 50), job(&["python"], &["python"], 1)),
            (candidate(&["a", "b", "c"], 2), job(&["a", "x"], &["b", "y"], 9)),
            (candidate(&[""], 1), job(&["python"], &["docker"], 3)),
        ];
        for (c, j) in cases {
            let s = score(&c, &j);
            for value in [
                s.keyword_score,
                s.experience_score,
                s.hard_skills_score,
                s.final_score,
            ] {
                assert!(value.is_finite());
                assert!((0.0..=100.0).contains(&value), "out of bounds: {value}");
            }
        }
    }

    #[test]
    fn test_meeting_minimum_years_gives_full_experience_credit() {
        let c = candidate(&["python"], 5);
        let j = job(&["python"], &[], 5);
        let s = score(&c, &j);
        assert_close(s.experience_score, 100.0);
    }

    #[test]
    fn test_zero_minimum_years_gives_full_experience_credit() {
        let c = candidate(&["python"], 0);
        let j = job(&["python"], &[], 0);
        let s = score(&c, &j);
        assert_close(s.experience_score, 100.0);
    }

    #[test]
    fn test_final_score_is_weighted_composite() {
        let c = candidate(&["python", "docker", "aws"], 2);
        let j = job(&["python", "aws"], &["docker", "kafka"], 4);
        let s = score(&c, &j);
        let expected = s.keyword_score * KEYWORD_WEIGHT
            + s.experience_score * EXPERIENCE_WEIGHT
            + s.hard_skills_score * HARD_SKILLS_WEIGHT;
        assert_close(s.final_score, expected);
    }

    #[test]
    fn test_score_is_deterministic() {
        let c = candidate(&["Python", "Docker", "AWS"], 3);
        let j = job(&["python", "kafka"], &["docker"], 6);
        assert_eq!(score(&c, &j), score(&c, &j));
    }

    #[test]
    fn test_duplicate_candidate_skills_do_not_double_count() {
        let c = candidate(&["python", "Python", "python 3"], 5);
        let j = job(&["python", "go"], &[], 5);
        let s = score(&c, &j);
        // Only one of two required skills is covered, however many variants
        // the candidate lists.
        assert_close(s.keyword_score, 50.0);
    }

    #[test]
    fn test_empty_required_skill_entry_matches_anything() {
        // A required skill that normalizes to "" is contained in every
        // candidate skill, so it always counts as matched.
        let c = candidate(&["rust"], 1);
        let j = job(&["  ", "cobol"], &[], 1);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 50.0);
    }

    #[test]
    fn test_partial_experience_is_linear() {
        let c = candidate(&["python"], 1);
        let j = job(&["python"], &[], 4);
        let s = score(&c, &j);
        assert_close(s.experience_score, 25.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 1 of 3 required: 33.333... → 33.33.
        let c = candidate(&["python"], 5);
        let j = job(&["python", "aws", "go"], &[], 5);
        let s = score(&c, &j);
        assert_close(s.keyword_score, 33.33);
    }
}
