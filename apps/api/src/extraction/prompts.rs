// All LLM prompt constants for the extraction oracle.

/// System prompt for résumé analysis — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert technical recruiter. \
    Analyze a résumé and extract structured information about the candidate. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Résumé analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Analyze the following résumé and extract structured information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Jane Doe",
  "level": "Mid",
  "years_of_experience": 4,
  "technical_skills": ["Python", "FastAPI", "Docker"],
  "soft_skills": ["Communication", "Teamwork"],
  "education": "BSc in Computer Science",
  "professional_summary": "Backend developer focused on APIs and infrastructure."
}

Rules:
- "level" is one of: "No Experience", "Intern", "Junior", "Mid", "Senior".
- "years_of_experience" is your best whole-number estimate, never negative.
- "technical_skills" lists concrete technologies, languages, frameworks, tools.
- "soft_skills" lists interpersonal and organizational skills.
- "education" may be null if the résumé lists no formal education.
- "professional_summary" is an objective two-sentence summary.

RÉSUMÉ:
{resume_text}"#;

/// System prompt for job-posting analysis — enforces JSON-only output.
pub const JOB_PARSE_SYSTEM: &str =
    "You are an expert technical recruiter. \
    Analyze a job description and extract structured requirements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job analysis prompt template. Replace `{job_text}` before sending.
pub const JOB_PARSE_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract structured requirements.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Senior Backend Engineer",
  "expected_level": "Senior",
  "min_years_experience": 5,
  "required_skills": ["Python", "AWS"],
  "preferred_skills": ["Docker", "Kubernetes"],
  "min_education": "Bachelor's degree in a technical field"
}

Rules:
- "expected_level" is one of: "No Experience", "Intern", "Junior", "Mid", "Senior".
- "min_years_experience" is the minimum required, 0 if the posting names none.
- "required_skills" are must-haves; "preferred_skills" are nice-to-haves.
- "min_education" is the minimum education the posting asks for, or "" if none.

JOB DESCRIPTION:
{job_text}"#;
