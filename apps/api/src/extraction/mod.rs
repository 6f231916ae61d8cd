// Extraction layer: turns résumé/job files into typed profiles.
// Text extraction and hashing are local; profile extraction goes through
// the LLM via llm_client — no direct API calls here.

pub mod hash;
pub mod oracle;
pub mod prompts;
pub mod text;
