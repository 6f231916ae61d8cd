// Screening: batch pipeline over a résumé directory, result persistence,
// and the HTTP handlers that drive them. All profile extraction goes through
// the Extractor trait — no direct LLM calls here.

pub mod handlers;
pub mod pipeline;
pub mod storage;
