//! Document text extraction for the résumé formats we accept (PDF, DOCX).
//! Returns plain text for the extraction oracle; anything else is an
//! `UnsupportedFormat` error.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use regex::Regex;

use crate::errors::AppError;

/// Extracts plain text from a résumé file, dispatching on the extension.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        other => Err(AppError::UnsupportedFormat(format!(
            "'{}': unsupported extension '.{other}' (expected .pdf or .docx)",
            path.display()
        ))),
    }
}

/// Whether a directory entry looks like a résumé we can process.
pub fn is_resume_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref(),
        Some("pdf") | Some("docx")
    )
}

fn extract_pdf(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path)
        .with_context(|| format!("Failed to extract PDF text from {}", path.display()))?;
    Ok(text)
}

/// A .docx file is a ZIP container; the document body lives in
/// `word/document.xml`. We pull paragraph text straight out of the XML —
/// formatting, headers, and embedded objects are irrelevant to the oracle.
fn extract_docx(path: &Path) -> Result<String, AppError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("{} is not a valid DOCX container", path.display()))?;
    let mut document = archive
        .by_name("word/document.xml")
        .with_context(|| format!("{} has no word/document.xml entry", path.display()))?;

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    Ok(document_xml_to_text(&xml))
}

/// Converts WordprocessingML to plain text: paragraph ends become newlines,
/// every other tag is dropped, basic entities are decoded.
fn document_xml_to_text(xml: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

    let with_breaks = xml.replace("</w:p>", "\n");
    let stripped = tag.replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
