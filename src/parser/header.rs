use super::lines::LineEntry;
use super::patterns::{is_email_like, is_phone_like, is_url_like};

const NO_SECTION_HEADER_LINES: usize = 4;
const MAX_NAME_CANDIDATES: usize = 6;
const MAX_NAME_WORDS: usize = 4;

/// Lines before the first section title, or the first few lines when the
/// document has no recognizable section at all.
pub fn header_candidates(entries: &[LineEntry]) -> Vec<&str> {
    let end = entries
        .iter()
        .position(|e| e.category.section_title().is_some())
        .unwrap_or(NO_SECTION_HEADER_LINES.min(entries.len()));
    entries[..end].iter().map(|e| e.text.as_str()).collect()
}

pub fn guess_name(candidates: &[&str]) -> String {
    candidates
        .iter()
        .take(MAX_NAME_CANDIDATES)
        .map(|l| l.trim())
        .filter(|l| !is_email_like(l) && !is_phone_like(l) && !is_url_like(l))
        .find(|l| {
            let words = l.split_whitespace().count();
            (1..=MAX_NAME_WORDS).contains(&words) && l.chars().any(|c| c.is_ascii_alphabetic())
        })
        .or_else(|| candidates.first().map(|l| l.trim()))
        .unwrap_or_default()
        .to_string()
}

// ── Tests ──
