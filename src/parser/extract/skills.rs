use std::collections::HashSet;

use crate::parser::patterns::SKILL_SPLIT_RE;

const MAX_SKILLS: usize = 100;

/// Comma/bullet/semicolon separated tokens, deduplicated ignoring case.
/// The first spelling seen is the one kept.
pub fn extract(lines: &[String]) -> Vec<String> {
    let raw = lines.join(" ");
    let mut seen = HashSet::new();

    SKILL_SPLIT_RE
        .split(&raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .take(MAX_SKILLS)
        .map(str::to_string)
        .collect()
}

// ── Tests ──
