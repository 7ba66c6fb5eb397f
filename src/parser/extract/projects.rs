use crate::parser::patterns::PROJECT_SPLIT_RE;

const MAX_PROJECTS: usize = 20;

/// Split the section into project blocks on `--` rules, blank runs and
/// dash-led lines.
pub fn extract(lines: &[String]) -> Vec<String> {
    let raw = lines.join("\n");
    PROJECT_SPLIT_RE
        .split(&raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .take(MAX_PROJECTS)
        .map(str::to_string)
        .collect()
}

// ── Tests ──
