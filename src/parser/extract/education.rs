use crate::parser::patterns::{DEGREE_RE, YEAR_RE};

const FALLBACK_LINES: usize = 4;

/// Degree and year lines; when none look like either, the first few lines.
pub fn extract(lines: &[String]) -> Vec<String> {
    let matched: Vec<String> = lines
        .iter()
        .filter(|l| DEGREE_RE.is_match(l) || YEAR_RE.is_match(l))
        .cloned()
        .collect();

    if matched.is_empty() {
        lines.iter().take(FALLBACK_LINES).cloned().collect()
    } else {
        matched
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn keeps_degree_and_year_lines() {
        let lines = owned(&[
            "XYZ University",
            "BTech, Computer Science, CGPA 8.5",
            "Graduated 2020",
            "Relevant coursework: compilers",
            "Senior School Certificate",
        ]);
        assert_eq!(
            extract(&lines),
            owned(&[
                "BTech, Computer Science, CGPA 8.5",
                "Graduated 2020",
                "Senior School Certificate",
            ])
        );
    }

    #[test]
    fn degree_match_ignores_case() {
        let lines = owned(&["master of science", "phd candidate"]);
        assert_eq!(extract(&lines).len(), 2);
    }

    #[test]
    fn years_outside_range_do_not_count() {
        let lines = owned(&["Room 1899", "Suite 2100"]);
        assert_eq!(extract(&lines), lines);
    }

    #[test]
    fn falls_back_to_first_four() {
        let lines = owned(&["A", "B", "C", "D", "E"]);
        assert_eq!(extract(&lines), owned(&["A", "B", "C", "D"]));
    }

    #[test]
    fn empty_section() {
        assert!(extract(&[]).is_empty());
    }
}
