use std::sync::LazyLock;

use regex::Regex;

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

// Optional country code, optional (area code), then 6-14 digit/separator chars ending in a digit.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{2,4}\)?[-.\s]?)?[\d\-.\s]{6,14}\d").unwrap()
});

pub static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?:/[A-Za-z0-9#?&=._\-/%+]*)?",
    )
    .unwrap()
});

pub static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

pub static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(Bachelor|B\.A|B\.S|BSc|BE|BTech|Master|M\.S|MSc|MBA|PhD|CGPA|Percentage|Senior School)\b",
    )
    .unwrap()
});

pub static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").unwrap());

pub static PROJECT_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n-{2,}|\n\n+|\n\s*–\s*|\n\s*-\s*").unwrap());

pub static SKILL_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,•\n;]+").unwrap());

// Line terminators, including a lone `\r`, form feeds and the Unicode line/paragraph separators.
pub static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap());

// Person profile only: company pages, job listings and posts live under other paths.
pub static LINKEDIN_PROFILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://(www\.)?linkedin\.com/in/[^/]+/?").unwrap());

// Root of an account, no repository segment.
pub static GITHUB_PROFILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://(www\.)?github\.com/[^/]+/?$").unwrap());

pub fn is_email_like(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_phone_like(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

pub fn is_url_like(s: &str) -> bool {
    URL_RE.is_match(s)
}

/// Keep only digits and `+`, the form every phone heuristic works on.
pub fn phone_chars(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

/// Case-insensitive `strip_prefix` for ASCII markers like `mailto:`.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_email_like("reach me at john.doe@example.com"));
        assert!(!is_email_like("john.doe at example dot com"));
    }

    #[test]
    fn phone_shape() {
        assert!(is_phone_like("+91 98765 43210"));
        assert!(is_phone_like("(415) 555-0123"));
        assert!(!is_phone_like("Class of 2021"));
    }

    #[test]
    fn url_shape() {
        assert!(is_url_like("github.com/johndoe"));
        assert!(is_url_like("https://www.linkedin.com/in/jane"));
        assert!(!is_url_like("Education"));
    }

    #[test]
    fn linkedin_profile_excludes_company_pages() {
        assert!(LINKEDIN_PROFILE_RE.is_match("https://www.linkedin.com/in/jane-doe/"));
        assert!(!LINKEDIN_PROFILE_RE.is_match("https://www.linkedin.com/company/acme"));
    }

    #[test]
    fn github_profile_excludes_repos() {
        assert!(GITHUB_PROFILE_RE.is_match("https://github.com/johndoe"));
        assert!(GITHUB_PROFILE_RE.is_match("https://github.com/johndoe/"));
        assert!(!GITHUB_PROFILE_RE.is_match("https://github.com/johndoe/chat-app"));
    }

    #[test]
    fn strip_marker_ignores_case() {
        assert_eq!(strip_prefix_ci("MAILTO:a@b.co", "mailto:"), Some("a@b.co"));
        assert_eq!(strip_prefix_ci("tel", "tel:"), None);
        assert_eq!(strip_prefix_ci("télé", "tel:"), None);
    }
}
