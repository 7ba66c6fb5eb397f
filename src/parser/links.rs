use std::collections::HashSet;

use super::patterns::{strip_prefix_ci, GITHUB_PROFILE_RE, LINKEDIN_PROFILE_RE, URL_RE};

const SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// Give scheme-less URLs an `https://` scheme. Output always carries a
/// scheme, so applying this twice changes nothing.
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() || has_scheme(url) {
        return url.to_string();
    }
    format!("https://{}", url.trim_start_matches('/'))
}

pub fn has_scheme(url: &str) -> bool {
    SCHEMES.iter().any(|s| strip_prefix_ci(url, s).is_some())
}

/// Every URL-like substring, left to right, duplicates kept.
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_RE.find_iter(text).map(|m| m.as_str())
}

/// External links first (exact-string dedup), then in-text URLs in
/// normalized form that are not already present.
pub fn merge_links(external: &[String], text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for link in external {
        if seen.insert(link.clone()) {
            merged.push(link.clone());
        }
    }
    for url in find_urls(text) {
        let url = normalize_url(url);
        if seen.insert(url.clone()) {
            merged.push(url);
        }
    }

    merged
}

pub fn find_professional_profile<S: AsRef<str>>(links: &[S]) -> Option<String> {
    links
        .iter()
        .find_map(|l| LINKEDIN_PROFILE_RE.find(l.as_ref()))
        .map(|m| m.as_str().to_string())
}

pub fn find_code_host_profile<S: AsRef<str>>(links: &[S]) -> Option<String> {
    links
        .iter()
        .find_map(|l| GITHUB_PROFILE_RE.find(l.as_ref()))
        .map(|m| m.as_str().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_scheme() {
        assert_eq!(normalize_url("github.com/johndoe"), "https://github.com/johndoe");
        assert_eq!(normalize_url("//cdn.example.com/x"), "https://cdn.example.com/x");
        assert_eq!(normalize_url("http://a.com"), "http://a.com");
        assert_eq!(normalize_url("HTTPS://A.COM"), "HTTPS://A.COM");
        assert_eq!(normalize_url("mailto:x@y.z"), "mailto:x@y.z");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for u in ["a.com", "/a.com", "https://a.com", "http://a.com/x", "", "tel:+1", "www.b.org", "///"] {
            let once = normalize_url(u);
            assert_eq!(normalize_url(&once), once, "not idempotent for {u:?}");
        }
    }

    #[test]
    fn find_urls_keeps_order_and_duplicates() {
        let urls: Vec<_> = find_urls("see a.com and https://b.io/x then a.com").collect();
        assert_eq!(urls, vec!["a.com", "https://b.io/x", "a.com"]);
    }

    #[test]
    fn merge_external_first_then_text() {
        let external = vec!["https://a.com".to_string()];
        let merged = merge_links(&external, "a.com\nb.com");
        assert_eq!(merged, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn merge_dedups_external_exactly() {
        let external = vec![
            "https://x.dev".to_string(),
            "tel:+919876543210".to_string(),
            "https://x.dev".to_string(),
        ];
        let merged = merge_links(&external, "");
        assert_eq!(merged, vec!["https://x.dev", "tel:+919876543210"]);
    }

    #[test]
    fn profiles_take_first_match() {
        let links = vec![
            "https://github.com/acme/repo",
            "https://www.linkedin.com/company/acme",
            "https://github.com/johndoe",
            "https://linkedin.com/in/johndoe/",
            "https://github.com/janedoe",
        ];
        assert_eq!(find_code_host_profile(&links).as_deref(), Some("https://github.com/johndoe"));
        assert_eq!(
            find_professional_profile(&links).as_deref(),
            Some("https://linkedin.com/in/johndoe/")
        );
    }

    #[test]
    fn profiles_absent() {
        let links: Vec<String> = vec!["https://example.com".into()];
        assert!(find_code_host_profile(&links).is_none());
        assert!(find_professional_profile(&links).is_none());
    }
}
