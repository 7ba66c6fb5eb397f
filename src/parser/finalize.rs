use tracing::debug;

use super::extract::contact::normalize_phone;
use super::links::{find_code_host_profile, find_professional_profile};
use super::patterns::strip_prefix_ci;
use super::ParsedResume;

const MIN_LINK_LEN: usize = 5;
const KEPT_PREFIXES: &[&str] = &["http", "mailto:", "tel:"];

/// Trimmed links that are long enough and carry a usable scheme.
pub fn clean_links(links: &[String]) -> Vec<String> {
    links
        .iter()
        .map(|l| l.trim())
        .filter(|l| l.chars().count() >= MIN_LINK_LEN)
        .filter(|l| KEPT_PREFIXES.iter().any(|p| strip_prefix_ci(l, p).is_some()))
        .map(str::to_string)
        .collect()
}

/// Second stage over an already parsed record: clean the link list, re-derive
/// profile URLs from it, and let `mailto:`/`tel:` links replace the
/// text-derived email and phone. The last such link wins.
pub fn finalize(mut resume: ParsedResume) -> ParsedResume {
    let cleaned = clean_links(&resume.links);
    debug!(before = resume.links.len(), after = cleaned.len(), "cleaned links");

    if let Some(url) = find_code_host_profile(&cleaned) {
        resume.code_host_profile_url = url;
    }
    if let Some(url) = find_professional_profile(&cleaned) {
        resume.professional_profile_url = url;
    }

    // Last contact link wins; links that carry no address or digits are skipped.
    for link in &cleaned {
        if let Some(addr) = strip_prefix_ci(link, "mailto:") {
            let addr = addr.trim();
            if !addr.is_empty() {
                resume.email = addr.to_lowercase();
            }
        }
        if let Some(num) = strip_prefix_ci(link, "tel:") {
            let digits: String = num.chars().filter(char::is_ascii_digit).collect();
            if !digits.is_empty() {
                resume.phone = normalize_phone(&digits);
            }
        }
    }

    resume.links = cleaned;
    resume
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn drops_short_and_schemeless() {
        let cleaned = clean_links(&links(&["  https://a.io  ", "tel:", "ftp://files.example", "x.com", "MAILTO:a@b.co"]));
        assert_eq!(cleaned, links(&["https://a.io", "MAILTO:a@b.co"]));
    }

    #[test]
    fn mailto_overrides_text_email() {
        let resume = parse("someone@text.example", &links(&["mailto: Jane.Roe@Example.COM "]));
        assert_eq!(resume.email, "someone@text.example");
        let resume = finalize(resume);
        assert_eq!(resume.email, "jane.roe@example.com");
    }

    #[test]
    fn last_tel_wins() {
        let external = links(&["tel:+91 98765 43210", "tel:+1 (415) 555-0123"]);
        let resume = finalize(parse("Call 91234 56780", &external));
        assert_eq!(resume.phone, "+14155550123");
    }

    #[test]
    fn empty_contact_links_do_not_override() {
        let external = links(&["tel:+x", "mailto:   "]);
        let resume = finalize(parse("a@b.co\n9876543210", &external));
        assert_eq!(resume.phone, "+91-9876543210");
        assert_eq!(resume.email, "a@b.co");
    }

    #[test]
    fn tel_digits_normalized() {
        let resume = finalize(parse("", &links(&["tel:+919876543210"])));
        assert_eq!(resume.phone, "+91-9876543210");
    }

    #[test]
    fn profiles_rederived_from_cleaned_links() {
        let external = links(&[" https://github.com/octo ", "https://www.linkedin.com/in/octo"]);
        let resume = parse("", &external);
        // The padded link does not satisfy the anchored pattern before cleanup.
        assert_eq!(resume.code_host_profile_url, "");
        let resume = finalize(resume);
        assert_eq!(resume.code_host_profile_url, "https://github.com/octo");
        assert_eq!(resume.professional_profile_url, "https://www.linkedin.com/in/octo");
    }

    #[test]
    fn keeps_text_values_without_contact_links() {
        let resume = finalize(parse("a@b.co\n9876543210", &[]));
        assert_eq!(resume.email, "a@b.co");
        assert_eq!(resume.phone, "+91-9876543210");
    }
}
