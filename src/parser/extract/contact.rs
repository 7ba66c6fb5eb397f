use tracing::trace;

use crate::parser::patterns::{phone_chars, strip_prefix_ci, EMAIL_RE, PHONE_RE};

const MIN_PHONE_DIGITS: usize = 7;
const REGION_CODE: &str = "91";

pub fn find_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Longest plausible phone number in `text`, else the first `tel:` link.
pub fn find_phone(text: &str, external_links: &[String]) -> String {
    let best = PHONE_RE
        .find_iter(text)
        .map(|m| phone_chars(m.as_str()))
        .filter(|p| digit_count(p) >= MIN_PHONE_DIGITS)
        // Keep the earliest among equally long candidates.
        .reduce(|best, p| if p.len() > best.len() { p } else { best });

    if let Some(phone) = best {
        trace!(%phone, "phone candidate from text");
        return normalize_phone(&phone);
    }

    external_links
        .iter()
        .filter_map(|l| strip_prefix_ci(l, "tel:"))
        .map(phone_chars)
        .find(|num| digit_count(num) > 0)
        .map(|num| normalize_phone(&num))
        .unwrap_or_default()
}

/// Regional dialing convention: Indian numbers become `+91-XXXXXXXXXX`,
/// everything else `+<digits>`.
pub fn normalize_phone(raw: &str) -> String {
    let d = phone_chars(raw);
    let digits: String = d.chars().filter(char::is_ascii_digit).collect();

    if d.starts_with(REGION_CODE) && d.len() == 12 {
        format!("+91-{}", &d[2..])
    } else if digits.len() == 10 {
        format!("+91-{digits}")
    } else if d.starts_with("+91") && d.len() == 13 {
        format!("+91-{}", &d[3..])
    } else {
        format!("+{digits}")
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

// ── Tests ──
