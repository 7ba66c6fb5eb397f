use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use regex::bytes::Regex;

use super::Document;
use crate::parser::patterns::strip_prefix_ci;

// `/URI (literal)` or `/URI <hex>` inside a link annotation's action dictionary.
static URI_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)/URI\s*\(((?:[^()\\]|\\.)*)\)").unwrap());
static URI_HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/URI\s*<([0-9A-Fa-f\s]*)>").unwrap());

const LINK_PREFIXES: &[&str] = &["http", "mailto:", "tel:"];

pub fn extract(bytes: &[u8]) -> Result<Document, String> {
    // pdf-extract panics on some malformed font tables instead of erroring.
    let text = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|_| "pdf extractor panicked".to_string())?
        .map_err(|e| e.to_string())?;

    Ok(Document {
        text,
        links: uri_links(bytes),
    })
}

/// Hyperlink targets from annotation actions, filtered to web/mail/phone
/// links and deduplicated in first-seen order.
pub fn uri_links(bytes: &[u8]) -> Vec<String> {
    let literals = URI_LITERAL_RE
        .captures_iter(bytes)
        .map(|c| unescape_literal(&c[1]));
    let hex = URI_HEX_RE.captures_iter(bytes).filter_map(|c| decode_hex(&c[1]));

    let mut seen = HashSet::new();
    literals
        .chain(hex)
        .map(|uri| uri.trim().to_string())
        .filter(|uri| LINK_PREFIXES.iter().any(|p| strip_prefix_ci(uri, p).is_some()))
        .filter(|uri| seen.insert(uri.clone()))
        .collect()
}

fn unescape_literal(raw: &[u8]) -> String {
    let mut out = Vec::with_capacity(raw.len());
    let mut iter = raw.iter().copied();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match iter.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn decode_hex(raw: &[u8]) -> Option<String> {
    let digits: Vec<u8> = raw.iter().copied().filter(|b| b.is_ascii_hexdigit()).collect();
    let bytes = digits
        .chunks(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).ok()?;
            // A trailing odd digit is padded with 0.
            u8::from_str_radix(&format!("{s:0<2}"), 16).ok()
        })
        .collect::<Option<Vec<u8>>>()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

// ── Tests ──
