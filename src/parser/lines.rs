use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use super::links::{find_urls, normalize_url};
use super::patterns::{
    is_email_like, is_phone_like, is_url_like, phone_chars, strip_prefix_ci, EMAIL_RE, LINE_BREAK_RE,
    NUMBERED_RE,
};

/// Known section headings, matched as prefixes of the lower-cased line.
/// Order decides ties: the first listed title that matches wins.
pub const SECTION_TITLES: &[&str] = &[
    "education",
    "projects",
    "technical skills",
    "skills",
    "achievements",
    "coding profiles",
    "positions of responsibility",
    "experience",
    "positions",
];

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ContactEmail,
    ContactPhone,
    Link,
    Section(&'static str),
    Bullet,
    Paragraph,
}

impl Category {
    pub fn section_title(self) -> Option<&'static str> {
        match self {
            Category::Section(title) => Some(title),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::ContactEmail => f.write_str("contact:email"),
            Category::ContactPhone => f.write_str("contact:phone"),
            Category::Link => f.write_str("link"),
            Category::Section(title) => write!(f, "section:{title}"),
            Category::Bullet => f.write_str("bullet"),
            Category::Paragraph => f.write_str("paragraph"),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Payload attached to the categories that carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Extracted {
    Email(String),
    Phone(String),
    Urls(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEntry {
    pub text: String,
    #[serde(rename = "line_no")]
    pub line_number: usize,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(flatten)]
    pub extracted: Option<Extracted>,
}

type Rule = fn(&str) -> Option<Category>;

// Evaluated top to bottom, first hit wins.
const RULES: &[Rule] = &[email_rule, phone_rule, link_rule, section_rule, bullet_rule];

fn email_rule(line: &str) -> Option<Category> {
    (is_email_like(line) || strip_prefix_ci(line, "mailto:").is_some()).then_some(Category::ContactEmail)
}

fn phone_rule(line: &str) -> Option<Category> {
    (is_phone_like(line) || strip_prefix_ci(line, "tel:").is_some()).then_some(Category::ContactPhone)
}

fn link_rule(line: &str) -> Option<Category> {
    is_url_like(line).then_some(Category::Link)
}

fn section_rule(line: &str) -> Option<Category> {
    let low = line.to_lowercase();
    SECTION_TITLES
        .iter()
        .copied()
        .find(|t| low.starts_with(*t))
        .map(Category::Section)
}

fn bullet_rule(line: &str) -> Option<Category> {
    (line.starts_with(BULLET_MARKERS) || NUMBERED_RE.is_match(line)).then_some(Category::Bullet)
}

/// Classify one line. The line is trimmed first; position in the document
/// plays no part.
pub fn classify_line(line: &str) -> Category {
    let line = line.trim();
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(Category::Paragraph)
}

fn extract_payload(line: &str, category: Category) -> Option<Extracted> {
    match category {
        Category::ContactEmail => {
            let rest = strip_prefix_ci(line, "mailto:").unwrap_or(line);
            let email = EMAIL_RE
                .find(rest)
                .map(|m| m.as_str())
                .unwrap_or(rest);
            Some(Extracted::Email(email.to_string()))
        }
        Category::ContactPhone => {
            let rest = strip_prefix_ci(line, "tel:").unwrap_or(line);
            Some(Extracted::Phone(phone_chars(rest)))
        }
        Category::Link => Some(Extracted::Urls(find_urls(line).map(normalize_url).collect())),
        _ => None,
    }
}

/// Annotate every non-blank line of `text`, keeping its 0-based position.
pub fn classify_lines(text: &str) -> Vec<LineEntry> {
    let entries: Vec<LineEntry> = LINE_BREAK_RE
        .split(text)
        .enumerate()
        .filter_map(|(line_number, raw)| {
            let line = raw.trim();
            if line.is_empty() {
                return None;
            }
            let category = classify_line(line);
            Some(LineEntry {
                text: line.to_string(),
                line_number,
                category,
                extracted: extract_payload(line, category),
            })
        })
        .collect();

    debug!(lines = entries.len(), "classified lines");
    entries
}

// ── Tests ──
