use serde::ser::{Serialize, Serializer};
use tracing::debug;

use super::lines::LineEntry;

pub const HEADER: &str = "header";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

/// Section buckets in first-seen order. `header` always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<Section>,
}

impl Sections {
    fn new() -> Self {
        Sections {
            entries: vec![Section {
                title: HEADER.to_string(),
                lines: Vec::new(),
            }],
        }
    }

    fn bucket(&mut self, title: &str) -> &mut Vec<String> {
        let idx = match self.entries.iter().position(|s| s.title == title) {
            Some(idx) => idx,
            None => {
                self.entries.push(Section {
                    title: title.to_string(),
                    lines: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].lines
    }

    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.lines.as_slice())
    }

    /// Lines of the first of `titles` that has any, else empty.
    pub fn first_non_empty(&self, titles: &[&str]) -> &[String] {
        titles
            .iter()
            .filter_map(|t| self.get(t))
            .find(|lines| !lines.is_empty())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|s| (&s.title, &s.lines)))
    }
}

/// Group annotated lines under the most recent section title. Title lines
/// themselves are not stored; a repeated title keeps appending to its bucket.
pub fn segment(entries: &[LineEntry]) -> Sections {
    let mut sections = Sections::new();
    let mut current = HEADER;

    for entry in entries {
        if let Some(title) = entry.category.section_title() {
            current = title;
            sections.bucket(current);
            continue;
        }
        sections.bucket(current).push(entry.text.clone());
    }

    debug!(sections = ?sections.titles().collect::<Vec<_>>(), "segmented");
    sections
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::classify_lines;

    fn segment_text(text: &str) -> Sections {
        segment(&classify_lines(text))
    }

    #[test]
    fn education_and_projects() {
        let sections = segment_text("Education\nBTech CS 2021\nProjects\nChat App");
        let got: Vec<(&str, &[String])> = sections.iter().map(|s| (s.title.as_str(), s.lines.as_slice())).collect();
        assert_eq!(
            got,
            vec![
                ("header", &[][..]),
                ("education", &["BTech CS 2021".to_string()][..]),
                ("projects", &["Chat App".to_string()][..]),
            ]
        );
    }

    #[test]
    fn serializes_as_ordered_map() {
        let sections = segment_text("Education\nBTech CS 2021\nProjects\nChat App");
        let json = serde_json::to_string(&sections).unwrap();
        assert_eq!(
            json,
            r#"{"header":[],"education":["BTech CS 2021"],"projects":["Chat App"]}"#
        );
    }

    #[test]
    fn lines_before_first_title_go_to_header() {
        let sections = segment_text("Jane Roe\nBackend engineer\nSkills\nRust");
        assert_eq!(sections.get("header").unwrap(), ["Jane Roe", "Backend engineer"]);
        assert_eq!(sections.get("skills").unwrap(), ["Rust"]);
    }

    #[test]
    fn repeated_title_appends() {
        let sections = segment_text("Projects\nA\nSkills\nRust\nProjects\nB");
        assert_eq!(sections.get("projects").unwrap(), ["A", "B"]);
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn every_line_lands_in_one_bucket() {
        let text = std::fs::read_to_string("tests/fixtures/sectioned.txt").unwrap();
        let entries = classify_lines(&text);
        let titles = entries.iter().filter(|e| e.category.section_title().is_some()).count();
        let sections = segment(&entries);
        let stored: usize = sections.iter().map(|s| s.lines.len()).sum();
        assert_eq!(stored + titles, entries.len());
    }

    #[test]
    fn first_non_empty_falls_through() {
        let sections = segment_text("Skills\nTechnical Skills\nRust, Go");
        assert_eq!(sections.first_non_empty(&["skills", "technical skills"]), ["Rust, Go"]);
        assert!(sections.first_non_empty(&["honors"]).is_empty());
    }
}
