pub mod extract;
pub mod finalize;
pub mod header;
pub mod lines;
pub mod links;
pub mod patterns;
pub mod sections;

use lines::LineEntry;
use sections::Sections;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub professional_profile_url: String,
    pub code_host_profile_url: String,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub links: Vec<String>,
    pub annotated_lines: Vec<LineEntry>,
    pub sections: Sections,
}

/// Single pass: lines → header/sections → fields + links.
/// Pure in its inputs; nothing here can fail.
pub fn parse(text: &str, external_links: &[String]) -> ParsedResume {
    let annotated_lines = lines::classify_lines(text);
    let name = header::guess_name(&header::header_candidates(&annotated_lines));
    let sections = sections::segment(&annotated_lines);
    let fields = extract::extract_all(text, external_links, &sections);
    let all_links = links::merge_links(external_links, text);

    ParsedResume {
        name,
        email: fields.email,
        phone: fields.phone,
        professional_profile_url: links::find_professional_profile(&all_links).unwrap_or_default(),
        code_host_profile_url: links::find_code_host_profile(&all_links).unwrap_or_default(),
        education: fields.education,
        projects: fields.projects,
        skills: fields.skills,
        achievements: fields.achievements,
        links: all_links,
        annotated_lines,
        sections,
    }
}

/// Both stages: `parse` followed by link cleanup and contact overrides.
pub fn process(text: &str, external_links: &[String]) -> ParsedResume {
    finalize::finalize(parse(text, external_links))
}

// ── Tests ──
