pub mod achievements;
pub mod contact;
pub mod education;
pub mod projects;
pub mod skills;

use super::sections::Sections;

pub struct ExtractedFields {
    pub email: String,
    pub phone: String,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

pub fn extract_all(text: &str, external_links: &[String], sections: &Sections) -> ExtractedFields {
    ExtractedFields {
        email: contact::find_email(text),
        phone: contact::find_phone(text, external_links),
        education: education::extract(sections.first_non_empty(&["education"])),
        projects: projects::extract(sections.first_non_empty(&["projects", "project"])),
        skills: skills::extract(sections.first_non_empty(&["technical skills", "skills"])),
        achievements: achievements::extract(sections.first_non_empty(&["achievements", "honors"])),
    }
}

// ── Tests ──
