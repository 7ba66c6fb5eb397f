use serde::Serialize;

use crate::parser::lines::LineEntry;
use crate::parser::sections::Sections;
use crate::parser::ParsedResume;

/// Weighted completeness. Weights sum to 100.
const WEIGHTS: &[(Field, u32)] = &[
    (Field::Name, 10),
    (Field::Email, 10),
    (Field::Phone, 10),
    (Field::ProfessionalProfile, 10),
    (Field::CodeHostProfile, 10),
    (Field::Education, 15),
    (Field::Projects, 15),
    (Field::Skills, 15),
    (Field::Achievements, 5),
];

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Email,
    Phone,
    ProfessionalProfile,
    CodeHostProfile,
    Education,
    Projects,
    Skills,
    Achievements,
}

impl Field {
    fn is_filled(self, r: &ParsedResume) -> bool {
        match self {
            Field::Name => !r.name.trim().is_empty(),
            Field::Email => !r.email.trim().is_empty(),
            Field::Phone => !r.phone.trim().is_empty(),
            Field::ProfessionalProfile => !r.professional_profile_url.trim().is_empty(),
            Field::CodeHostProfile => !r.code_host_profile_url.trim().is_empty(),
            Field::Education => !r.education.is_empty(),
            Field::Projects => !r.projects.is_empty(),
            Field::Skills => !r.skills.is_empty(),
            Field::Achievements => !r.achievements.is_empty(),
        }
    }
}

/// Percentage of weighted fields present, rounded to two decimals.
pub fn score(resume: &ParsedResume) -> f64 {
    let total: u32 = WEIGHTS.iter().map(|(_, w)| w).sum();
    let earned: u32 = WEIGHTS
        .iter()
        .filter(|(f, _)| f.is_filled(resume))
        .map(|(_, w)| w)
        .sum();
    let pct = f64::from(earned) / f64::from(total) * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Output record in its published key order.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub linkedin: &'a str,
    pub github: &'a str,
    pub education: &'a [String],
    pub projects: &'a [String],
    pub skills: &'a [String],
    pub achievements: &'a [String],
    pub raw_links: &'a [String],
    pub ordered: &'a [LineEntry],
    pub sections: &'a Sections,
    pub score: f64,
}

impl<'a> Report<'a> {
    pub fn new(r: &'a ParsedResume) -> Self {
        Report {
            name: &r.name,
            email: &r.email,
            phone: &r.phone,
            linkedin: &r.professional_profile_url,
            github: &r.code_host_profile_url,
            education: &r.education,
            projects: &r.projects,
            skills: &r.skills,
            achievements: &r.achievements,
            raw_links: &r.links,
            ordered: &r.annotated_lines,
            sections: &r.sections,
            score: score(r),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Aligned transcript of the annotated lines.
pub fn transcript_table(entries: &[LineEntry], text_width: usize) -> String {
    let mut out = format!("{:>4} | {:<36} | {}\n", "#", "Type", "Text");
    out.push_str(&"-".repeat(text_width + 46));
    out.push('\n');
    for e in entries {
        out.push_str(&format!(
            "{:>4} | {:<36} | {}\n",
            e.line_number,
            e.category.to_string(),
            truncate(&e.text, text_width)
        ));
    }
    out
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──
