use serde::{Deserialize, Serialize};

/// Snapshot of everything the resume form has captured so far.
///
/// Owned and mutated by the form layer; analysis and profile code only read it.
/// Every field defaults so partially filled forms deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_details: PersonalDetails,
    pub personal_summary: String,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub additional_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree_type: String,
    pub field_of_study: String,
    pub score: String,
    /// "percentage" | "cgpa"
    pub score_type: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    /// Bullet lines, in display order.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    /// Free text as typed, e.g. "Rust, Tokio, PostgreSQL".
    pub technologies: String,
    pub duration: String,
    pub description: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub hosted_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub certificate_link: String,
}

impl PersonalDetails {
    /// Name and email are the minimum for a contactable resume.
    pub fn has_contact(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}
