use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// Form sections, in the order they are filled in.
const SECTIONS: &[&str] = &[
    "personal",
    "summary",
    "education",
    "skills",
    "experience",
    "projects",
    "certifications",
    "additional",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub percent: f64,
    pub completed: usize,
    pub total: usize,
    pub completed_sections: Vec<String>,
    pub missing_sections: Vec<String>,
    pub message: String,
}

pub fn compute_progress(resume: &ResumeRecord) -> ProgressReport {
    let mut completed_sections = Vec::new();
    let mut missing_sections = Vec::new();

    for section in SECTIONS {
        if section_complete(resume, section) {
            completed_sections.push(section.to_string());
        } else {
            missing_sections.push(section.to_string());
        }
    }

    let completed = completed_sections.len();
    let total = SECTIONS.len();
    let percent = completed as f64 / total as f64 * 100.0;

    ProgressReport {
        percent,
        completed,
        total,
        completed_sections,
        missing_sections,
        message: progress_message(percent).to_string(),
    }
}

fn section_complete(resume: &ResumeRecord, section: &str) -> bool {
    match section {
        "personal" => {
            let details = &resume.personal_details;
            details.has_contact() && !details.phone.trim().is_empty()
        }
        "summary" => !resume.personal_summary.trim().is_empty(),
        "education" => !resume.education.is_empty(),
        "skills" => !resume.skills.technical.is_empty(),
        "experience" => !resume.experience.is_empty(),
        "projects" => !resume.projects.is_empty(),
        "certifications" => !resume.certifications.is_empty(),
        "additional" => !resume.additional_info.trim().is_empty(),
        _ => false,
    }
}

fn progress_message(percent: f64) -> &'static str {
    match percent {
        p if p >= 100.0 => "Resume complete! Ready to download",
        p if p >= 75.0 => "Almost there! Just a few more sections",
        p if p >= 50.0 => "Great progress! Keep going",
        p if p >= 25.0 => "Good start! Continue building",
        _ => "Let's build your resume!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalDetails, ProjectEntry, Skills,
    };

    fn complete_resume() -> ResumeRecord {
        ResumeRecord {
            personal_details: PersonalDetails {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                ..Default::default()
            },
            personal_summary: "Mathematician".to_string(),
            education: vec![EducationEntry::default()],
            skills: Skills {
                technical: vec!["Rust".to_string()],
                soft: vec![],
            },
            experience: vec![ExperienceEntry::default()],
            projects: vec![ProjectEntry::default()],
            certifications: vec![CertificationEntry::default()],
            additional_info: "Fluent in French".to_string(),
        }
    }

    #[test]
    fn test_empty_resume_has_no_progress() {
        let report = compute_progress(&ResumeRecord::default());
        assert_eq!(report.completed, 0);
        assert_eq!(report.total, 8);
        assert_eq!(report.percent, 0.0);
        assert_eq!(report.missing_sections.len(), 8);
        assert_eq!(report.message, "Let's build your resume!");
    }

    #[test]
    fn test_complete_resume() {
        let report = compute_progress(&complete_resume());
        assert_eq!(report.completed, 8);
        assert_eq!(report.percent, 100.0);
        assert!(report.missing_sections.is_empty());
        assert_eq!(report.completed_sections, SECTIONS);
        assert!(report.message.starts_with("Resume complete"));
    }

    #[test]
    fn test_personal_requires_phone() {
        let mut resume = complete_resume();
        resume.personal_details.phone.clear();
        let report = compute_progress(&resume);
        assert_eq!(report.completed, 7);
        assert_eq!(report.missing_sections, vec!["personal"]);
        assert_eq!(report.percent, 87.5);
        assert!(report.message.starts_with("Almost there"));
    }

    #[test]
    fn test_soft_skills_alone_do_not_complete_skills() {
        let resume = ResumeRecord {
            skills: Skills {
                technical: vec![],
                soft: vec!["Empathy".to_string()],
            },
            ..Default::default()
        };
        assert!(compute_progress(&resume)
            .missing_sections
            .contains(&"skills".to_string()));
    }

    #[test]
    fn test_message_thresholds() {
        assert_eq!(progress_message(25.0), "Good start! Continue building");
        assert_eq!(progress_message(50.0), "Great progress! Keep going");
        assert_eq!(progress_message(62.5), "Great progress! Keep going");
        assert_eq!(progress_message(12.5), "Let's build your resume!");
    }
}
