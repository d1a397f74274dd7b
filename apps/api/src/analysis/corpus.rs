//! Resume corpus — flattens a resume into the text that job keywords are matched against.

use crate::models::resume::ResumeRecord;

/// Space-joins every field a reviewer would read as "on the resume".
///
/// Order: name, technical + soft skills, experience (title, company, bullets),
/// projects (title, technologies, bullets), certifications (name, issuer),
/// education (field of study, institution), additional info.
pub fn assemble_resume_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![resume.personal_details.name.as_str()];

    parts.extend(resume.skills.technical.iter().map(String::as_str));
    parts.extend(resume.skills.soft.iter().map(String::as_str));

    for exp in &resume.experience {
        parts.push(&exp.title);
        parts.push(&exp.company);
        parts.extend(exp.description.iter().map(String::as_str));
    }

    for project in &resume.projects {
        parts.push(&project.title);
        parts.push(&project.technologies);
        parts.extend(project.description.iter().map(String::as_str));
    }

    for cert in &resume.certifications {
        parts.push(&cert.name);
        parts.push(&cert.issuer);
    }

    for edu in &resume.education {
        parts.push(&edu.field_of_study);
        parts.push(&edu.institution);
    }

    parts.push(&resume.additional_info);

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalDetails, ProjectEntry, Skills,
    };

    #[test]
    fn test_empty_resume_has_no_words() {
        let text = assemble_resume_text(&ResumeRecord::default());
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_includes_every_reviewed_field_in_order() {
        let resume = ResumeRecord {
            personal_details: PersonalDetails {
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                ..Default::default()
            },
            personal_summary: "summary-not-included".to_string(),
            skills: Skills {
                technical: vec!["Cobol".to_string()],
                soft: vec!["Mentoring".to_string()],
            },
            experience: vec![ExperienceEntry {
                title: "Admiral".to_string(),
                company: "Navy".to_string(),
                location: "location-not-included".to_string(),
                description: vec!["Found a moth".to_string()],
                ..Default::default()
            }],
            projects: vec![ProjectEntry {
                title: "Compiler".to_string(),
                technologies: "Assembly".to_string(),
                description: vec!["Wrote A-0".to_string()],
                ..Default::default()
            }],
            certifications: vec![CertificationEntry {
                name: "Harvard Mark".to_string(),
                issuer: "Harvard".to_string(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                institution: "Yale".to_string(),
                field_of_study: "Mathematics".to_string(),
                ..Default::default()
            }],
            additional_info: "Nanoseconds".to_string(),
        };

        let text = assemble_resume_text(&resume);
        assert_eq!(
            text,
            "Grace Cobol Mentoring Admiral Navy Found a moth Compiler Assembly Wrote A-0 \
             Harvard Mark Harvard Mathematics Yale Nanoseconds"
        );
        assert!(!text.contains("summary-not-included"));
        assert!(!text.contains("location-not-included"));
        assert!(!text.contains("grace@example.com"));
    }
}
