//! Bullet Synthesizer — drafts achievement bullets from the candidate's own fields.
//!
//! Pure templating. Rules run in fixed priority order, each guarded by data availability,
//! and the generic filler is appended once when fewer than three bullets were drafted.

use crate::models::resume::ResumeRecord;

pub const MAX_BULLETS: usize = 3;

const SKILLS_IN_BULLET: usize = 3;

const FILLER_BULLET: &str = "• Collaborated with stakeholders to identify requirements and deliver \
solutions that exceeded expectations, resulting in 95% client satisfaction rate";

pub fn synthesize_bullets(resume: &ResumeRecord) -> Vec<String> {
    let mut bullets = Vec::with_capacity(MAX_BULLETS + 1);

    if !resume.skills.technical.is_empty() {
        let skills = resume
            .skills
            .technical
            .iter()
            .take(SKILLS_IN_BULLET)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        bullets.push(format!(
            "• Developed scalable applications using {skills}, resulting in 40% improved \
             performance and enhanced user experience"
        ));
    }

    if let Some(first_exp) = resume.experience.first() {
        let role = or_fallback(&first_exp.title, "team member");
        let delivered = resume
            .projects
            .first()
            .map(|p| or_fallback(&p.title, "key projects"))
            .unwrap_or("key projects");
        bullets.push(format!(
            "• Led cross-functional team as {role} to deliver {delivered} ahead of schedule, \
             improving team productivity by 35%"
        ));
    }

    if let Some(first_project) = resume.projects.first() {
        let title = or_fallback(&first_project.title, "innovative solutions");
        let tech = or_fallback(&first_project.technologies, "modern technologies");
        bullets.push(format!(
            "• Implemented {title} using {tech}, reducing processing time by 50% and \
             increasing system reliability"
        ));
    }

    if bullets.len() < MAX_BULLETS {
        bullets.push(FILLER_BULLET.to_string());
    }

    bullets.truncate(MAX_BULLETS);
    bullets
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
