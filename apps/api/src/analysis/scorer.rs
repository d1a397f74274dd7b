//! Scorer — composite compatibility score from keyword coverage and section completeness.
//!
//! score = clamp(coverage × 40 + completeness, 25, 95), rounded.
//!
//! The 25 floor and 95 ceiling are product behavior: never show a near-zero score,
//! never claim a perfect match from a keyword heuristic.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

pub const KEYWORD_WEIGHT: f64 = 40.0;
pub const SCORE_FLOOR: f64 = 25.0;
pub const SCORE_CEILING: f64 = 95.0;

const CONTACT_POINTS: f64 = 10.0;
const TECHNICAL_SKILLS_POINTS: f64 = 15.0;
const EXPERIENCE_POINTS: f64 = 20.0;
const PROJECTS_POINTS: f64 = 10.0;
const EDUCATION_POINTS: f64 = 5.0;

/// Keyword coverage, 0.0 – 40.0. An empty job token list counts as denominator 1.
pub fn keyword_score(job_tokens: &[String], matched_tokens: &[String]) -> f64 {
    let denominator = job_tokens.len().max(1) as f64;
    (matched_tokens.len() as f64 / denominator) * KEYWORD_WEIGHT
}

/// Fixed points per populated section, 0.0 – 60.0.
pub fn completeness_score(resume: &ResumeRecord) -> f64 {
    let sections = [
        (resume.personal_details.has_contact(), CONTACT_POINTS),
        (!resume.skills.technical.is_empty(), TECHNICAL_SKILLS_POINTS),
        (!resume.experience.is_empty(), EXPERIENCE_POINTS),
        (!resume.projects.is_empty(), PROJECTS_POINTS),
        (!resume.education.is_empty(), EDUCATION_POINTS),
    ];

    sections
        .iter()
        .filter(|(populated, _)| *populated)
        .map(|(_, points)| points)
        .sum()
}

/// `matched_tokens` is every matched job-token occurrence (not the capped display list).
pub fn compute_score(job_tokens: &[String], matched_tokens: &[String], resume: &ResumeRecord) -> u32 {
    let raw = keyword_score(job_tokens, matched_tokens) + completeness_score(resume);
    raw.clamp(SCORE_FLOOR, SCORE_CEILING).round() as u32
}

/// Qualitative reading of a score, for display next to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent match! Your resume is well-optimized for this role.",
            ScoreBand::Good => "Good match with room for improvement.",
            ScoreBand::NeedsImprovement => {
                "Needs significant improvement to match job requirements."
            }
        }
    }
}
