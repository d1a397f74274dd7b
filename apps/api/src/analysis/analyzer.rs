//! Match Analyzer — pluggable, trait-based job/resume compatibility analysis.
//!
//! Default: `KeywordAnalyzer` (token overlap + section completeness, deterministic).
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` inside the analysis session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::corpus::assemble_resume_text;
use crate::analysis::matcher::match_keywords;
use crate::analysis::scorer::compute_score;
use crate::analysis::synthesizer::synthesize_bullets;
use crate::analysis::tokenizer::{tokenize, tokenize_job_description};
use crate::models::resume::ResumeRecord;

const MAX_SUGGESTIONS: usize = 4;

/// Improvement catalogue; only the leading `MAX_SUGGESTIONS` are surfaced.
const SUGGESTIONS: &[&str] = &[
    "Include more relevant technical skills mentioned in the job description",
    "Add quantifiable achievements with numbers and percentages",
    "Use action verbs to start each bullet point (Led, Developed, Implemented)",
    "Tailor your experience descriptions to match job requirements",
    "Include industry-specific keywords and terminology",
    "Highlight relevant certifications and training",
];

/// One analysis, immutable once produced. Superseded, never merged, by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 25 – 95
    pub score: u32,
    pub suggestions: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub tailored_bullets: Vec<String>,
}

/// Implement this to swap the analysis backend without touching the session or handlers.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// `None` when the job description is empty or whitespace: the request is refused.
    async fn analyze(&self, job_description: &str, resume: &ResumeRecord)
        -> Option<AnalysisResult>;
}

pub struct KeywordAnalyzer;

#[async_trait]
impl ResumeAnalyzer for KeywordAnalyzer {
    async fn analyze(
        &self,
        job_description: &str,
        resume: &ResumeRecord,
    ) -> Option<AnalysisResult> {
        analyze_keywords(job_description, resume)
    }
}

/// Tokenize → match → score → synthesize. Synchronous and side-effect free.
pub fn analyze_keywords(job_description: &str, resume: &ResumeRecord) -> Option<AnalysisResult> {
    if job_description.trim().is_empty() {
        return None;
    }

    let job_tokens = tokenize_job_description(job_description);
    let resume_tokens = tokenize(&assemble_resume_text(resume));
    let keywords = match_keywords(&job_tokens, &resume_tokens);
    let score = compute_score(&job_tokens, &keywords.matched_occurrences, resume);

    debug!(
        job_tokens = job_tokens.len(),
        resume_tokens = resume_tokens.len(),
        matched = keywords.matched_occurrences.len(),
        score,
        "keyword analysis computed"
    );

    Some(AnalysisResult {
        score,
        suggestions: SUGGESTIONS
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|s| s.to_string())
            .collect(),
        matched_keywords: keywords.matched,
        missing_keywords: keywords.missing,
        tailored_bullets: synthesize_bullets(resume),
    })
}
