//! Keyword Matcher — splits job tokens into matched / missing against the resume tokens.
//!
//! A job token matches when some resume token contains it, or it contains some resume
//! token. Bidirectional containment catches stems, plurals and compounds
//! ("manage" ~ "management", "reactjs" ~ "react"). Short tokens can still match loosely;
//! the tokenizer's minimum length keeps the worst of it out.

use std::collections::HashSet;

/// Maximum entries reported in each of `matched` / `missing`.
pub const KEYWORD_LIST_CAP: usize = 12;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    /// Distinct matched job tokens in job order, capped.
    pub matched: Vec<String>,
    /// Distinct unmatched job tokens in job order, capped.
    pub missing: Vec<String>,
    /// Every job token occurrence that matched, uncapped. Drives the coverage ratio.
    pub matched_occurrences: Vec<String>,
}

/// Bidirectional substring containment.
pub fn tokens_related(job_token: &str, resume_token: &str) -> bool {
    resume_token.contains(job_token) || job_token.contains(resume_token)
}

pub fn match_keywords(job_tokens: &[String], resume_tokens: &[String]) -> KeywordMatch {
    let vocabulary: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();

    let mut result = KeywordMatch::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in job_tokens {
        let is_match = vocabulary
            .iter()
            .any(|resume_token| tokens_related(token, resume_token));

        if is_match {
            result.matched_occurrences.push(token.clone());
        }

        if !seen.insert(token.as_str()) {
            continue;
        }

        let bucket = if is_match {
            &mut result.matched
        } else {
            &mut result.missing
        };
        if bucket.len() < KEYWORD_LIST_CAP {
            bucket.push(token.clone());
        }
    }

    result
}
