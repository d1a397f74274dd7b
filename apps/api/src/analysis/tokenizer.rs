//! Tokenizer — turns free text into lower-cased, stop-word filtered keywords.

/// Job descriptions are cut to this many surviving tokens.
pub const JOB_TOKEN_CAP: usize = 30;

/// Tokens this short or shorter are noise ("a", "to", "is").
const MIN_TOKEN_LEN: usize = 3;

/// Articles, prepositions, conjunctions and auxiliary/modal verbs.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between",
    "among", "under", "over", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "can", "shall", "need",
];

/// Tokenizes arbitrary text. Output order is first-occurrence order in the source;
/// duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Tokenizes a job description, keeping only the first `JOB_TOKEN_CAP` tokens.
pub fn tokenize_job_description(text: &str) -> Vec<String> {
    let mut tokens = tokenize(text);
    tokens.truncate(JOB_TOKEN_CAP);
    tokens
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Lower-cases (full Unicode) and blanks out everything that is not a letter, digit or
/// whitespace, so punctuation separates words instead of gluing them together.
fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c.is_whitespace() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Rust  Tokio\tAXUM\nserde"), vec!["rust", "tokio", "axum", "serde"]);
    }

    #[test]
    fn test_punctuation_separates_words() {
        assert_eq!(tokenize("node.js/react,docker"), vec!["node", "react", "docker"]);
        assert_eq!(tokenize("CI/CD"), Vec::<String>::new());
        assert_eq!(tokenize("snake_case"), vec!["snake", "case"]);
    }

    #[test]
    fn test_drops_short_tokens() {
        assert_eq!(tokenize("go to AI ml sql"), vec!["sql"]);
    }

    #[test]
    fn test_drops_stop_words() {
        let tokens = tokenize("We need a React developer with AWS and Docker experience");
        assert_eq!(tokens, vec!["react", "developer", "aws", "docker", "experience"]);
    }

    #[test]
    fn test_keeps_duplicates_in_source_order() {
        assert_eq!(tokenize("rust python rust"), vec!["rust", "python", "rust"]);
    }

    #[test]
    fn test_job_description_is_capped() {
        let text = (0..45).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let tokens = tokenize_job_description(&text);
        assert_eq!(tokens.len(), JOB_TOKEN_CAP);
        assert_eq!(tokens[0], "word0");
        assert_eq!(tokens[JOB_TOKEN_CAP - 1], "word29");
    }

    #[test]
    fn test_uncapped_tokenize_keeps_everything() {
        let text = (0..45).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        assert_eq!(tokenize(&text).len(), 45);
    }

    #[test]
    fn test_only_stop_words_and_punctuation_yields_nothing() {
        assert!(tokenize("and the, of... with!!! --- should").is_empty());
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Senior Rust Engineer: distributed systems, Kubernetes & Kafka.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_lowercases_non_ascii_letters() {
        assert_eq!(tokenize("Énergie ÉNERGIE"), vec!["énergie", "énergie"]);
        assert_eq!(tokenize("Straße MÜNCHEN"), vec!["straße", "münchen"]);
    }

    #[test]
    fn test_stop_word_list_contents() {
        let expected = [
            "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
            "up", "about", "into", "through", "during", "before", "after", "above", "below",
            "between", "among", "under", "over", "is", "are", "was", "were", "be", "been",
            "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
            "should", "may", "might", "must", "can", "shall", "need",
        ];
        assert_eq!(STOP_WORDS.len(), 49);
        assert_eq!(STOP_WORDS, expected);
        assert!(is_stop_word("shall"));
        assert!(is_stop_word("need"));
        assert!(!is_stop_word("rust"));
    }
}
