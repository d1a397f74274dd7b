// Job-Match Analyzer
// Pipeline: tokenize job text + resume corpus → keyword match → score → bullet synthesis.
// The session wraps the pure pipeline with pacing, cancellation and the latest-result slot.

pub mod analyzer;
pub mod corpus;
pub mod handlers;
pub mod matcher;
pub mod scorer;
pub mod session;
pub mod synthesizer;
pub mod tokenizer;
