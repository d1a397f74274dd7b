// Resume profile helpers for the form and preview layers: section progress and
// skill categorization. Neither feeds the match score.

pub mod handlers;
pub mod progress;
pub mod skills;
