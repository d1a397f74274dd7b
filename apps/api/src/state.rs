use std::sync::Arc;

use crate::analysis::session::AnalysisSession;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the pluggable analyzer (`Arc<dyn ResumeAnalyzer>`) and the latest-result slot.
    pub analysis: Arc<AnalysisSession>,
}
