use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;
use crate::profile::progress::{compute_progress, ProgressReport};
use crate::profile::skills::{categorize_skills, SkillGroup};

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    #[serde(default)]
    pub technical: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub groups: Vec<SkillGroup>,
}

/// POST /api/v1/resume/progress
pub async fn handle_progress(Json(resume): Json<ResumeRecord>) -> Json<ProgressReport> {
    Json(compute_progress(&resume))
}

/// POST /api/v1/resume/skills/categorize
pub async fn handle_categorize(Json(req): Json<CategorizeRequest>) -> Json<CategorizeResponse> {
    Json(CategorizeResponse {
        groups: categorize_skills(&req.technical),
    })
}
