use serde::{Deserialize, Serialize};
use validator::Validate;

/// Render request posted by the matching pipeline
///
/// Every field is optional at this layer so the service can name exactly
/// which part of the context is missing or malformed, instead of surfacing
/// an opaque deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenderResultsRequest {
    #[validate(range(min = 0.0))]
    #[serde(alias = "min_experience", rename = "minExperience")]
    pub min_experience: Option<f64>,
    pub resumes: Option<Vec<ResumeResultInput>>,
}

/// One resume record as received from the pipeline, prior to validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResultInput {
    pub filename: Option<String>,
    pub score: Option<f64>,
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(alias = "experience_met", rename = "experienceMet", default)]
    pub experience_met: Option<bool>,
    // Kept as raw JSON so keyword insertion order survives and schema
    // violations can be reported precisely.
    #[serde(alias = "found_sections", rename = "foundSections", default)]
    pub found_sections: Option<serde_json::Value>,
}
