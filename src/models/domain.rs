use serde::{Deserialize, Serialize};

/// Fully-validated input to one results render
///
/// Constructed per request by the upstream matching pipeline, passed once
/// to the renderer, and discarded. The view never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingContext {
    #[serde(rename = "minExperience")]
    pub min_experience: f64,
    pub resumes: Vec<ResumeResult>,
}

/// One matched candidate, scored and annotated by the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResult {
    /// Filename of the resume, also the lookup key the file-serving
    /// endpoint understands.
    pub filename: String,
    pub score: f64,
    /// Years of experience inferred from the resume; None when the
    /// pipeline could not find any (distinct from zero years).
    pub experience: Option<f64>,
    #[serde(rename = "experienceMet")]
    pub experience_met: bool,
    /// Keyword evidence in pipeline insertion order.
    #[serde(rename = "foundSections")]
    pub found_sections: Vec<KeywordContext>,
}

/// Context snippets in which one keyword was found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordContext {
    pub keyword: String,
    pub snippets: Vec<String>,
}
