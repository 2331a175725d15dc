use thiserror::Error;

/// Errors that can occur while building or rendering a results page
///
/// Validation variants abort the render rather than emit a partially-broken
/// page; a silently degraded page would misrepresent match results.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing context field: {field}")]
    MissingContext { field: &'static str },

    #[error("resume at index {index} is missing required field: {field}")]
    MissingField { field: &'static str, index: usize },

    #[error("malformed found_sections: {detail}")]
    Schema { detail: String },

    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl RenderError {
    /// Short machine-readable label for error responses
    pub fn label(&self) -> &'static str {
        match self {
            RenderError::MissingContext { .. } => "missing_context",
            RenderError::MissingField { .. } => "missing_field",
            RenderError::Schema { .. } => "schema_error",
            RenderError::Template(_) => "template_error",
        }
    }
}
