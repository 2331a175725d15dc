use crate::models::{KeywordContext, MatchingContext, RenderResultsRequest, ResumeResult};
use crate::render::error::RenderError;
use serde_json::Value;

/// Convert a pipeline render request into a validated `MatchingContext`
///
/// Fails on the first violation rather than coercing: a missing required
/// field or a malformed `found_sections` aborts the render entirely.
pub fn build_context(request: RenderResultsRequest) -> Result<MatchingContext, RenderError> {
    let min_experience = request
        .min_experience
        .ok_or(RenderError::MissingContext { field: "min_experience" })?;
    let inputs = request
        .resumes
        .ok_or(RenderError::MissingContext { field: "resumes" })?;

    let mut resumes = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        let filename = input
            .filename
            .ok_or(RenderError::MissingField { field: "filename", index })?;
        let score = input
            .score
            .ok_or(RenderError::MissingField { field: "score", index })?;
        let sections = input
            .found_sections
            .ok_or(RenderError::MissingField { field: "found_sections", index })?;

        resumes.push(ResumeResult {
            filename,
            score,
            experience: input.experience,
            // Not a required field; an absent flag reads as "not met".
            experience_met: input.experience_met.unwrap_or(false),
            found_sections: parse_found_sections(sections, index)?,
        });
    }

    Ok(MatchingContext { min_experience, resumes })
}

/// Parse the raw `found_sections` JSON into ordered keyword evidence
///
/// Must be a JSON object mapping each keyword to an array of context
/// strings. Key insertion order is preserved (serde_json `preserve_order`).
fn parse_found_sections(value: Value, index: usize) -> Result<Vec<KeywordContext>, RenderError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(RenderError::Schema {
                detail: format!(
                    "resume at index {index}: found_sections must be an object, got {}",
                    json_type(&other)
                ),
            });
        }
    };

    let mut sections = Vec::with_capacity(map.len());
    for (keyword, entry) in map {
        let items = match entry {
            Value::Array(items) => items,
            other => {
                return Err(RenderError::Schema {
                    detail: format!(
                        "resume at index {index}: contexts for keyword '{keyword}' must be an array, got {}",
                        json_type(&other)
                    ),
                });
            }
        };

        let mut snippets = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(snippet) => snippets.push(snippet),
                other => {
                    return Err(RenderError::Schema {
                        detail: format!(
                            "resume at index {index}: context entry for keyword '{keyword}' must be a string, got {}",
                            json_type(&other)
                        ),
                    });
                }
            }
        }

        sections.push(KeywordContext { keyword, snippets });
    }

    Ok(sections)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
