use crate::models::MatchingContext;
use crate::render::error::RenderError;
use crate::render::snippet;
use crate::services::DownloadLinkResolver;
use handlebars::Handlebars;
use serde::Serialize;

/// Embedded results page template; compiled once at startup.
const RESULTS_TEMPLATE: &str = include_str!("templates/results.hbs");
const RESULTS_TEMPLATE_NAME: &str = "results";

/// Renders a matching context into the complete results page
///
/// The renderer is stateless across invocations: it holds only the
/// compiled template registry, so one instance can serve concurrent
/// requests without coordination. All display decisions (sentinels,
/// glyphs, truncation, link construction) happen while building the
/// view-model; the template contains only markup structure and escapes
/// every interpolated value.
pub struct ResultsRenderer {
    registry: Handlebars<'static>,
}

impl ResultsRenderer {
    /// Compile the embedded template into a new renderer
    ///
    /// Fails only if the embedded template itself is malformed, which is a
    /// build defect; callers treat this as a startup error.
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        // A view-model field the template cannot find is a bug, not a
        // blank to render over.
        registry.set_strict_mode(true);
        registry.register_template_string(RESULTS_TEMPLATE_NAME, RESULTS_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render the results page for one validated context
    ///
    /// Pure transformation: no I/O, no mutation of the context, and
    /// byte-identical output for identical input.
    pub fn render(
        &self,
        context: &MatchingContext,
        resolver: &dyn DownloadLinkResolver,
    ) -> Result<String, RenderError> {
        let page = build_view_model(context, resolver);
        Ok(self.registry.render(RESULTS_TEMPLATE_NAME, &page)?)
    }
}

#[derive(Debug, Serialize)]
struct ResultsPageVm {
    min_experience: String,
    has_resumes: bool,
    resumes: Vec<ResumeVm>,
}

#[derive(Debug, Serialize)]
struct ResumeVm {
    filename: String,
    score: String,
    experience_label: String,
    experience_marker: &'static str,
    marker_class: &'static str,
    download_href: String,
    found_sections: Vec<KeywordVm>,
}

#[derive(Debug, Serialize)]
struct KeywordVm {
    keyword: String,
    snippets: Vec<String>,
}

/// Project the domain context into template fields, in input order
fn build_view_model(context: &MatchingContext, resolver: &dyn DownloadLinkResolver) -> ResultsPageVm {
    let resumes = context
        .resumes
        .iter()
        .map(|resume| {
            // Absence renders the sentinel; zero years renders "0 years".
            let experience_label = match resume.experience {
                Some(years) => format!("{} years", years),
                None => "N/A".to_string(),
            };

            let (experience_marker, marker_class) = if resume.experience_met {
                ("✓", "met")
            } else {
                ("✗", "not-met")
            };

            ResumeVm {
                filename: resume.filename.clone(),
                score: resume.score.to_string(),
                experience_label,
                experience_marker,
                marker_class,
                download_href: resolver.resolve(&resume.filename),
                found_sections: resume
                    .found_sections
                    .iter()
                    .map(|section| KeywordVm {
                        keyword: section.keyword.clone(),
                        snippets: section.snippets.iter().map(|s| snippet::preview(s)).collect(),
                    })
                    .collect(),
            }
        })
        .collect();

    ResultsPageVm {
        min_experience: context.min_experience.to_string(),
        has_resumes: !context.resumes.is_empty(),
        resumes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeywordContext, ResumeResult};
    use crate::services::StaticPathResolver;

    fn create_resume(filename: &str, score: f64, experience: Option<f64>, met: bool) -> ResumeResult {
        ResumeResult {
            filename: filename.to_string(),
            score,
            experience,
            experience_met: met,
            found_sections: vec![],
        }
    }

    fn render(context: &MatchingContext) -> String {
        let renderer = ResultsRenderer::new().unwrap();
        let resolver = StaticPathResolver::new("/download");
        renderer.render(context, &resolver).unwrap()
    }

    #[test]
    fn test_header_shows_threshold() {
        let context = MatchingContext { min_experience: 3.0, resumes: vec![] };
        let html = render(&context);
        assert!(html.contains("Minimum Experience Required: 3 years"));
    }

    #[test]
    fn test_empty_resumes_renders_message_and_no_blocks() {
        let context = MatchingContext { min_experience: 3.0, resumes: vec![] };
        let html = render(&context);
        assert!(html.contains("No matching resumes found."));
        assert!(!html.contains("class=\"resume\""));
    }

    #[test]
    fn test_scenario_alice() {
        let long_snippet = "a".repeat(120);
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![ResumeResult {
                filename: "alice.pdf".to_string(),
                score: 0.92,
                experience: Some(5.0),
                experience_met: true,
                found_sections: vec![KeywordContext {
                    keyword: "python".to_string(),
                    snippets: vec![long_snippet.clone()],
                }],
            }],
        };

        let html = render(&context);
        assert!(html.contains("alice.pdf"));
        assert!(html.contains("Score: 0.92"));
        assert!(html.contains("Experience: 5 years"));
        assert!(html.contains("✓"));
        assert!(!html.contains("✗"));
        assert!(html.contains("python"));
        assert!(html.contains(&format!("{}...", "a".repeat(100))));
        assert!(!html.contains(&long_snippet));
    }

    #[test]
    fn test_scenario_bob_missing_experience() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![create_resume("bob.pdf", 0.4, None, false)],
        };

        let html = render(&context);
        assert!(html.contains("Experience: N/A"));
        assert!(html.contains("✗"));
        assert!(!html.contains("✓"));
        // The disclosure is still present, with an empty keyword list.
        assert!(html.contains("Keyword Context"));
    }

    #[test]
    fn test_zero_experience_is_not_the_sentinel() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![create_resume("junior.pdf", 0.5, Some(0.0), false)],
        };

        let html = render(&context);
        assert!(html.contains("Experience: 0 years"));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn test_exactly_one_marker_per_resume() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![
                create_resume("met.pdf", 1.0, Some(5.0), true),
                create_resume("not_met.pdf", 1.0, Some(1.0), false),
            ],
        };

        let html = render(&context);
        assert_eq!(html.matches('✓').count(), 1);
        assert_eq!(html.matches('✗').count(), 1);
    }

    #[test]
    fn test_download_link_uses_resolver() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![create_resume("jane doe.pdf", 0.7, Some(4.0), true)],
        };

        let html = render(&context);
        assert!(html.contains("href=\"/download/jane%20doe.pdf\""));
    }

    #[test]
    fn test_resume_blocks_preserve_input_order() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![
                create_resume("zeta.pdf", 0.1, None, false),
                create_resume("alpha.pdf", 0.9, None, false),
            ],
        };

        let html = render(&context);
        let zeta = html.find("zeta.pdf").unwrap();
        let alpha = html.find("alpha.pdf").unwrap();
        assert!(zeta < alpha, "blocks must follow input order, not score or name");
    }

    #[test]
    fn test_keyword_entries_preserve_insertion_order() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![ResumeResult {
                filename: "alice.pdf".to_string(),
                score: 0.9,
                experience: Some(5.0),
                experience_met: true,
                found_sections: vec![
                    KeywordContext { keyword: "terraform".to_string(), snippets: vec![] },
                    KeywordContext { keyword: "aws".to_string(), snippets: vec![] },
                ],
            }],
        };

        let html = render(&context);
        let terraform = html.find("terraform").unwrap();
        let aws = html.find("aws").unwrap();
        assert!(terraform < aws);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![create_resume("alice.pdf", 0.92, Some(5.0), true)],
        };

        let renderer = ResultsRenderer::new().unwrap();
        let resolver = StaticPathResolver::new("/download");
        let first = renderer.render(&context, &resolver).unwrap();
        let second = renderer.render(&context, &resolver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let context = MatchingContext {
            min_experience: 3.0,
            resumes: vec![ResumeResult {
                filename: "<script>alert(1)</script>.pdf".to_string(),
                score: 0.5,
                experience: None,
                experience_met: false,
                found_sections: vec![KeywordContext {
                    keyword: "c++".to_string(),
                    snippets: vec!["5 < 6 && 7 > 2".to_string()],
                }],
            }],
        };

        let html = render(&context);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("5 &lt; 6"));
    }
}
