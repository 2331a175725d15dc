//! Scout Results - results rendering service for the Scout resume screening platform
//!
//! This library renders pre-computed resume matching results into the HTML
//! results page shown to recruiters. The scoring pipeline, keyword
//! extraction, and resume file serving live in separate services; this
//! crate is a pure view layer over their output.

pub mod config;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use models::{MatchingContext, ResumeResult, KeywordContext, RenderResultsRequest};
pub use render::{build_context, RenderError, ResultsRenderer};
pub use services::{DownloadLinkResolver, StaticPathResolver};
