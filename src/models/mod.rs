// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchingContext, ResumeResult, KeywordContext};
pub use requests::{RenderResultsRequest, ResumeResultInput};
pub use responses::{HealthResponse, ErrorResponse};
