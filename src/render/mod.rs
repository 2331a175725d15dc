// Rendering core exports
pub mod error;
pub mod page;
pub mod snippet;
pub mod validate;

pub use error::RenderError;
pub use page::ResultsRenderer;
pub use snippet::{preview, SNIPPET_PREVIEW_CHARS};
pub use validate::build_context;
